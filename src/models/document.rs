//! Document contents and value helpers

use serde_json::{Map, Value};

use crate::error::{StoreError, StoreResult};

/// Contents of a document: a JSON object
pub type Document = Map<String, Value>;

/// Parse raw file contents into a document
///
/// Anything that is not a JSON object (invalid JSON, arrays, scalars) is
/// reported as [`StoreError::NotAnObject`] for `id`.
pub fn parse_document(id: &str, raw: &str) -> StoreResult<Document> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) | Err(_) => Err(StoreError::not_an_object(id)),
    }
}

/// Whether a value counts as present for key filtering
///
/// `null`, `false`, `0` and `""` are falsy. Everything else is truthy,
/// including empty arrays and empty objects.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Whether `doc` holds a truthy value under `key`
pub fn has_truthy(doc: &Document, key: &str) -> bool {
    doc.get(key).map(is_truthy).unwrap_or(false)
}

/// Render a value for people: strings bare, everything else as JSON text
pub fn describe_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_object() {
        let doc = parse_document("scott", r#"{"firstname": "Scott"}"#).unwrap();
        assert_eq!(doc.get("firstname"), Some(&json!("Scott")));
    }

    #[test]
    fn test_parse_rejects_non_objects() {
        for raw in ["[1, 2]", "42", "\"text\"", "null", "{not json", ""] {
            let err = parse_document("bad", raw).unwrap_err();
            assert!(
                matches!(err, StoreError::NotAnObject { .. }),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));

        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_has_truthy_missing_key() {
        let doc = parse_document("d", r#"{"a": 1, "b": 0}"#).unwrap();
        assert!(has_truthy(&doc, "a"));
        assert!(!has_truthy(&doc, "b"));
        assert!(!has_truthy(&doc, "c"));
    }

    #[test]
    fn test_describe_value() {
        assert_eq!(describe_value(&json!("sroberts@talentpath.com")), "sroberts@talentpath.com");
        assert_eq!(describe_value(&json!(42)), "42");
        assert_eq!(describe_value(&json!({"a": [1, true]})), r#"{"a":[1,true]}"#);
    }
}
