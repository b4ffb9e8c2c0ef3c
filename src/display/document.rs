//! Document display formatting

use crate::models::{Document, DocumentId};

/// Format a document as indented JSON
pub fn format_document(doc: &Document) -> String {
    match serde_json::to_string_pretty(doc) {
        Ok(json) => format!("{}\n", json),
        Err(_) => "{}\n".to_string(),
    }
}

/// Format a list of document IDs, one per line
pub fn format_document_list(ids: &[DocumentId]) -> String {
    if ids.is_empty() {
        return "No documents found.\n".to_string();
    }

    ids.iter().map(|id| format!("{}\n", id)).collect()
}

/// Format a key list as a JSON array
pub fn format_keys(keys: &[String]) -> String {
    format!("{}\n", serde_json::to_string(keys).unwrap_or_else(|_| "[]".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_document() {
        let serde_json::Value::Object(doc) = json!({"title": "X"}) else {
            unreachable!()
        };
        assert_eq!(format_document(&doc), "{\n  \"title\": \"X\"\n}\n");
    }

    #[test]
    fn test_format_document_list() {
        let ids = vec![
            DocumentId::parse("andrew").unwrap(),
            DocumentId::parse("post").unwrap(),
        ];
        assert_eq!(format_document_list(&ids), "andrew\npost\n");
        assert_eq!(format_document_list(&[]), "No documents found.\n");
    }

    #[test]
    fn test_format_keys() {
        let keys = vec!["a".to_string(), "c".to_string()];
        assert_eq!(format_keys(&keys), "[\"a\",\"c\"]\n");
    }
}
