//! Key-set algebra across two documents
//!
//! Union works on plain key presence. Intersection and difference use
//! value truthiness: a key whose value is `null`, `false`, `0` or `""`
//! counts as absent. A key present in both documents but falsy in one of
//! them is therefore not in the intersection.

use crate::error::StoreResult;
use crate::models::{has_truthy, Document, DocumentId};
use crate::storage::Storage;

/// Keys of `a` in order, then keys of `b` not already in `a`
pub fn union_keys(a: &Document, b: &Document) -> Vec<String> {
    let mut keys: Vec<String> = a.keys().cloned().collect();
    keys.extend(b.keys().filter(|k| !a.contains_key(*k)).cloned());
    keys
}

/// Keys of `a` whose value is truthy in both `a` and `b`
pub fn intersect_keys(a: &Document, b: &Document) -> Vec<String> {
    a.keys()
        .filter(|k| has_truthy(a, k) && has_truthy(b, k))
        .cloned()
        .collect()
}

/// Keys of `a` absent or falsy in `b`, then keys of `b` absent or falsy in `a`
pub fn difference_keys(a: &Document, b: &Document) -> Vec<String> {
    let only_a = a.keys().filter(|k| !has_truthy(b, k));
    let only_b = b.keys().filter(|k| !has_truthy(a, k));
    only_a.chain(only_b).cloned().collect()
}

/// Service for two-document key queries
///
/// Read-only: neither document is modified. Each query appends one audit
/// entry holding its result and also returns the keys.
pub struct KeySetService<'a> {
    storage: &'a Storage,
}

impl<'a> KeySetService<'a> {
    /// Create a new key-set service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Every key present in either document, without duplicates
    pub async fn union(&self, a: &str, b: &str) -> StoreResult<Vec<String>> {
        self.query("union", a, b, union_keys).await
    }

    /// Keys truthy in both documents
    pub async fn intersect(&self, a: &str, b: &str) -> StoreResult<Vec<String>> {
        self.query("intersect", a, b, intersect_keys).await
    }

    /// Keys truthy in exactly one of the documents, `a`'s first
    pub async fn difference(&self, a: &str, b: &str) -> StoreResult<Vec<String>> {
        self.query("difference", a, b, difference_keys).await
    }

    async fn query(
        &self,
        name: &str,
        a: &str,
        b: &str,
        op: fn(&Document, &Document) -> Vec<String>,
    ) -> StoreResult<Vec<String>> {
        let outcome = self
            .load_pair(a, b)
            .await
            .map(|((id_a, doc_a), (id_b, doc_b))| (id_a, id_b, op(&doc_a, &doc_b)));

        self.storage
            .record(outcome, |(id_a, id_b, keys)| {
                let rendered = serde_json::to_string(keys).unwrap_or_default();
                format!("{} of '{}' and '{}': {}", name, id_a, id_b, rendered)
            })
            .await
            .map(|(_, _, keys)| keys)
    }

    /// Load both documents concurrently; `a`'s failure is reported first
    async fn load_pair(
        &self,
        a: &str,
        b: &str,
    ) -> StoreResult<((DocumentId, Document), (DocumentId, Document))> {
        let id_a = DocumentId::parse(a)?;
        let id_b = DocumentId::parse(b)?;

        let (doc_a, doc_b) = tokio::join!(
            self.storage.documents.load(&id_a),
            self.storage.documents.load(&id_b)
        );

        Ok(((id_a, doc_a?), (id_b, doc_b?)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Settings, StorePaths};
    use crate::error::StoreError;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {}", other),
        }
    }

    fn create_test_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = StorePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, Settings::default()).unwrap();
        (storage, temp_dir)
    }

    async fn seed(storage: &Storage, name: &str, value: Value) {
        let id = DocumentId::parse(name).unwrap();
        storage.documents.save(&id, &doc(value)).await.unwrap();
    }

    #[test]
    fn test_union_no_duplicates() {
        let keys = union_keys(&doc(json!({"a": 1, "b": 2})), &doc(json!({"b": 3, "c": 4})));
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_union_includes_falsy_values() {
        let keys = union_keys(&doc(json!({"a": 0})), &doc(json!({"b": null})));
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_intersect_truthiness() {
        let keys = intersect_keys(&doc(json!({"a": 1, "b": 0})), &doc(json!({"a": 1, "b": 1})));
        assert_eq!(keys, vec!["a"]);

        let keys = intersect_keys(&doc(json!({"a": 1, "b": 1})), &doc(json!({"a": "", "b": 1})));
        assert_eq!(keys, vec!["b"]);
    }

    #[test]
    fn test_difference_ordered_segments() {
        let keys = difference_keys(&doc(json!({"a": 1, "b": 1})), &doc(json!({"b": 1, "c": 1})));
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_difference_counts_falsy_as_absent() {
        let keys = difference_keys(
            &doc(json!({"a": 1, "b": false})),
            &doc(json!({"a": null, "b": 1})),
        );
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_sample_documents() {
        let scott = doc(json!({
            "firstname": "Scott",
            "lastname": "Roberts",
            "email": "sroberts@talentpath.com",
            "username": "scoot",
        }));
        let andrew = doc(json!({
            "firstname": "Andrew",
            "lastname": "Maney",
            "email": "amaney@talentpath.com",
        }));

        assert_eq!(
            union_keys(&scott, &andrew),
            vec!["firstname", "lastname", "email", "username"]
        );
        assert_eq!(
            intersect_keys(&scott, &andrew),
            vec!["firstname", "lastname", "email"]
        );
        assert_eq!(difference_keys(&scott, &andrew), vec!["username"]);
    }

    #[tokio::test]
    async fn test_union_logs_result() {
        let (storage, _temp) = create_test_storage();
        seed(&storage, "a", json!({"a": 1, "b": 2})).await;
        seed(&storage, "b", json!({"b": 3, "c": 4})).await;

        let keys = KeySetService::new(&storage).union("a.json", "b").await.unwrap();
        assert_eq!(keys, vec!["a", "b", "c"]);

        let entries = storage.audit.read_all().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, r#"union of 'a' and 'b': ["a","b","c"]"#);
    }

    #[tokio::test]
    async fn test_queries_are_read_only() {
        let (storage, temp) = create_test_storage();
        seed(&storage, "a", json!({"x": 1})).await;
        seed(&storage, "b", json!({"y": 0})).await;
        let before_a = std::fs::read_to_string(temp.path().join("documents/a.json")).unwrap();

        let service = KeySetService::new(&storage);
        service.union("a", "b").await.unwrap();
        service.intersect("a", "b").await.unwrap();
        service.difference("a", "b").await.unwrap();

        let after_a = std::fs::read_to_string(temp.path().join("documents/a.json")).unwrap();
        assert_eq!(before_a, after_a);
        assert_eq!(storage.audit.entry_count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_non_object_input_fails() {
        let (storage, temp) = create_test_storage();
        seed(&storage, "a", json!({"x": 1})).await;
        std::fs::write(temp.path().join("documents/b.json"), "[\"x\"]").unwrap();

        let err = KeySetService::new(&storage)
            .intersect("a", "b")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotAnObject { ref id } if id == "b"));

        let entries = storage.audit.read_all().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_error);
        assert_eq!(entries[0].message, "document 'b' does not contain an object");
    }

    #[tokio::test]
    async fn test_first_document_failure_reported_first() {
        let (storage, _temp) = create_test_storage();

        let err = KeySetService::new(&storage)
            .difference("missing_a", "missing_b")
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DocumentNotFound { ref id } if id == "missing_a"));
    }
}
