use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use bson::{Bson, Document};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::AppResult;
use crate::store::{DocumentStore, StoredDocument};

/// In-memory document store for unit testing and offline use.
///
/// Collections are insertion-ordered vectors, so retrieval order matches
/// creation order.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<HashMap<String, Vec<StoredDocument>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Resolve a dotted field path inside a document
fn lookup_path<'a>(fields: &'a Document, path: &str) -> Option<&'a Bson> {
    let mut segments = path.split('.').peekable();
    let mut doc = fields;

    while let Some(segment) = segments.next() {
        let value = doc.get(segment)?;
        if segments.peek().is_none() {
            return Some(value);
        }
        match value {
            Bson::Document(inner) => doc = inner,
            _ => return None,
        }
    }

    None
}

fn matches_eq(fields: &Document, path: &str, value: &Bson) -> bool {
    match lookup_path(fields, path) {
        Some(Bson::Array(items)) => items.contains(value),
        Some(found) => found == value,
        None => false,
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list_all(&self, collection: &str) -> AppResult<Vec<StoredDocument>> {
        let inner = self.inner.lock().await;
        Ok(inner.get(collection).cloned().unwrap_or_default())
    }

    async fn get_by_id(&self, collection: &str, id: &str) -> AppResult<Option<StoredDocument>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .get(collection)
            .and_then(|documents| documents.iter().find(|d| d.id == id))
            .cloned())
    }

    async fn query_eq(
        &self,
        collection: &str,
        field_path: &str,
        value: Bson,
    ) -> AppResult<Vec<StoredDocument>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|d| matches_eq(&d.fields, field_path, &value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn create(&self, collection: &str, fields: Document) -> AppResult<String> {
        let id = Uuid::new_v4().to_string();

        let mut inner = self.inner.lock().await;
        inner
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument {
                id: id.clone(),
                fields,
            });

        Ok(id)
    }

    async fn merge(&self, collection: &str, id: &str, fields: Document) -> AppResult<()> {
        let mut inner = self.inner.lock().await;
        let Some(existing) = inner
            .get_mut(collection)
            .and_then(|documents| documents.iter_mut().find(|d| d.id == id))
        else {
            // Merging into a missing document is a no-op
            return Ok(());
        };

        for (key, value) in fields {
            existing.fields.insert(key, value);
        }

        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> AppResult<()> {
        let mut inner = self.inner.lock().await;
        if let Some(documents) = inner.get_mut(collection) {
            documents.retain(|d| d.id != id);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bson::doc;

    use super::*;

    #[tokio::test]
    async fn test_create_and_get() {
        let store = MemoryStore::new();

        let id = store
            .create("things", doc! { "name": "first", "count": 3 })
            .await
            .unwrap();

        let stored = store.get_by_id("things", &id).await.unwrap().unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.fields, doc! { "name": "first", "count": 3 });
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = MemoryStore::new();
        assert!(store.get_by_id("things", "nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_preserves_insertion_order() {
        let store = MemoryStore::new();
        let first = store.create("things", doc! { "n": 1 }).await.unwrap();
        let second = store.create("things", doc! { "n": 2 }).await.unwrap();
        let third = store.create("things", doc! { "n": 3 }).await.unwrap();

        let ids: Vec<String> = store
            .list_all("things")
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, [first, second, third]);
    }

    #[tokio::test]
    async fn test_merge_overwrites_only_supplied_fields() {
        let store = MemoryStore::new();
        let id = store
            .create("things", doc! { "a": 1, "b": 2 })
            .await
            .unwrap();

        store.merge("things", &id, doc! { "b": 3 }).await.unwrap();

        let stored = store.get_by_id("things", &id).await.unwrap().unwrap();
        assert_eq!(stored.fields, doc! { "a": 1, "b": 3 });
    }

    #[tokio::test]
    async fn test_merge_missing_is_noop() {
        let store = MemoryStore::new();
        store
            .merge("things", "nope", doc! { "a": 1 })
            .await
            .unwrap();

        assert!(store.list_all("things").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_and_delete_missing() {
        let store = MemoryStore::new();
        let id = store.create("things", doc! { "n": 1 }).await.unwrap();

        store.delete("things", &id).await.unwrap();
        assert!(store.get_by_id("things", &id).await.unwrap().is_none());

        // Deleting again is a no-op, not an error
        store.delete("things", &id).await.unwrap();
    }

    #[tokio::test]
    async fn test_query_eq_scalar() {
        let store = MemoryStore::new();
        store
            .create("things", doc! { "kind": "a", "n": 1 })
            .await
            .unwrap();
        store
            .create("things", doc! { "kind": "b", "n": 2 })
            .await
            .unwrap();

        let found = store
            .query_eq("things", "kind", Bson::String("a".to_string()))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].fields.get_i32("n").unwrap(), 1);
    }

    #[tokio::test]
    async fn test_query_eq_array_contains() {
        let store = MemoryStore::new();
        store
            .create("things", doc! { "team": ["u1", "u2"] })
            .await
            .unwrap();
        store
            .create("things", doc! { "team": ["u3"] })
            .await
            .unwrap();

        let found = store
            .query_eq("things", "team", Bson::String("u2".to_string()))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_query_eq_dotted_path() {
        let store = MemoryStore::new();
        store
            .create("things", doc! { "industry": { "text": "Fintech" } })
            .await
            .unwrap();
        store
            .create("things", doc! { "industry": { "text": "Health" } })
            .await
            .unwrap();

        let found = store
            .query_eq(
                "things",
                "industry.text",
                Bson::String("Fintech".to_string()),
            )
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
    }
}
