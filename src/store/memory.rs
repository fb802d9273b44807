use std::collections::HashMap;

use anyhow::Result;
use parking_lot::RwLock;
use serde_json::Value;

use crate::model::Record;
use crate::store::traits::DocumentStore;

/// In-memory store used by the test suite and as the fallback when no
/// Firebase URL is configured.
///
/// Collections are insertion-ordered vectors of `(storage key, record)`.
/// `insert_if_absent` holds the write lock across its existence check, so
/// concurrent id allocation serializes here and duplicate business ids
/// cannot be handed out.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<(String, Record)>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn id_matches(record: &Record, id_field: &str, id: i64) -> bool {
    record.get(id_field).and_then(Value::as_i64) == Some(id)
}

#[async_trait::async_trait]
impl DocumentStore for MemoryStore {
    async fn list(&self, collection: &str) -> Result<Vec<(String, Record)>> {
        Ok(self
            .collections
            .read()
            .get(collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn get(&self, collection: &str, key: &str) -> Result<Option<Record>> {
        Ok(self.collections.read().get(collection).and_then(|records| {
            records
                .iter()
                .find(|(k, _)| k.as_str() == key)
                .map(|(_, record)| record.clone())
        }))
    }

    async fn find_by_id(
        &self,
        collection: &str,
        id_field: &str,
        id: i64,
    ) -> Result<Option<(String, Record)>> {
        Ok(self.collections.read().get(collection).and_then(|records| {
            records
                .iter()
                .find(|(_, record)| id_matches(record, id_field, id))
                .cloned()
        }))
    }

    async fn put(&self, collection: &str, key: &str, record: Record) -> Result<()> {
        let mut collections = self.collections.write();
        let records = collections.entry(collection.to_string()).or_default();
        match records.iter_mut().find(|(k, _)| k.as_str() == key) {
            Some((_, existing)) => *existing = record,
            None => records.push((key.to_string(), record)),
        }
        Ok(())
    }

    async fn update(&self, collection: &str, key: &str, patch: Record) -> Result<()> {
        let mut collections = self.collections.write();
        let records = collections.entry(collection.to_string()).or_default();
        match records.iter_mut().find(|(k, _)| k.as_str() == key) {
            Some((_, existing)) => {
                for (field, value) in patch {
                    existing.insert(field, value);
                }
            }
            None => records.push((key.to_string(), patch)),
        }
        Ok(())
    }

    async fn remove(&self, collection: &str, key: &str) -> Result<bool> {
        let mut collections = self.collections.write();
        let Some(records) = collections.get_mut(collection) else {
            return Ok(false);
        };
        let before = records.len();
        records.retain(|(k, _)| k.as_str() != key);
        Ok(records.len() < before)
    }

    async fn insert_if_absent(
        &self,
        collection: &str,
        id_field: &str,
        id: i64,
        key: &str,
        record: Record,
    ) -> Result<bool> {
        let mut collections = self.collections.write();
        let records = collections.entry(collection.to_string()).or_default();
        if records.iter().any(|(_, r)| id_matches(r, id_field, id)) {
            return Ok(false);
        }
        records.push((key.to_string(), record));
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: i64, name: &str) -> Record {
        let Value::Object(map) = json!({ "companyId": id, "companyName": name }) else {
            unreachable!()
        };
        map
    }

    #[tokio::test]
    async fn put_get_and_list_preserve_insertion_order() {
        let store = MemoryStore::new();
        store.put("companies", "1", record(1, "Acme")).await.unwrap();
        store.put("companies", "2", record(2, "Globex")).await.unwrap();
        store.put("companies", "10", record(10, "Initech")).await.unwrap();

        let listed = store.list("companies").await.unwrap();
        let keys: Vec<_> = listed.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["1", "2", "10"]);

        let fetched = store.get("companies", "2").await.unwrap().unwrap();
        assert_eq!(fetched["companyName"], "Globex");
        assert!(store.get("companies", "99").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_id_scans_the_id_field_not_the_key() {
        let store = MemoryStore::new();
        // Storage key deliberately different from the business id.
        store.put("companies", "k-7", record(7, "Acme")).await.unwrap();

        let (key, found) = store.find_by_id("companies", "companyId", 7).await.unwrap().unwrap();
        assert_eq!(key, "k-7");
        assert_eq!(found["companyName"], "Acme");
        assert!(store.find_by_id("companies", "companyId", 8).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_merges_fields_without_dropping_others() {
        let store = MemoryStore::new();
        store.put("companies", "1", record(1, "Acme")).await.unwrap();

        let Value::Object(patch) = json!({ "companyName": "Acme KK" }) else {
            unreachable!()
        };
        store.update("companies", "1", patch).await.unwrap();

        let merged = store.get("companies", "1").await.unwrap().unwrap();
        assert_eq!(merged["companyName"], "Acme KK");
        assert_eq!(merged["companyId"], 1);
    }

    #[tokio::test]
    async fn insert_if_absent_refuses_taken_ids() {
        let store = MemoryStore::new();
        assert!(store
            .insert_if_absent("companies", "companyId", 1, "1", record(1, "Acme"))
            .await
            .unwrap());
        assert!(!store
            .insert_if_absent("companies", "companyId", 1, "1b", record(1, "Copy"))
            .await
            .unwrap());
        assert_eq!(store.list("companies").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn remove_reports_whether_anything_went_away() {
        let store = MemoryStore::new();
        store.put("companies", "1", record(1, "Acme")).await.unwrap();
        assert!(store.remove("companies", "1").await.unwrap());
        assert!(!store.remove("companies", "1").await.unwrap());
    }
}
