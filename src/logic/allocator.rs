use serde_json::Value;

use crate::error::ApiError;
use crate::model::Record;
use crate::store::DocumentStore;

/// Default retry budget for the conditional-insert loop.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Next candidate business id: one past the highest id in use, or 1 on an
/// empty collection.
pub fn next_candidate(records: &[(String, Record)], id_field: &str) -> i64 {
    records
        .iter()
        .filter_map(|(_, record)| record.get(id_field).and_then(Value::as_i64))
        .max()
        .map_or(1, |max| max + 1)
}

/// Allocate the next business id for `collection` and insert `record` under
/// it. The id field and the storage key are both set to the allocated value.
///
/// The scan-for-max and the conditional insert are separate store calls, so
/// two concurrent creates can pick the same candidate; the loop walks the
/// candidate forward until an insert lands or the budget is spent, at which
/// point the caller sees `AllocationExhausted`.
pub async fn create_with_next_id<S: DocumentStore + ?Sized>(
    store: &S,
    collection: &str,
    id_field: &str,
    mut record: Record,
    max_attempts: u32,
) -> Result<(i64, Record), ApiError> {
    let existing = store.list(collection).await?;
    let mut candidate = next_candidate(&existing, id_field);

    for _ in 0..max_attempts {
        record.insert(id_field.to_string(), Value::from(candidate));
        let inserted = store
            .insert_if_absent(
                collection,
                id_field,
                candidate,
                &candidate.to_string(),
                record.clone(),
            )
            .await?;
        if inserted {
            return Ok((candidate, record));
        }
        log::warn!("{collection}: id {candidate} already taken, retrying allocation");
        candidate += 1;
    }

    Err(ApiError::AllocationExhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use anyhow::Result;
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn record(name: &str) -> Record {
        let Value::Object(map) = json!({ "companyName": name }) else {
            unreachable!()
        };
        map
    }

    #[tokio::test]
    async fn empty_collection_starts_at_one() {
        let store = MemoryStore::new();
        let (id, stored) =
            create_with_next_id(&store, "companies", "companyId", record("Acme"), 10)
                .await
                .unwrap();
        assert_eq!(id, 1);
        assert_eq!(stored["companyId"], 1);
    }

    #[tokio::test]
    async fn sequential_creates_count_up_from_max() {
        let store = MemoryStore::new();
        for expected in 1..=4 {
            let (id, _) =
                create_with_next_id(&store, "companies", "companyId", record("x"), 10)
                    .await
                    .unwrap();
            assert_eq!(id, expected);
        }
    }

    #[tokio::test]
    async fn seeded_collection_continues_past_the_max() {
        let store = MemoryStore::new();
        let Value::Object(seeded) = json!({ "companyId": 41, "companyName": "Old" }) else {
            unreachable!()
        };
        store.put("companies", "41", seeded).await.unwrap();

        let (id, _) = create_with_next_id(&store, "companies", "companyId", record("New"), 10)
            .await
            .unwrap();
        assert_eq!(id, 42);
    }

    /// Store double that rejects the first N conditional inserts, standing in
    /// for writers that lose the allocation race.
    struct ContendedStore {
        inner: MemoryStore,
        rejections: AtomicU32,
    }

    #[async_trait::async_trait]
    impl DocumentStore for ContendedStore {
        async fn list(&self, collection: &str) -> Result<Vec<(String, Record)>> {
            self.inner.list(collection).await
        }
        async fn get(&self, collection: &str, key: &str) -> Result<Option<Record>> {
            self.inner.get(collection, key).await
        }
        async fn find_by_id(
            &self,
            collection: &str,
            id_field: &str,
            id: i64,
        ) -> Result<Option<(String, Record)>> {
            self.inner.find_by_id(collection, id_field, id).await
        }
        async fn put(&self, collection: &str, key: &str, record: Record) -> Result<()> {
            self.inner.put(collection, key, record).await
        }
        async fn update(&self, collection: &str, key: &str, patch: Record) -> Result<()> {
            self.inner.update(collection, key, patch).await
        }
        async fn remove(&self, collection: &str, key: &str) -> Result<bool> {
            self.inner.remove(collection, key).await
        }
        async fn insert_if_absent(
            &self,
            collection: &str,
            id_field: &str,
            id: i64,
            key: &str,
            record: Record,
        ) -> Result<bool> {
            let rejected = self
                .rejections
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
            if rejected {
                return Ok(false);
            }
            self.inner
                .insert_if_absent(collection, id_field, id, key, record)
                .await
        }
    }

    #[tokio::test]
    async fn collisions_advance_the_candidate() {
        let store = ContendedStore {
            inner: MemoryStore::new(),
            rejections: AtomicU32::new(3),
        };
        let (id, _) = create_with_next_id(&store, "companies", "companyId", record("Acme"), 10)
            .await
            .unwrap();
        assert_eq!(id, 4);
    }

    #[tokio::test]
    async fn exhausted_budget_fails_with_the_bounded_error() {
        let store = ContendedStore {
            inner: MemoryStore::new(),
            rejections: AtomicU32::new(u32::MAX),
        };
        let err = create_with_next_id(&store, "companies", "companyId", record("Acme"), 10)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::AllocationExhausted));
    }
}
