use crate::model::Record;
use anyhow::Result;

/// Keyed, mutable document store reachable by collection path.
///
/// Lookups by business id go through [`DocumentStore::find_by_id`], an
/// equality query against the id field — never a key lookup, because the
/// storage key is not guaranteed to equal the business id. Implementations
/// may satisfy it with a linear scan; that ceiling is acceptable at this
/// system's scale and a future indexed backend swaps in behind the same
/// contract.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// All records of a collection, with their storage keys, in stable
    /// insertion order.
    async fn list(&self, collection: &str) -> Result<Vec<(String, Record)>>;

    /// Point read by storage key.
    async fn get(&self, collection: &str, key: &str) -> Result<Option<Record>>;

    /// Equality query against the business-id field.
    async fn find_by_id(
        &self,
        collection: &str,
        id_field: &str,
        id: i64,
    ) -> Result<Option<(String, Record)>>;

    /// Full write of a record under a storage key.
    async fn put(&self, collection: &str, key: &str, record: Record) -> Result<()>;

    /// Shallow field merge into the record under `key`.
    async fn update(&self, collection: &str, key: &str, patch: Record) -> Result<()>;

    /// Hard delete. Kept for adapter completeness; the handlers soft-delete.
    async fn remove(&self, collection: &str, key: &str) -> Result<bool>;

    /// Insert `record` under `key` only if no record in the collection
    /// already carries `id` in `id_field`; returns false when the id is
    /// taken. Implementations make the check-and-insert as close to atomic
    /// as the backing store allows — this is the single-writer primitive the
    /// ID allocator leans on.
    async fn insert_if_absent(
        &self,
        collection: &str,
        id_field: &str,
        id: i64,
        key: &str,
        record: Record,
    ) -> Result<bool>;
}
