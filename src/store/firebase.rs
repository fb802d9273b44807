use anyhow::{Context, Result};
use reqwest::Method;
use serde_json::Value;

use crate::model::Record;
use crate::store::traits::DocumentStore;

/// Firebase Realtime Database adapter over its REST surface.
///
/// Collections are top-level subtrees (`/{collection}.json`);
/// `find_by_id` uses the `orderBy`/`equalTo` server-side query, the REST
/// equivalent of the SDK's `orderByChild().equalTo()`. The queried field
/// must be covered by an `.indexOn` rule or the database rejects the query.
#[derive(Debug, Clone)]
pub struct FirebaseStore {
    client: reqwest::Client,
    base_url: String,
    auth: Option<String>,
}

impl FirebaseStore {
    /// `base_url` is the database root, e.g. `https://example.firebaseio.com`.
    /// `auth` is a database secret or ID token, sent as the `auth` query
    /// parameter on every request.
    pub fn new(base_url: &str, auth: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{}.json", self.base_url, path);
        let builder = self.client.request(method, url);
        match &self.auth {
            Some(auth) => builder.query(&[("auth", auth.as_str())]),
            None => builder,
        }
    }

    async fn read(&self, builder: reqwest::RequestBuilder, path: &str) -> Result<Value> {
        let response = builder
            .send()
            .await
            .with_context(|| format!("request to {path} failed"))?;
        response
            .error_for_status()
            .with_context(|| format!("store rejected read of {path}"))?
            .json()
            .await
            .with_context(|| format!("invalid JSON from {path}"))
    }
}

/// Flatten a collection snapshot into keyed records. Firebase returns an
/// object keyed by child name, except when the keys are dense integers — a
/// collection keyed by small stringified ids comes back as a JSON array with
/// null holes.
fn snapshot_entries(snapshot: Value) -> Vec<(String, Record)> {
    match snapshot {
        Value::Object(map) => map
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::Object(record) => Some((key, record)),
                _ => None,
            })
            .collect(),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match value {
                Value::Object(record) => Some((index.to_string(), record)),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[async_trait::async_trait]
impl DocumentStore for FirebaseStore {
    async fn list(&self, collection: &str) -> Result<Vec<(String, Record)>> {
        let snapshot = self.read(self.request(Method::GET, collection), collection).await?;
        Ok(snapshot_entries(snapshot))
    }

    async fn get(&self, collection: &str, key: &str) -> Result<Option<Record>> {
        let path = format!("{collection}/{key}");
        let snapshot = self.read(self.request(Method::GET, &path), &path).await?;
        match snapshot {
            Value::Object(record) => Ok(Some(record)),
            _ => Ok(None),
        }
    }

    async fn find_by_id(
        &self,
        collection: &str,
        id_field: &str,
        id: i64,
    ) -> Result<Option<(String, Record)>> {
        // orderBy takes a JSON-encoded field name, quotes included.
        let builder = self.request(Method::GET, collection).query(&[
            ("orderBy", format!("\"{id_field}\"")),
            ("equalTo", id.to_string()),
        ]);
        let snapshot = self.read(builder, collection).await?;
        Ok(snapshot_entries(snapshot).into_iter().next())
    }

    async fn put(&self, collection: &str, key: &str, record: Record) -> Result<()> {
        let path = format!("{collection}/{key}");
        self.request(Method::PUT, &path)
            .json(&record)
            .send()
            .await
            .with_context(|| format!("write to {path} failed"))?
            .error_for_status()
            .with_context(|| format!("store rejected write to {path}"))?;
        Ok(())
    }

    async fn update(&self, collection: &str, key: &str, patch: Record) -> Result<()> {
        let path = format!("{collection}/{key}");
        self.request(Method::PATCH, &path)
            .json(&patch)
            .send()
            .await
            .with_context(|| format!("update of {path} failed"))?
            .error_for_status()
            .with_context(|| format!("store rejected update of {path}"))?;
        Ok(())
    }

    async fn remove(&self, collection: &str, key: &str) -> Result<bool> {
        let existed = self.get(collection, key).await?.is_some();
        if existed {
            let path = format!("{collection}/{key}");
            self.request(Method::DELETE, &path)
                .send()
                .await
                .with_context(|| format!("delete of {path} failed"))?
                .error_for_status()
                .with_context(|| format!("store rejected delete of {path}"))?;
        }
        Ok(existed)
    }

    async fn insert_if_absent(
        &self,
        collection: &str,
        id_field: &str,
        id: i64,
        key: &str,
        record: Record,
    ) -> Result<bool> {
        // The RTDB REST surface offers no conditional write keyed on a child
        // query, so this is check-then-set; the allocator's bounded retry
        // loop absorbs collisions that land between the two calls.
        if self.find_by_id(collection, id_field, id).await?.is_some() {
            return Ok(false);
        }
        self.put(collection, key, record).await?;
        Ok(true)
    }
}
