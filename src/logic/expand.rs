//! Cross-reference resolution: single foreign-key expansions, link-field
//! arrays, and whole related-collection embeds.
//!
//! A dangling reference is always recoverable — the key or array slot is
//! omitted and the miss logged, never surfaced as a failure.

use anyhow::Result;
use itertools::Itertools;
use serde_json::{Map, Value};

use crate::model::{LinkField, Record, ResourceDef};
use crate::store::DocumentStore;

/// Resolve the resource's single foreign-key expansions against `record`,
/// returning the extra top-level response keys.
pub async fn expansions<S: DocumentStore + ?Sized>(
    store: &S,
    def: &ResourceDef,
    record: &Record,
) -> Result<Map<String, Value>> {
    let mut extra = Map::new();
    for expansion in def.expansions {
        let Some(id) = record.get(expansion.fk_field).and_then(Value::as_i64) else {
            continue;
        };
        match store.find_by_id(expansion.collection, expansion.id_field, id).await? {
            Some((_, referenced)) => {
                extra.insert(expansion.response_key.to_string(), Value::Object(referenced));
            }
            None => log::warn!("{}: dangling {} = {id}", def.name, expansion.fk_field),
        }
    }
    Ok(extra)
}

/// Whole related collections embedded alongside the payload.
pub async fn related_lists<S: DocumentStore + ?Sized>(
    store: &S,
    def: &ResourceDef,
) -> Result<Map<String, Value>> {
    let mut extra = Map::new();
    for related in def.related_lists {
        let records: Vec<Value> = store
            .list(related.collection)
            .await?
            .into_iter()
            .map(|(_, record)| Value::Object(record))
            .collect();
        extra.insert(related.response_key.to_string(), Value::Array(records));
    }
    Ok(extra)
}

/// Replace each link field's id array with the referenced records. Ids are
/// deduplicated; ids that no longer resolve are skipped.
pub async fn resolve_links<S: DocumentStore + ?Sized>(
    store: &S,
    links: &[LinkField],
    record: &mut Record,
) -> Result<()> {
    for link in links {
        let Some(raw) = record.get(link.field).and_then(Value::as_array).cloned() else {
            continue;
        };
        let ids: Vec<i64> = raw.iter().filter_map(Value::as_i64).unique().collect();
        let mut resolved = Vec::with_capacity(ids.len());
        for id in ids {
            match store.find_by_id(link.collection, link.id_field, id).await? {
                Some((_, referenced)) => resolved.push(Value::Object(referenced)),
                None => log::warn!("dangling {} id {id}", link.field),
            }
        }
        record.insert(link.field.to_string(), Value::Array(resolved));
    }
    Ok(())
}
