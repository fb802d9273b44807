use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::logic::{allocator, expand, filter, guard};
use crate::model::{
    now_timestamp, resource_by_name, Record, ResourceDef, IS_ACTIVE, LAST_UPDATE, UPDATED_BY,
};
use crate::store::DocumentStore;

/// Shared handler state: the injected store plus request-independent API
/// settings.
pub struct AppState<S> {
    pub store: Arc<S>,
    pub api: ApiConfig,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            api: self.api.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: now_timestamp(),
    })
}

fn lookup(resource: &str) -> ApiResult<&'static ResourceDef> {
    resource_by_name(resource).ok_or(ApiError::NotFound("Resource"))
}

/// A non-numeric id can match nothing, so it reads as absent.
fn parse_business_id(def: &ResourceDef, raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>().map_err(|_| ApiError::NotFound(def.display))
}

/// `{result:"OK"}` envelope with the payload under `key` plus any extra
/// top-level keys (expansions, related lists).
fn envelope(key: &str, payload: Value, extra: Map<String, Value>) -> Value {
    let mut body = Map::new();
    body.insert("result".to_string(), Value::from("OK"));
    body.insert(key.to_string(), payload);
    body.extend(extra);
    Value::Object(body)
}

/// List responses strip link fields unless the matching include flag is the
/// literal "true", in which case the links come back resolved.
async fn shape_links<S: DocumentStore>(
    store: &S,
    def: &ResourceDef,
    params: &HashMap<String, String>,
    record: &mut Record,
) -> ApiResult<()> {
    let mut requested = Vec::new();
    for link in def.link_fields {
        if params.get(link.include_param).map(String::as_str) == Some("true") {
            requested.push(*link);
        } else {
            record.remove(link.field);
        }
    }
    expand::resolve_links(store, &requested, record).await?;
    Ok(())
}

pub async fn list_resources<S: DocumentStore>(
    State(state): State<AppState<S>>,
    Path(resource): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<Value>> {
    let def = lookup(&resource)?;
    let page = filter::PageQuery::from_params(&params);

    let records: Vec<Record> = state
        .store
        .list(def.collection)
        .await?
        .into_iter()
        .map(|(_, record)| record)
        .collect();
    let filtered = filter::apply_filters(def, &params, records);
    let page = filter::paginate(filtered, page);

    let mut shaped = Vec::with_capacity(page.items.len());
    for mut record in page.items {
        shape_links(&*state.store, def, &params, &mut record).await?;
        shaped.push(Value::Object(record));
    }

    let extra = expand::related_lists(&*state.store, def).await?;
    Ok(Json(envelope(def.name, Value::Array(shaped), extra)))
}

pub async fn create_resource<S: DocumentStore>(
    State(state): State<AppState<S>>,
    Path(resource): Path<String>,
    Json(body): Json<Record>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let def = lookup(&resource)?;

    for field in def.required {
        if !body.contains_key(*field) {
            return Err(ApiError::Validation(format!("{field} is required")));
        }
    }

    let mut record = body;
    // The allocator owns the id; a client-supplied value is discarded.
    record.remove(def.id_field);
    record.insert(IS_ACTIVE.to_string(), Value::Bool(true));
    record.insert(LAST_UPDATE.to_string(), Value::from(now_timestamp()));
    record.insert(
        UPDATED_BY.to_string(),
        Value::from(state.api.default_user_email.clone()),
    );

    let (id, stored) = allocator::create_with_next_id(
        &*state.store,
        def.collection,
        def.id_field,
        record,
        state.api.max_attempts,
    )
    .await?;

    let mut payload = stored;
    expand::resolve_links(&*state.store, def.link_fields, &mut payload).await?;
    let mut extra = expand::expansions(&*state.store, def, &payload).await?;
    extra.extend(expand::related_lists(&*state.store, def).await?);

    let mut response = Map::new();
    response.insert("result".to_string(), Value::from("OK"));
    response.insert(def.id_field.to_string(), Value::from(id));
    response.insert(def.singular.to_string(), Value::Object(payload));
    response.extend(extra);

    Ok((StatusCode::CREATED, Json(Value::Object(response))))
}

pub async fn get_resource<S: DocumentStore>(
    State(state): State<AppState<S>>,
    Path((resource, id)): Path<(String, String)>,
) -> ApiResult<Json<Value>> {
    let def = lookup(&resource)?;
    let id = parse_business_id(def, &id)?;

    // Direct lookup stays readable after soft-delete.
    let (_, mut record) = state
        .store
        .find_by_id(def.collection, def.id_field, id)
        .await?
        .ok_or(ApiError::NotFound(def.display))?;

    expand::resolve_links(&*state.store, def.link_fields, &mut record).await?;
    let mut extra = expand::expansions(&*state.store, def, &record).await?;
    extra.extend(expand::related_lists(&*state.store, def).await?);

    Ok(Json(envelope(def.singular, Value::Object(record), extra)))
}

pub async fn update_resource<S: DocumentStore>(
    State(state): State<AppState<S>>,
    Path((resource, id)): Path<(String, String)>,
    Json(body): Json<Record>,
) -> ApiResult<Json<Value>> {
    let def = lookup(&resource)?;
    let id = parse_business_id(def, &id)?;

    if body.contains_key(def.id_field) {
        return Err(ApiError::Validation(format!("Cannot update {}", def.id_field)));
    }
    let token = guard::require_token(&body)?.to_string();

    let (key, stored) = state
        .store
        .find_by_id(def.collection, def.id_field, id)
        .await?
        .ok_or(ApiError::NotFound(def.display))?;
    guard::verify_token(&token, &stored)?;

    let mut patch = body;
    patch.insert(LAST_UPDATE.to_string(), Value::from(now_timestamp()));
    patch.insert(
        UPDATED_BY.to_string(),
        Value::from(state.api.default_user_email.clone()),
    );

    state.store.update(def.collection, &key, patch.clone()).await?;

    let mut merged = stored;
    for (field, value) in patch {
        merged.insert(field, value);
    }

    expand::resolve_links(&*state.store, def.link_fields, &mut merged).await?;
    let mut extra = expand::expansions(&*state.store, def, &merged).await?;
    extra.extend(expand::related_lists(&*state.store, def).await?);

    Ok(Json(envelope(def.singular, Value::Object(merged), extra)))
}

pub async fn delete_resource<S: DocumentStore>(
    State(state): State<AppState<S>>,
    Path((resource, id)): Path<(String, String)>,
    body: Option<Json<Record>>,
) -> ApiResult<Json<Value>> {
    let def = lookup(&resource)?;
    let id = parse_business_id(def, &id)?;

    let body = body.map(|Json(body)| body).unwrap_or_default();
    let token = guard::require_token(&body)?.to_string();

    let (key, stored) = state
        .store
        .find_by_id(def.collection, def.id_field, id)
        .await?
        .ok_or(ApiError::NotFound(def.display))?;
    guard::verify_token(&token, &stored)?;

    let mut updated = stored;
    updated.insert(IS_ACTIVE.to_string(), Value::Bool(false));
    updated.insert(LAST_UPDATE.to_string(), Value::from(now_timestamp()));
    updated.insert(
        UPDATED_BY.to_string(),
        Value::from(state.api.default_user_email.clone()),
    );

    state.store.put(def.collection, &key, updated.clone()).await?;

    let extra = expand::expansions(&*state.store, def, &updated).await?;
    Ok(Json(envelope(def.singular, Value::Object(updated), extra)))
}
