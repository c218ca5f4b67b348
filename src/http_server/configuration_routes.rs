//! Configuration Item HTTP Routes
//!
//! Endpoints for creating, reading, updating, deleting, and searching
//! configuration items. This layer owns input validation and the
//! JSON-encoding of arbitrary value payloads; the store only ever sees
//! bounded strings.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::observability::Logger;
use crate::store::{ConfigItem, ConfigStore, StoreError, MAX_KEY_LEN, MAX_VALUE_LEN};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Configuration routes state shared across handlers
pub struct ConfigurationState {
    pub store: Arc<dyn ConfigStore>,
}

impl ConfigurationState {
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }
}

// ==================
// Request/Response Types
// ==================

/// Query parameters for the search endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Substring to match within keys; empty matches everything
    #[serde(default)]
    pub key_pattern: String,

    /// 1-based page number
    #[serde(default = "default_page_number")]
    pub page_number: u32,

    /// Items per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_number() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

/// Body for creating a configuration item
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    /// Unique key for the new item
    pub key: String,

    /// Arbitrary JSON payload, serialized to text before storage
    pub value: Value,
}

/// Paginated search response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub data: Vec<ConfigItem>,
    pub count: usize,
    pub page_number: u32,
    pub page_size: u32,
}

// ==================
// Validation
// ==================

/// Validate a key before it reaches the store.
fn validate_key(key: &str) -> ApiResult<()> {
    let len = key.chars().count();
    if len == 0 {
        return Err(ApiError::InvalidKey("key must not be empty".to_string()));
    }
    if len > MAX_KEY_LEN {
        return Err(ApiError::InvalidKey(format!(
            "key exceeds maximum length of {} characters",
            MAX_KEY_LEN
        )));
    }
    Ok(())
}

/// Serialize an arbitrary JSON payload to the bounded value string.
fn encode_value(value: &Value) -> ApiResult<String> {
    let encoded =
        serde_json::to_string(value).map_err(|e| ApiError::InvalidValue(e.to_string()))?;

    if encoded.chars().count() > MAX_VALUE_LEN {
        return Err(ApiError::InvalidValue(format!(
            "serialized value exceeds maximum length of {} characters",
            MAX_VALUE_LEN
        )));
    }
    Ok(encoded)
}

/// Log a failed store operation at the appropriate severity.
fn log_failure(event: &str, err: &StoreError) {
    match err {
        StoreError::NotFound(_) | StoreError::Conflict(_) => {
            Logger::warn(event, &[("reason", &err.to_string())]);
        }
        other => {
            Logger::error(event, &[("reason", &other.to_string())]);
        }
    }
}

// ==================
// Handlers
// ==================

/// Paginated substring search over keys
async fn search_handler(
    State(state): State<Arc<ConfigurationState>>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<SearchResponse>> {
    if query.page_number == 0 {
        return Err(ApiError::InvalidPage(
            "pageNumber must be greater than 0".to_string(),
        ));
    }
    if query.page_size == 0 {
        return Err(ApiError::InvalidPage(
            "pageSize must be greater than 0".to_string(),
        ));
    }

    let items = state
        .store
        .list(&query.key_pattern, query.page_number, query.page_size)?;

    Ok(Json(SearchResponse {
        count: items.len(),
        data: items,
        page_number: query.page_number,
        page_size: query.page_size,
    }))
}

/// Fetch a single item by key
async fn get_item_handler(
    State(state): State<Arc<ConfigurationState>>,
    Path(key): Path<String>,
) -> ApiResult<Json<ConfigItem>> {
    match state.store.get(&key) {
        Ok(item) => Ok(Json(item)),
        Err(e) => {
            log_failure("config_get_failed", &e);
            Err(e.into())
        }
    }
}

/// Create a new item (201 on success)
async fn add_item_handler(
    State(state): State<Arc<ConfigurationState>>,
    Json(body): Json<CreateItemRequest>,
) -> ApiResult<(StatusCode, Json<ConfigItem>)> {
    validate_key(&body.key)?;
    let value = encode_value(&body.value)?;

    match state.store.add(ConfigItem::new(body.key, value)) {
        Ok(created) => Ok((StatusCode::CREATED, Json(created))),
        Err(e) => {
            log_failure("config_add_failed", &e);
            Err(e.into())
        }
    }
}

/// Replace the value stored under a key
async fn update_item_handler(
    State(state): State<Arc<ConfigurationState>>,
    Path(key): Path<String>,
    Json(body): Json<Value>,
) -> ApiResult<Json<ConfigItem>> {
    validate_key(&key)?;
    let value = encode_value(&body)?;

    match state.store.update(&key, &value) {
        Ok(updated) => Ok(Json(updated)),
        Err(e) => {
            log_failure("config_update_failed", &e);
            Err(e.into())
        }
    }
}

/// Remove an item (204 on success)
async fn delete_item_handler(
    State(state): State<Arc<ConfigurationState>>,
    Path(key): Path<String>,
) -> ApiResult<StatusCode> {
    match state.store.delete(&key) {
        Ok(_) => Ok(StatusCode::NO_CONTENT),
        Err(e) => {
            log_failure("config_delete_failed", &e);
            Err(e.into())
        }
    }
}

/// Create configuration item routes
pub fn configuration_routes(state: Arc<ConfigurationState>) -> Router {
    Router::new()
        .route("/search", get(search_handler))
        .route("/item/:key", get(get_item_handler))
        .route("/", post(add_item_handler))
        .route("/:key", put(update_item_handler).delete(delete_item_handler))
        .with_state(state)
}
