//! Item endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{Item, ItemName, SearchPattern, ValidationError};

const FETCH_ERROR: &str = "Error fetching items from database";
const FILTER_ERROR: &str = "Error filtering items";
const INSERT_ERROR: &str = "Error inserting item into database";
const DUPLICATE_NAME: &str = "Item with this name already exists.";

/// Query string for GET /filteritems
#[derive(Debug, Default, Deserialize)]
pub struct FilterParams {
    #[serde(default)]
    pub q: String,
}

/// Create item request. `name` is kept as raw JSON so that every falsy
/// value (`null`, `false`, `0`, `""`) gets the required-field error
/// instead of a deserialization error.
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    #[serde(default)]
    pub name: Option<Value>,
}

impl CreateItemRequest {
    /// Validate the name: falsy is missing, a string is a name, anything else is rejected.
    fn name(&self) -> Result<ItemName, ApiError> {
        match &self.name {
            None | Some(Value::Null) | Some(Value::Bool(false)) => {
                Err(ValidationError::Required { field: "name" }.into())
            }
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => {
                Err(ValidationError::Required { field: "name" }.into())
            }
            Some(Value::String(s)) => Ok(ItemName::new(s)?),
            Some(other) => Err(ApiError::Rejected {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: format!("name must be a string, got {other}"),
            }),
        }
    }
}

/// GET /items - every item
async fn list_items(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state
        .items
        .list()
        .await
        .map_err(|e| ApiError::database(FETCH_ERROR, e))?;
    Ok(Json(items))
}

/// GET /filteritems?q= - case-insensitive substring match on name
async fn filter_items(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FilterParams>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let pattern = SearchPattern::contains(&params.q);
    let items = state
        .items
        .search(&pattern)
        .await
        .map_err(|e| ApiError::database(FILTER_ERROR, e))?;

    tracing::debug!(q = %params.q, matches = items.len(), "Filtered items");
    Ok(Json(items))
}

/// POST /data - create an item
///
/// The duplicate lookup and the insert are two round trips. A concurrent
/// insert of the same name between them trips the unique constraint and
/// comes back as a 500, not a 409.
async fn create_item(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(req) = payload?;
    let name = req.name()?;

    if state.duplicate_check {
        let existing = state
            .items
            .find_by_name(&name)
            .await
            .map_err(|e| ApiError::database(INSERT_ERROR, e))?;
        if existing.is_some() {
            return Err(ApiError::Conflict {
                message: DUPLICATE_NAME,
            });
        }
    }

    let item = state
        .items
        .insert(&name)
        .await
        .map_err(|e| ApiError::database(INSERT_ERROR, e))?;

    tracing::info!(id = item.id, name = %item.name, "Item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/items", get(list_items))
        .route("/filteritems", get(filter_items))
        .route("/data", post(create_item))
}
