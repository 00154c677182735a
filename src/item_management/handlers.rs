use log::{debug, error, info, warn};
use serde_json::{json, Value};
use warp::http::StatusCode;

use crate::error_handling::types::WebError;
use crate::storage::item_store::ItemStore;
use crate::web_interface::types::HandlerResponse;

fn missing_item(index: usize) -> WebError {
    WebError::NotFound(format!("Item {} doesn't exist", index))
}

/// Renders a failed handler result as a JSON body.
///
/// Validation failures use an `error` key, not-found a `message` key.
pub fn json_error(err: WebError) -> HandlerResponse {
    match err {
        WebError::Validation(message) => {
            warn!("Rejected item: {}", message);
            HandlerResponse::Json(StatusCode::BAD_REQUEST, json!({ "error": message }))
        }
        WebError::NotFound(message) => {
            warn!("{}", message);
            HandlerResponse::Json(StatusCode::NOT_FOUND, json!({ "message": message }))
        }
        WebError::Storage(e) => {
            error!("Item request failed: {}", e);
            HandlerResponse::Json(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "message": "Internal Server Error" }),
            )
        }
    }
}

pub fn respond(result: Result<HandlerResponse, WebError>) -> HandlerResponse {
    result.unwrap_or_else(json_error)
}

/// GET /hello
pub fn hello() -> HandlerResponse {
    HandlerResponse::Json(StatusCode::OK, json!({ "message": "Hello, World" }))
}

/// GET /items
pub fn list(store: &ItemStore) -> HandlerResponse {
    HandlerResponse::Json(StatusCode::OK, Value::Array(store.list()))
}

/// POST /items
///
/// Any JSON value is accepted as long as it is an object with a `name` key.
pub fn create(store: &ItemStore, body: Value) -> Result<HandlerResponse, WebError> {
    if body.get("name").is_none() {
        return Err(WebError::Validation("Name is required".to_string()));
    }
    let index = store.push(body.clone());
    info!("Item created at index {}", index);
    Ok(HandlerResponse::Json(StatusCode::CREATED, body))
}

/// GET /items/<id>
pub fn get(store: &ItemStore, index: usize) -> Result<HandlerResponse, WebError> {
    let item = store.get(index).ok_or_else(|| missing_item(index))?;
    Ok(HandlerResponse::Json(StatusCode::OK, item))
}

/// PUT /items/<id>
pub fn replace(store: &ItemStore, index: usize, body: Value) -> Result<HandlerResponse, WebError> {
    store
        .replace(index, body.clone())
        .ok_or_else(|| missing_item(index))?;
    debug!("Item {} replaced", index);
    Ok(HandlerResponse::Json(StatusCode::OK, body))
}

/// DELETE /items/<id>
pub fn delete(store: &ItemStore, index: usize) -> Result<HandlerResponse, WebError> {
    store.remove(index).ok_or_else(|| missing_item(index))?;
    info!("Item {} deleted", index);
    Ok(HandlerResponse::NoContent)
}
