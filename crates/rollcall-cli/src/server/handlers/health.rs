//! Liveness handler.

use axum::Json;
use serde_json::{json, Value};

/// Report that the server is up.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
