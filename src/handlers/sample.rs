//! Fixed diagnostic endpoint.

use axum::Json;
use serde_json::json;

pub async fn sample() -> Json<serde_json::Value> {
    Json(json!({ "message": "new data 1" }))
}
