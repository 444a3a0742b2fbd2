//! Health probe

use axum::response::Json;
use chrono::Utc;
use serde_json::json;

/// GET /api/health
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
