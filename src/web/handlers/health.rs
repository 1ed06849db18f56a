//! Health check handler for monitoring probes.

use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// Health check: GET /health
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
