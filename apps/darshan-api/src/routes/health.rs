use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET /
/// Returns the status object the mobile app polls on startup.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "message": "Darshan Trip API is running!",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
