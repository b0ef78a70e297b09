use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness probe kept for clients that poll the service root.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "status": "Server is running",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME")
    }))
}
