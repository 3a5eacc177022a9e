use axum::response::Json;
use serde_json::{json, Value};
use tracing::instrument;

/// Liveness endpoint; the catalog is static so there is nothing else to check
#[instrument(name = "health_check")]
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
