//! Health check endpoint.

use axum::extract::State;
use axum::Json;
use kauri_store::LabStore;
use serde_json::Value;

use crate::state::AppState;

/// `GET /health`
///
/// Simple status for load balancers and monitoring.
pub async fn health<S: LabStore>(State(state): State<AppState<S>>) -> Json<Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "backend": state.store().backend_name(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
