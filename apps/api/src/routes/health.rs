use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and which data tier the catalog is on.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "careerscope",
        "catalog_mode": state.catalog.mode(),
        "live_timeout_secs": state.config.worknet_timeout_secs,
        "active_sessions": state.sessions.len()
    }))
}
