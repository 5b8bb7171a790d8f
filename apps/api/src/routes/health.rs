use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and which evaluation mode is active.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let evaluator = if state.evaluator.is_mock() { "mock" } else { "llm" };
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "interview-api",
        "evaluator": evaluator,
        "llm_timeout_secs": state.config.llm_timeout_secs,
    }))
}
