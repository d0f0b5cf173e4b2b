//! Health check endpoint.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use crate::state::AppState;

/// GET /health — liveness check with engine and session counts.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let sessions = state.sessions.read().await.len();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "knowledge_entries": state.assistant.knowledge().len(),
        "sessions": sessions,
    }))
}
