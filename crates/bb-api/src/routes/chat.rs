//! Chat endpoint.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use bb_protocol::{ChatRequest, ChatResponse};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

const EMPTY_MESSAGE_REPLY: &str = "I didn't catch that. Could you repeat?";

/// POST /api/v1/chat — reply to one user message.
///
/// A blank message is rejected here with 400 before reaching the engine.
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> ApiResult<(StatusCode, Json<ChatResponse>)> {
    if req.message.trim().is_empty() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ChatResponse {
                reply: EMPTY_MESSAGE_REPLY.into(),
                intent: None,
            }),
        ));
    }

    let session_id = AppState::session_key(req.session_id.as_deref());
    let sessions = state.sessions.read().await;
    let ctx = sessions
        .get(session_id)
        .ok_or_else(|| ApiError::NotFound(format!("session '{session_id}' not found")))?;

    let reply = state.assistant.respond(ctx, &req.message);
    tracing::debug!(
        session_id,
        intent = reply.intent.map(|i| i.as_str()),
        "chat reply generated"
    );

    Ok((
        StatusCode::OK,
        Json(ChatResponse {
            reply: reply.text,
            intent: reply.intent,
        }),
    ))
}
