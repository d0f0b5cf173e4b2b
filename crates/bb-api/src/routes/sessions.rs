//! Session endpoints.

use axum::Json;
use axum::extract::{Path, State};

use bb_protocol::{DiagnosisView, SessionCreated};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// POST /api/v1/sessions — start a conversation with its own diagnosis context.
pub async fn create_session(State(state): State<AppState>) -> Json<SessionCreated> {
    let session_id = state.create_session().await;
    Json(SessionCreated { session_id })
}

/// GET /api/v1/sessions/:id/diagnosis — current diagnosis for a session.
pub async fn get_diagnosis(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> ApiResult<Json<DiagnosisView>> {
    let sessions = state.sessions.read().await;
    let ctx = sessions
        .get(&session_id)
        .ok_or_else(|| ApiError::NotFound(format!("session '{session_id}' not found")))?;

    let (label, confidence) = ctx.read();
    Ok(Json(DiagnosisView {
        label: label.map(str::to_string),
        confidence,
    }))
}
