//! Classifier result ingestion.

use axum::Json;
use axum::extract::State;

use bb_assistant::round2;
use bb_protocol::{InfectionLevel, PredictRequest, PredictResponse, Prediction};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Predictions kept in the response.
const TOP_K: usize = 3;

const UNCERTAIN_ADVICE: &str = "Prediction uncertain. Please provide a clearer photo of the leaf.";
const NO_ADVICE: &str = "No specific advice found.";

/// POST /api/v1/predict — record the classifier's output for a session.
pub async fn ingest_prediction(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> ApiResult<Json<PredictResponse>> {
    let top_predictions = rank(req.predictions)?;
    let Some(top) = top_predictions.first() else {
        return Err(ApiError::BadRequest("no predictions in request".into()));
    };

    let session_id = AppState::session_key(req.session_id.as_deref()).to_string();
    {
        let mut sessions = state.sessions.write().await;
        let ctx = sessions
            .get_mut(&session_id)
            .ok_or_else(|| ApiError::NotFound(format!("session '{session_id}' not found")))?;
        ctx.update(top.label.as_str(), top.confidence);
    }

    let advice = if top.confidence < state.low_confidence_threshold {
        UNCERTAIN_ADVICE.to_string()
    } else {
        state
            .advice
            .get(&top.label)
            .map(|entry| entry.advice.clone())
            .unwrap_or_else(|| NO_ADVICE.to_string())
    };

    tracing::info!(
        session_id = %session_id,
        label = %top.label,
        confidence = top.confidence,
        "prediction recorded"
    );

    Ok(Json(PredictResponse {
        session_id,
        severity: InfectionLevel::from_confidence(top.confidence),
        advice,
        top_predictions,
        status: "success".into(),
    }))
}

/// Validate, round, and keep the highest-confidence predictions.
fn rank(mut predictions: Vec<Prediction>) -> ApiResult<Vec<Prediction>> {
    for p in &predictions {
        if p.label.trim().is_empty() {
            return Err(ApiError::BadRequest("prediction label is empty".into()));
        }
        if !(0.0..=100.0).contains(&p.confidence) {
            return Err(ApiError::BadRequest(format!(
                "confidence {} for '{}' is outside 0-100",
                p.confidence, p.label
            )));
        }
    }

    predictions.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    predictions.truncate(TOP_K);
    for p in &mut predictions {
        p.confidence = round2(p.confidence);
    }
    Ok(predictions)
}
