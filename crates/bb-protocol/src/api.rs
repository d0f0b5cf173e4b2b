//! Request and response bodies for the HTTP service.

use serde::{Deserialize, Serialize};

use crate::intent::Intent;
use crate::severity::InfectionLevel;

/// One ranked output of the external image classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Condition name, e.g. "Leaf_Rot".
    pub label: String,
    /// Confidence in percent (0-100).
    pub confidence: f64,
}

/// Classifier output submitted for a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Session to update. Absent means the shared default session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Ranked predictions, any order.
    pub predictions: Vec<Prediction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub session_id: String,
    /// At most three predictions, highest confidence first.
    pub top_predictions: Vec<Prediction>,
    pub severity: InfectionLevel,
    pub advice: String,
    pub status: String,
}

/// A chat message from the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    /// Matched intent. `None` when the fallback reply was used.
    pub intent: Option<Intent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCreated {
    pub session_id: String,
}

/// Current diagnosis held for a session. Both fields are null together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisView {
    pub label: Option<String>,
    pub confidence: Option<f64>,
}
