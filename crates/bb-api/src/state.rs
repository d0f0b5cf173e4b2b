//! Shared application state for the Axum server.
//!
//! One [`Assistant`] serves every request; each session owns its own
//! [`DiagnosisContext`] so a diagnosis never leaks between users.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use bb_assistant::{Assistant, DiagnosisContext, IntentTable, KeywordClassifier, KnowledgeBase};

use crate::advice::AdviceTable;
use crate::config::ApiConfig;

/// Session used by requests that carry no `session_id`.
pub const DEFAULT_SESSION: &str = "default";

/// Created sessions kept before the oldest is evicted.
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

/// Shared application state, wrapped in `Arc` for Axum handler sharing.
#[derive(Clone)]
pub struct AppState {
    /// Reply engine (read-only).
    pub assistant: Arc<Assistant>,
    /// Per-label advice for /predict responses.
    pub advice: Arc<AdviceTable>,
    /// Diagnosis context per session id.
    pub sessions: Arc<RwLock<HashMap<String, DiagnosisContext>>>,
    /// Top confidence below which /predict asks for a clearer photo.
    pub low_confidence_threshold: f64,
    /// Cap on created sessions; the default session is not counted.
    pub max_sessions: usize,
}

impl AppState {
    pub fn new(assistant: Assistant) -> Self {
        let mut sessions = HashMap::new();
        sessions.insert(DEFAULT_SESSION.to_string(), DiagnosisContext::new());
        Self {
            assistant: Arc::new(assistant),
            advice: Arc::new(AdviceTable::builtin()),
            sessions: Arc::new(RwLock::new(sessions)),
            low_confidence_threshold: 50.0,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }

    /// Build the engine from config: optional knowledge / intent / advice
    /// files and an optional greeting seed.
    pub fn from_config(config: &ApiConfig) -> anyhow::Result<Self> {
        let knowledge = match &config.knowledge_path {
            Some(path) => KnowledgeBase::from_file(path)?,
            None => KnowledgeBase::builtin(),
        };
        let table = match &config.intents_path {
            Some(path) => IntentTable::from_file(path)?,
            None => IntentTable::builtin(),
        };
        let advice = match &config.advice_path {
            Some(path) => AdviceTable::from_file(path)?,
            None => AdviceTable::builtin(),
        };

        let mut assistant = Assistant::new(knowledge, Box::new(KeywordClassifier::new(table)));
        if let Some(seed) = config.greeting_seed {
            assistant = assistant.with_seed(seed);
        }

        Ok(Self {
            advice: Arc::new(advice),
            low_confidence_threshold: config.low_confidence_threshold,
            max_sessions: config.max_sessions,
            ..Self::new(assistant)
        })
    }

    /// Register a fresh session and return its id.
    ///
    /// At the cap the oldest created session is dropped first. Ids are
    /// UUIDv7, so the smallest id is the oldest.
    pub async fn create_session(&self) -> String {
        let id = Uuid::now_v7().to_string();
        let mut sessions = self.sessions.write().await;

        let limit = self.max_sessions.max(1);
        while sessions.len() - usize::from(sessions.contains_key(DEFAULT_SESSION)) >= limit {
            let Some(oldest) = sessions
                .keys()
                .filter(|k| k.as_str() != DEFAULT_SESSION)
                .min()
                .cloned()
            else {
                break;
            };
            sessions.remove(&oldest);
            tracing::info!(session_id = %oldest, "session evicted");
        }

        sessions.insert(id.clone(), DiagnosisContext::new());
        tracing::info!(session_id = %id, sessions = sessions.len(), "session created");
        id
    }

    /// Resolve an optional request session id to a concrete key.
    pub fn session_key(session_id: Option<&str>) -> &str {
        session_id.unwrap_or(DEFAULT_SESSION)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Assistant::builtin())
    }
}
