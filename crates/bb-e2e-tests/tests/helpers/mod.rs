//! Shared test harness for E2E integration tests.
//!
//! Drives the real Axum router in-process via `tower::oneshot`, so every
//! request crosses the protocol, assistant, and API crates.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use bb_api::config::ApiConfig;
use bb_api::routes::build_router;
use bb_api::state::AppState;
use bb_assistant::Assistant;

#[derive(Clone)]
pub struct TestHarness {
    pub state: AppState,
    pub router: Router,
}

impl TestHarness {
    /// Builtin knowledge and intents, seeded greetings.
    pub fn new() -> Self {
        Self::with_state(AppState::new(Assistant::builtin().with_seed(11)))
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        let state = AppState::from_config(config).expect("state from config");
        Self::with_state(state)
    }

    fn with_state(state: AppState) -> Self {
        let router = build_router(state.clone());
        Self { state, router }
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::post(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();
        read(response).await
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        read(response).await
    }

    pub async fn new_session(&self) -> String {
        let (status, json) = self.post("/api/v1/sessions", json!({})).await;
        assert_eq!(status, StatusCode::OK);
        json["session_id"].as_str().unwrap().to_string()
    }

    /// Submit a single top prediction for `session`.
    pub async fn predict(&self, session: &str, label: &str, confidence: f64) -> Value {
        let (status, json) = self
            .post(
                "/api/v1/predict",
                json!({
                    "session_id": session,
                    "predictions": [{"label": label, "confidence": confidence}],
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "predict failed: {json}");
        json
    }

    /// Send a chat message, returning `(intent, reply)`.
    pub async fn chat(&self, session: &str, message: &str) -> (Value, String) {
        let (status, json) = self
            .post(
                "/api/v1/chat",
                json!({"session_id": session, "message": message}),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "chat failed: {json}");
        (
            json["intent"].clone(),
            json["reply"].as_str().unwrap().to_string(),
        )
    }
}

async fn read(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}
