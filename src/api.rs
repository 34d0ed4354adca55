//! HTTP surface: liveness, health, and the predict endpoint.
//!
//! Validation happens at the extractor boundary — a body without `text`
//! is rejected with 422 before the analyzer runs. Request text is never
//! logged raw, only as a short hash.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tracing::debug;

use crate::analyzer::SentimentAnalyzer;
use crate::score::Label;

pub const DEFAULT_LANG: &str = "en";

#[derive(Clone)]
pub struct AppState {
    analyzer: Arc<SentimentAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: SentimentAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }

    pub fn from_env() -> Self {
        Self::new(SentimentAnalyzer::from_env())
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/predict", post(predict))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Deserialize)]
struct PredictRequest {
    text: String,
    // absent or null both mean the default language
    #[serde(default)]
    lang: Option<String>,
}

#[derive(Serialize)]
struct PredictResponse {
    label: Label,
    score: f32,
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "snippet-sentiment-api is up. See /health and POST /predict" }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn predict(
    State(state): State<AppState>,
    Json(body): Json<PredictRequest>,
) -> Json<PredictResponse> {
    let lang = body.lang.as_deref().unwrap_or(DEFAULT_LANG);
    let pred = state.analyzer.predict(&body.text, lang);

    debug!(
        target: "predict",
        id = %anon_hash(&body.text),
        %lang,
        label = ?pred.label,
        score = %pred.score,
    );

    Json(PredictResponse {
        label: pred.label,
        score: pred.score,
    })
}

// Anonymized request id for dev logs: first 6 bytes of SHA-256, hex.
fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anon_hash_is_short_and_stable() {
        let a = anon_hash("I love this");
        let b = anon_hash("I love this");
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn request_lang_may_be_null_or_absent() {
        let with_null: PredictRequest =
            serde_json::from_str(r#"{"text":"ok","lang":null}"#).expect("null lang");
        assert!(with_null.lang.is_none());

        let absent: PredictRequest = serde_json::from_str(r#"{"text":"ok"}"#).expect("absent lang");
        assert!(absent.lang.is_none());
    }
}
