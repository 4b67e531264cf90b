//! Liveness and basic status.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "historyMessages": state.session.history().len(),
        "thinkingDelayMs": [state.config.thinking_delay.min_ms, state.config.thinking_delay.max_ms],
        "topics": state
            .session
            .advisor()
            .templates()
            .iter()
            .map(|t| t.topic.as_str())
            .collect::<Vec<_>>(),
    }))
}
