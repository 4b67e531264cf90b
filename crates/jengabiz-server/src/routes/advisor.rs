//! Advisor classification: how a message would be routed, without replying.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/advisor/classify", post(classify))
}

#[derive(Debug, Deserialize)]
struct ClassifyRequest {
    message: String,
}

async fn classify(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClassifyRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    let classification = state.session.advisor().classify(&req.message);
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "language": classification.language,
            "category": classification.category,
            "greeting": jengabiz_advisor::is_greeting(&req.message),
            "swahiliHits": jengabiz_advisor::language::swahili_hits(&req.message),
        })),
    )
}

#[cfg(test)]
mod tests {
    use crate::routes::tests::{call, post_json, test_app};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_classify_greeting_over_topic() {
        let (app, state, _dir) = test_app();
        let (status, json) =
            call(&app, post_json("/api/advisor/classify", json!({"message": "Hello, how do I budget?"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["language"], "en");
        assert_eq!(json["category"]["kind"], "greeting");
        assert_eq!(json["greeting"], true);
        // Classification never touches history
        assert!(state.session.history().is_empty());
    }

    #[tokio::test]
    async fn test_classify_general() {
        let (app, _state, _dir) = test_app();
        let (_, json) = call(&app, post_json("/api/advisor/classify", json!({"message": ""}))).await;
        assert_eq!(json["category"], json!({"kind": "general"}));
        assert_eq!(json["swahiliHits"], 0);
    }
}
