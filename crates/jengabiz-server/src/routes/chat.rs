//! Chat routes: advisor conversation and stored history.

use std::sync::Arc;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::routes::error_response;
use crate::state::AppState;
use jengabiz_chat::types::*;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/chat", post(chat))
        .route("/chat/history", get(get_history).delete(clear_history))
}

async fn chat(State(state): State<Arc<AppState>>, Json(req): Json<ChatRequest>) -> Response {
    match state.session.send(&req.message).await {
        Ok(exchange) => Json(ChatResponse::from(exchange)).into_response(),
        Err(e) => error_response(&e),
    }
}

async fn get_history(State(state): State<Arc<AppState>>) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        messages: state.session.history().messages(),
    })
}

async fn clear_history(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    state.session.clear();
    Json(serde_json::json!({ "success": true }))
}

#[cfg(test)]
mod tests {
    use crate::routes::tests::{call, get, post_json, test_app, test_app_with};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use jengabiz_core::ThinkingDelay;
    use serde_json::json;

    #[tokio::test]
    async fn test_chat_round_trip_and_history() {
        let (app, state, _dir) = test_app();

        let (status, json) = call(&app, post_json("/api/chat", json!({"message": "How do I budget?"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["language"], "en");
        assert_eq!(json["category"], json!({"kind": "topic", "topic": "budgeting"}));
        assert_eq!(json["userMessage"]["role"], "user");
        assert_eq!(json["userMessage"]["content"], "How do I budget?");
        assert_eq!(json["message"]["role"], "assistant");
        assert!(json["message"]["content"].as_str().unwrap().contains("udget"));

        let (status, json) = call(&app, get("/api/chat/history")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["messages"].as_array().unwrap().len(), 2);
        assert!(state.session.history().path().exists());
    }

    #[tokio::test]
    async fn test_swahili_greeting() {
        let (app, _state, _dir) = test_app();
        let (status, json) =
            call(&app, post_json("/api/chat", json!({"message": "Habari, nina bajeti ngapi?"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["language"], "sw");
        assert_eq!(json["category"]["kind"], "greeting");
    }

    #[tokio::test]
    async fn test_empty_message_rejected() {
        let (app, _state, _dir) = test_app();
        let (status, json) = call(&app, post_json("/api/chat", json!({"message": "   "}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("empty"));
    }

    #[tokio::test]
    async fn test_clear_history() {
        let (app, state, _dir) = test_app();
        call(&app, post_json("/api/chat", json!({"message": "grow"}))).await;
        assert_eq!(state.session.history().len(), 2);

        let req = Request::delete("/api/chat/history").body(Body::empty()).unwrap();
        let (status, json) = call(&app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert!(state.session.history().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_chat_is_conflict() {
        let (app, state, _dir) = test_app_with(ThinkingDelay::new(1000, 1000).unwrap());

        let first = {
            let app = app.clone();
            tokio::spawn(async move {
                call(&app, post_json("/api/chat", json!({"message": "budget help"}))).await
            })
        };
        while !state.session.is_busy() {
            tokio::task::yield_now().await;
        }

        let (status, json) = call(&app, post_json("/api/chat", json!({"message": "pricing"}))).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert!(json["error"].as_str().unwrap().starts_with("Busy"));

        let (status, json) = first.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["userMessage"]["content"], "budget help");
        assert_eq!(state.session.history().len(), 2);
    }
}
