//! HTTP route handlers.

pub mod advisor;
pub mod chat;
pub mod health;
pub mod videos;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .merge(health::routes())
        .merge(chat::routes())
        .merge(advisor::routes())
        .merge(videos::routes())
}

/// Map a core error onto an HTTP status with a JSON `{ error }` body.
pub(crate) fn error_response(err: &jengabiz_core::Error) -> Response {
    use jengabiz_core::Error;

    let status = match err {
        Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
        Error::Busy(_) | Error::Cancelled(_) => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(serde_json::json!({ "error": err.to_string() }))).into_response()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use jengabiz_core::{DataPaths, JengaBizConfig, ThinkingDelay};
    use serde_json::Value;
    use tower::ServiceExt;

    pub fn test_app() -> (Router, Arc<AppState>, tempfile::TempDir) {
        test_app_with(ThinkingDelay::NONE)
    }

    pub fn test_app_with(thinking_delay: ThinkingDelay) -> (Router, Arc<AppState>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = JengaBizConfig {
            port: 0,
            data_paths: DataPaths::new(dir.path()).unwrap(),
            thinking_delay,
        };
        let state = Arc::new(AppState::new(config));
        (build_router(state.clone()), state, dir)
    }

    pub async fn call(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = app.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    #[test]
    fn test_error_status_mapping() {
        use jengabiz_core::Error;
        assert_eq!(
            error_response(&Error::InvalidInput("x".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(error_response(&Error::Busy("x".into())).status(), StatusCode::CONFLICT);
        assert_eq!(
            error_response(&Error::Cancelled("x".into())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            error_response(&Error::Config("x".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (app, _state, _dir) = test_app();
        let (status, _) = call(&app, get("/api/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
