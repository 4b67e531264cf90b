//! Curated learning videos.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/videos/curated", get(curated))
}

async fn curated() -> Json<serde_json::Value> {
    let categories = jengabiz_backend::curated_categories();
    Json(serde_json::json!({
        "total": jengabiz_backend::curated_videos().len(),
        "categories": categories,
    }))
}

#[cfg(test)]
mod tests {
    use crate::routes::tests::{call, get, test_app};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_curated_catalog() {
        let (app, _state, _dir) = test_app();
        let (status, json) = call(&app, get("/api/videos/curated")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total"], 19);
        let categories = json["categories"].as_array().unwrap();
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0]["name"], "Business Growth & Strategy");
        assert!(categories[0]["videos"][0]["url"].is_string());
    }
}
