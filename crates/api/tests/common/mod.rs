#![allow(dead_code)]

use std::sync::Arc;

use articles_api::config::{DatabaseConfig, ServerConfig};
use articles_api::router::build_app_router;
use articles_api::state::AppState;
use articles_db::{ArticleStore, MemoryArticleRepo};
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 10,
        database: DatabaseConfig {
            url: "memory://".to_string(),
            name: "articles".to_string(),
            collection: "go".to_string(),
        },
    }
}

/// Build the full application router over the given store.
pub fn build_test_app(store: Arc<dyn ArticleStore>) -> Router {
    build_app_router(AppState {
        store,
        config: Arc::new(test_config()),
    })
}

/// Build the application over a fresh in-memory store, returning both.
pub fn memory_app() -> (Router, MemoryArticleRepo) {
    let repo = MemoryArticleRepo::new();
    (build_test_app(Arc::new(repo.clone())), repo)
}

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Body::from(json.to_string())).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
