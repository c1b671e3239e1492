//! Shared test harness: a seeded application and request helpers

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use gearloan_server::{
    api, config::AppConfig, repository::Repository, services::Services, AppState,
};

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    // Holds the session cache directory open for the test's lifetime
    _cache_dir: tempfile::TempDir,
}

/// Build an app over the seed catalog with a throwaway session cache
pub fn spawn_app() -> TestApp {
    let cache_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut config = AppConfig::default();
    config.session.cache_path = cache_dir.path().join("session.json");

    let repository = Repository::with_seed_data();
    let services = Services::new(repository, &config);
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    TestApp {
        router: api::router(state.clone()),
        state,
        _cache_dir: cache_dir,
    }
}

impl TestApp {
    pub async fn get(&self, path: &str) -> Response<Body> {
        let request = Request::builder()
            .uri(format!("/api/v1{}", path))
            .body(Body::empty())
            .expect("Failed to build request");
        self.router.clone().oneshot(request).await.expect("Request failed")
    }

    pub async fn post(&self, path: &str, body: Value) -> Response<Body> {
        let request = Request::builder()
            .method("POST")
            .uri(format!("/api/v1{}", path))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        self.router.clone().oneshot(request).await.expect("Request failed")
    }

    pub async fn put(&self, path: &str, body: Value) -> Response<Body> {
        let request = Request::builder()
            .method("PUT")
            .uri(format!("/api/v1{}", path))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        self.router.clone().oneshot(request).await.expect("Request failed")
    }

    pub async fn delete(&self, path: &str) -> Response<Body> {
        let request = Request::builder()
            .method("DELETE")
            .uri(format!("/api/v1{}", path))
            .body(Body::empty())
            .expect("Failed to build request");
        self.router.clone().oneshot(request).await.expect("Request failed")
    }

    /// Log in through the real endpoint, establishing the process session
    pub async fn login(&self, email: &str, role: &str) -> Value {
        let response = self
            .post("/auth/login", json!({ "email": email, "role": role }))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        read_json(response).await
    }
}

/// Collect a response body into JSON
pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body was not valid JSON")
}
