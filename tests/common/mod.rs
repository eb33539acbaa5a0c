//! Shared test setup: a fresh in-memory database plus the shipped model
//! artifacts, wired into the real router.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use risk_platform::{config::Config, create_router, db, registry::ModelRegistry, AppState};

/// Build the full application against a fresh in-memory SQLite database.
pub async fn test_app() -> Router {
    // a single connection so every query sees the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect in-memory sqlite");
    db::run_migrations(&pool).await.expect("apply schema");

    let root = env!("CARGO_MANIFEST_DIR");
    let registry = ModelRegistry::load(
        format!("{root}/artifacts/fraud_model.json"),
        format!("{root}/artifacts/anomaly_model.json"),
    )
    .expect("load model artifacts");

    create_router(AppState {
        pool,
        registry: Arc::new(registry),
        config: Config::from_env(),
    })
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("request failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    // error rejections may carry non-JSON bodies
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
