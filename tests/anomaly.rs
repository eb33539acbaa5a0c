//! Tests for POST /v1/anomaly/predict.

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::{post_json, test_app};

fn valid_payload() -> Value {
    json!({
        "response_time": 950.0,
        "error_rate": 0.12,
        "cpu_usage": 91.0,
        "memory_usage": 87.0,
    })
}

#[tokio::test]
async fn predict_returns_200() {
    let app = test_app().await;
    let (status, _) = post_json(&app, "/v1/anomaly/predict", &valid_payload()).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn predict_response_schema() {
    let app = test_app().await;
    let (_, body) = post_json(&app, "/v1/anomaly/predict", &valid_payload()).await;
    assert!(body.get("anomaly_score").is_some());
    assert!(body.get("model_version").is_some());
    assert!(body.get("latency_ms").is_some());
}

#[tokio::test]
async fn score_in_range() {
    let app = test_app().await;
    let (_, body) = post_json(&app, "/v1/anomaly/predict", &valid_payload()).await;
    let score = body["anomaly_score"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&score));
}

#[tokio::test]
async fn latency_is_positive() {
    let app = test_app().await;
    let (_, body) = post_json(&app, "/v1/anomaly/predict", &valid_payload()).await;
    assert!(body["latency_ms"].as_f64().unwrap() > 0.0);
}

#[tokio::test]
async fn model_version_non_empty() {
    let app = test_app().await;
    let (_, body) = post_json(&app, "/v1/anomaly/predict", &valid_payload()).await;
    assert_ne!(body["model_version"].as_str().unwrap(), "");
}

#[tokio::test]
async fn missing_field_returns_422() {
    let app = test_app().await;
    let mut payload = valid_payload();
    payload.as_object_mut().unwrap().remove("response_time");
    let (status, _) = post_json(&app, "/v1/anomaly/predict", &payload).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn error_rate_out_of_range_returns_422() {
    let app = test_app().await;
    let mut payload = valid_payload();
    payload["error_rate"] = json!(1.5);
    let (status, _) = post_json(&app, "/v1/anomaly/predict", &payload).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn normal_metrics_score_below_anomalous_metrics() {
    let app = test_app().await;
    let normal = json!({
        "response_time": 100.0,
        "error_rate": 0.01,
        "cpu_usage": 30.0,
        "memory_usage": 40.0,
    });
    let anomalous = json!({
        "response_time": 2000.0,
        "error_rate": 0.80,
        "cpu_usage": 98.0,
        "memory_usage": 97.0,
    });
    let (_, n) = post_json(&app, "/v1/anomaly/predict", &normal).await;
    let (_, a) = post_json(&app, "/v1/anomaly/predict", &anomalous).await;
    assert!(
        a["anomaly_score"].as_f64().unwrap() > n["anomaly_score"].as_f64().unwrap(),
        "anomalous metrics should score higher than normal metrics"
    );
}
