//! POST /v1/anomaly/predict — system anomaly detection endpoint.

use std::time::Instant;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::AnomalyPrediction;
use crate::{AppResult, AppState};

use super::{elapsed_ms, round3, round4};

#[derive(Debug, Deserialize, Validate)]
pub struct AnomalyRequest {
    /// API response time in milliseconds
    #[validate(range(exclusive_min = 0.0))]
    pub response_time: f64,

    /// Proportion of failed requests [0-1]
    #[validate(range(min = 0.0, max = 1.0))]
    pub error_rate: f64,

    /// CPU utilisation percentage [0-100]
    #[validate(range(min = 0.0, max = 100.0))]
    pub cpu_usage: f64,

    /// Memory utilisation percentage [0-100]
    #[validate(range(min = 0.0, max = 100.0))]
    pub memory_usage: f64,
}

#[derive(Debug, Serialize)]
pub struct AnomalyResponse {
    /// Normalised anomaly score; higher = more anomalous
    pub anomaly_score: f64,
    pub model_version: String,
    pub latency_ms: f64,
}

pub async fn predict(
    State(state): State<AppState>,
    Json(req): Json<AnomalyRequest>,
) -> AppResult<Json<AnomalyResponse>> {
    req.validate()?;

    let started = Instant::now();
    let (score, version) = state.registry.score_anomaly(
        req.response_time,
        req.error_rate,
        req.cpu_usage,
        req.memory_usage,
    );
    let latency_ms = elapsed_ms(started);

    let record = AnomalyPrediction {
        response_time: req.response_time,
        error_rate: req.error_rate,
        cpu_usage: req.cpu_usage,
        memory_usage: req.memory_usage,
        anomaly_score: score,
        model_version: version.to_string(),
        latency_ms,
    };
    record.insert(&state.pool).await?;

    tracing::info!(
        score = score,
        version = %record.model_version,
        latency_ms = latency_ms,
        "anomaly prediction"
    );

    Ok(Json(AnomalyResponse {
        anomaly_score: round4(score),
        model_version: record.model_version,
        latency_ms: round3(latency_ms),
    }))
}
