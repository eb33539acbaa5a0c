//! GET /v1/metrics — aggregated platform metrics endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::models::{AnomalyPrediction, FraudPrediction};
use crate::{AppResult, AppState};

use super::{round3, round4};

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub total_predictions: i64,
    pub fraud_predictions: i64,
    pub anomaly_predictions: i64,
    pub avg_fraud_latency_ms: f64,
    pub avg_anomaly_latency_ms: f64,
    pub avg_fraud_probability: f64,
    pub avg_anomaly_score: f64,
}

/// Pure read-aggregation across both prediction streams; empty streams
/// report 0.0 averages.
pub async fn get_metrics(State(state): State<AppState>) -> AppResult<Json<MetricsResponse>> {
    let fraud = FraudPrediction::aggregate(&state.pool).await?;
    let anomaly = AnomalyPrediction::aggregate(&state.pool).await?;

    Ok(Json(MetricsResponse {
        total_predictions: fraud.count + anomaly.count,
        fraud_predictions: fraud.count,
        anomaly_predictions: anomaly.count,
        avg_fraud_latency_ms: round3(fraud.avg_latency_ms),
        avg_anomaly_latency_ms: round3(anomaly.avg_latency_ms),
        avg_fraud_probability: round4(fraud.avg_score),
        avg_anomaly_score: round4(anomaly.avg_score),
    }))
}
