//! POST /v1/fraud/predict — fraud detection endpoint.

use std::time::Instant;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::FraudPrediction;
use crate::{AppResult, AppState};

use super::{elapsed_ms, round3, round4};

#[derive(Debug, Deserialize, Validate)]
pub struct FraudRequest {
    /// Transaction value in currency units
    #[validate(range(exclusive_min = 0.0))]
    pub transaction_amount: f64,

    /// Category of merchant
    pub merchant_type: String,

    /// ISO 2-letter country code
    pub country: String,

    /// Hours since the previous transaction
    #[validate(range(min = 0.0))]
    pub time_delta: f64,

    /// Device used: mobile | desktop | tablet
    pub device_type: String,
}

#[derive(Debug, Serialize)]
pub struct FraudResponse {
    pub fraud_probability: f64,
    pub model_version: String,
    pub latency_ms: f64,
}

pub async fn predict(
    State(state): State<AppState>,
    Json(req): Json<FraudRequest>,
) -> AppResult<Json<FraudResponse>> {
    req.validate()?;

    let started = Instant::now();
    let (probability, version) = state.registry.score_fraud(
        req.transaction_amount,
        &req.merchant_type,
        &req.country,
        req.time_delta,
        &req.device_type,
    );
    let latency_ms = elapsed_ms(started);

    let record = FraudPrediction {
        transaction_amount: req.transaction_amount,
        merchant_type: req.merchant_type,
        country: req.country,
        time_delta: req.time_delta,
        device_type: req.device_type,
        fraud_probability: probability,
        model_version: version.to_string(),
        latency_ms,
    };
    record.insert(&state.pool).await?;

    tracing::info!(
        probability = probability,
        version = %record.model_version,
        latency_ms = latency_ms,
        "fraud prediction"
    );

    Ok(Json(FraudResponse {
        fraud_probability: round4(probability),
        model_version: record.model_version,
        latency_ms: round3(latency_ms),
    }))
}
