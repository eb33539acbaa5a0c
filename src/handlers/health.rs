//! Health check handler
//!
//! Reports the loaded model versions so external monitors can confirm both
//! artifacts are present. Startup aborts unless both load, so an absent
//! version is unrepresentable here.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    environment: String,
    fraud_model: String,
    anomaly_model: String,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        environment: state.config.environment.clone(),
        fraud_model: state.registry.fraud_version().to_string(),
        anomaly_model: state.registry.anomaly_version().to_string(),
    })
}
