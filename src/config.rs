//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection URL
    pub database_url: String,

    /// Server port
    pub port: u16,

    /// Path to the fraud classifier artifact
    pub fraud_model_path: String,

    /// Path to the anomaly detector artifact
    pub anomaly_model_path: String,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:risk.db?mode=rwc".to_string()),

            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            fraud_model_path: env::var("FRAUD_MODEL_PATH")
                .unwrap_or_else(|_| "artifacts/fraud_model.json".to_string()),

            anomaly_model_path: env::var("ANOMALY_MODEL_PATH")
                .unwrap_or_else(|_| "artifacts/anomaly_model.json".to_string()),

            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }
}
