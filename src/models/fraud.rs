//! Fraud prediction record

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use super::StreamStats;

#[derive(Debug)]
pub struct FraudPrediction {
    pub transaction_amount: f64,
    pub merchant_type: String,
    pub country: String,
    pub time_delta: f64,
    pub device_type: String,
    pub fraud_probability: f64,
    pub model_version: String,
    pub latency_ms: f64,
}

impl FraudPrediction {
    /// Append the record; the creation timestamp is assigned here.
    pub async fn insert(&self, pool: &SqlitePool) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO fraud_predictions
                (transaction_amount, merchant_type, country, time_delta, device_type,
                 fraud_probability, model_version, latency_ms, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(self.transaction_amount)
        .bind(&self.merchant_type)
        .bind(&self.country)
        .bind(self.time_delta)
        .bind(&self.device_type)
        .bind(self.fraud_probability)
        .bind(&self.model_version)
        .bind(self.latency_ms)
        .bind(Utc::now())
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn aggregate(pool: &SqlitePool) -> Result<StreamStats, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT
                COUNT(*) AS count,
                COALESCE(AVG(latency_ms), 0.0) AS avg_latency,
                COALESCE(AVG(fraud_probability), 0.0) AS avg_score
            FROM fraud_predictions
            "#,
        )
        .fetch_one(pool)
        .await?;

        Ok(StreamStats {
            count: row.get("count"),
            avg_latency_ms: row.get("avg_latency"),
            avg_score: row.get("avg_score"),
        })
    }
}
