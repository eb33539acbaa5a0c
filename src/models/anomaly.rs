//! Anomaly prediction record

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use super::StreamStats;

#[derive(Debug)]
pub struct AnomalyPrediction {
    pub response_time: f64,
    pub error_rate: f64,
    pub cpu_usage: f64,
    pub memory_usage: f64,
    pub anomaly_score: f64,
    pub model_version: String,
    pub latency_ms: f64,
}

impl AnomalyPrediction {
    /// Append the record; the creation timestamp is assigned here.
    pub async fn insert(&self, pool: &SqlitePool) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO anomaly_predictions
                (response_time, error_rate, cpu_usage, memory_usage,
                 anomaly_score, model_version, latency_ms, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(self.response_time)
        .bind(self.error_rate)
        .bind(self.cpu_usage)
        .bind(self.memory_usage)
        .bind(self.anomaly_score)
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
                COALESCE(AVG(anomaly_score), 0.0) AS avg_score
            FROM anomaly_predictions
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
