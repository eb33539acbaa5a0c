//! Database module - SQLite connection and migrations

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

/// Create database connection pool
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Run database migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Create tables if not exist
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;

    tracing::info!("Database schema applied successfully");
    Ok(())
}

/// Database schema SQL
const SCHEMA_SQL: &str = r#"
-- Fraud prediction log (append-only)
CREATE TABLE IF NOT EXISTS fraud_predictions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    transaction_amount REAL NOT NULL,
    merchant_type TEXT NOT NULL,
    country TEXT NOT NULL,
    time_delta REAL NOT NULL,
    device_type TEXT NOT NULL,
    fraud_probability REAL NOT NULL,
    model_version TEXT NOT NULL,
    latency_ms REAL NOT NULL,
    created_at TEXT NOT NULL
);

-- Anomaly prediction log (append-only)
CREATE TABLE IF NOT EXISTS anomaly_predictions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    response_time REAL NOT NULL,
    error_rate REAL NOT NULL,
    cpu_usage REAL NOT NULL,
    memory_usage REAL NOT NULL,
    anomaly_score REAL NOT NULL,
    model_version TEXT NOT NULL,
    latency_ms REAL NOT NULL,
    created_at TEXT NOT NULL
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_fraud_created ON fraud_predictions(created_at);
CREATE INDEX IF NOT EXISTS idx_anomaly_created ON anomaly_predictions(created_at);
"#;
