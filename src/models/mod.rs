//! Persisted prediction records
//!
//! Two independent append-only streams, one per model domain. Records are
//! written once per successful inference and never updated or deleted.

pub mod anomaly;
pub mod fraud;

pub use anomaly::AnomalyPrediction;
pub use fraud::FraudPrediction;

/// Per-stream aggregates over persisted predictions.
#[derive(Debug, Clone, Copy)]
pub struct StreamStats {
    pub count: i64,
    pub avg_latency_ms: f64,
    pub avg_score: f64,
}
