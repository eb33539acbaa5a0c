//! Risk & Anomaly Detection Platform
//!
//! Serves two pre-trained statistical models behind HTTP endpoints:
//!
//! - **Fraud Detection** — logistic regression over transaction features
//! - **Anomaly Detection** — isolation forest over SaaS system metrics
//!
//! Every inference is persisted with latency tracking and exposed through
//! an aggregate metrics endpoint.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      RISK PLATFORM                         │
//! ├────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌────────────────┐   ┌────────────────┐  │
//! │  │  API      │   │  Model         │   │  Metrics       │  │
//! │  │  Gateway  │──▶│  Registry      │   │  Aggregator    │  │
//! │  │  (Axum)   │   │  (immutable)   │   │                │  │
//! │  └─────┬─────┘   └────────────────┘   └───────┬────────┘  │
//! │        └──────────────────┬───────────────────┘           │
//! │                           ▼                               │
//! │                    ┌─────────────┐                        │
//! │                    │   SQLite    │                        │
//! │                    └─────────────┘                        │
//! └────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod registry;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{AppError, AppResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pool: sqlx::SqlitePool,
    pub registry: Arc<registry::ModelRegistry>,
    pub config: config::Config,
}

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/v1/fraud/predict", post(handlers::fraud::predict))
        .route("/v1/anomaly/predict", post(handlers::anomaly::predict))
        .route("/v1/metrics", get(handlers::metrics::get_metrics))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
