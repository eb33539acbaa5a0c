//! On-disk model artifact schema.
//!
//! Artifacts are produced out-of-band by the training pipeline and loaded
//! once at startup. Each bundle carries the fitted pipeline parameters plus
//! the metadata needed to serve it: version string, categorical encodings
//! for the fraud model, raw-score calibration range for the anomaly model.

use std::collections::HashMap;

use serde::Deserialize;

/// Fraud classifier bundle: standard scaler + logistic regression.
#[derive(Debug, Clone, Deserialize)]
pub struct FraudArtifact {
    pub metadata: FraudMetadata,
    pub pipeline: FraudPipeline,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FraudMetadata {
    pub model_version: String,
    pub algorithm: String,
    pub features: Vec<String>,
    /// Per-feature category → integer index tables
    pub encodings: HashMap<String, HashMap<String, usize>>,
    pub training_samples: u64,
    pub trained_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FraudPipeline {
    pub scaler: ScalerParams,
    pub classifier: LogisticParams,
}

/// Anomaly detector bundle: standard scaler + isolation forest.
#[derive(Debug, Clone, Deserialize)]
pub struct AnomalyArtifact {
    pub metadata: AnomalyMetadata,
    pub pipeline: AnomalyPipeline,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnomalyMetadata {
    pub model_version: String,
    pub algorithm: String,
    pub features: Vec<String>,
    pub contamination: f64,
    /// Raw decision-function bounds observed on the training reference sample
    pub score_range: ScoreRange,
    pub training_samples: u64,
    pub trained_at: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnomalyPipeline {
    pub scaler: ScalerParams,
    pub forest: ForestParams,
}

/// Fitted per-feature standardization parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogisticParams {
    pub coef: Vec<f64>,
    pub intercept: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForestParams {
    pub n_estimators: usize,
    pub max_samples: usize,
    /// Fitted decision threshold; subtracted so the contamination quantile
    /// of the training distribution sits at raw = 0
    pub offset: f64,
    pub trees: Vec<TreeParams>,
}

/// One isolation tree as flat parallel arrays. Leaves carry children = -1,
/// feature = -2, threshold = -2.0.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeParams {
    pub children_left: Vec<i32>,
    pub children_right: Vec<i32>,
    pub feature: Vec<i32>,
    pub threshold: Vec<f64>,
    pub n_node_samples: Vec<u32>,
}
