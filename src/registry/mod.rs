//! Model registry: loads the two trained artifacts once at startup and
//! exposes pure scoring operations over them.
//!
//! Both scoring calls are synchronous reads over immutable state, so a
//! single registry instance is shared across all requests without locking.

mod artifact;
mod forest;
mod logistic;
mod scaler;

use std::path::{Path, PathBuf};

use ndarray::Array1;
use thiserror::Error;

use artifact::{AnomalyArtifact, AnomalyMetadata, FraudArtifact, FraudMetadata};
use forest::IsolationForest;
use logistic::LogisticModel;
use scaler::StandardScaler;

pub use artifact::ScoreRange;

/// Guards the score normalization against a degenerate zero-width
/// calibration range.
const SCORE_RANGE_EPS: f64 = 1e-9;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read model artifact {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid model artifact {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

#[derive(Debug)]
pub struct ModelRegistry {
    fraud: FraudModel,
    anomaly: AnomalyModel,
}

#[derive(Debug)]
struct FraudModel {
    scaler: StandardScaler,
    classifier: LogisticModel,
    meta: FraudMetadata,
}

#[derive(Debug)]
struct AnomalyModel {
    scaler: StandardScaler,
    forest: IsolationForest,
    meta: AnomalyMetadata,
}

impl ModelRegistry {
    /// Load both artifacts from disk. Any failure is fatal to startup;
    /// there is no partial-service mode.
    pub fn load(
        fraud_path: impl AsRef<Path>,
        anomaly_path: impl AsRef<Path>,
    ) -> Result<Self, ArtifactError> {
        let fraud = FraudModel::load(fraud_path.as_ref())?;
        let anomaly = AnomalyModel::load(anomaly_path.as_ref())?;

        tracing::info!(
            fraud = %fraud.meta.model_version,
            anomaly = %anomaly.meta.model_version,
            "models loaded"
        );

        Ok(Self { fraud, anomaly })
    }

    pub fn fraud_version(&self) -> &str {
        &self.fraud.meta.model_version
    }

    pub fn anomaly_version(&self) -> &str {
        &self.anomaly.meta.model_version
    }

    /// Score one transaction; returns the positive-class probability in
    /// [0,1] and the producing model version.
    ///
    /// Categorical inputs are free-form strings; values absent from the
    /// artifact's encoding tables fall back to index 0 and never fail.
    pub fn score_fraud(
        &self,
        transaction_amount: f64,
        merchant_type: &str,
        country: &str,
        time_delta: f64,
        device_type: &str,
    ) -> (f64, &str) {
        let merchant_idx = self.fraud.encode("merchant_type", merchant_type);
        let country_idx = self.fraud.encode("country", country);
        let device_idx = self.fraud.encode("device_type", device_type);

        let x = Array1::from(vec![
            transaction_amount,
            merchant_idx,
            country_idx,
            time_delta,
            device_idx,
        ]);
        let probability = self
            .fraud
            .classifier
            .predict_proba(&self.fraud.scaler.transform(&x));

        (probability, &self.fraud.meta.model_version)
    }

    /// Score one system-metrics sample; returns a bounded anomaly score in
    /// [0,1] (higher = more anomalous) and the producing model version.
    ///
    /// The forest's raw decision function is inverted and rescaled against
    /// the training-time [min,max] calibration range, then clipped: raw
    /// magnitudes are unbounded, so an input far outside the training
    /// distribution can land outside the range and must still map into
    /// [0,1].
    pub fn score_anomaly(
        &self,
        response_time: f64,
        error_rate: f64,
        cpu_usage: f64,
        memory_usage: f64,
    ) -> (f64, &str) {
        let x = Array1::from(vec![response_time, error_rate, cpu_usage, memory_usage]);
        let raw = self
            .anomaly
            .forest
            .decision_function(&self.anomaly.scaler.transform(&x));

        let ScoreRange { min, max } = self.anomaly.meta.score_range;
        let score = (1.0 - (raw - min) / (max - min + SCORE_RANGE_EPS)).clamp(0.0, 1.0);

        (score, &self.anomaly.meta.model_version)
    }
}

impl FraudModel {
    fn load(path: &Path) -> Result<Self, ArtifactError> {
        let artifact: FraudArtifact = read_artifact(path)?;

        let scaler = StandardScaler::from_params(artifact.pipeline.scaler);
        let classifier = LogisticModel::from_params(artifact.pipeline.classifier);
        if scaler.dim() != classifier.dim() {
            return Err(ArtifactError::Invalid {
                path: path.to_path_buf(),
                reason: format!(
                    "scaler dimension {} does not match classifier dimension {}",
                    scaler.dim(),
                    classifier.dim()
                ),
            });
        }

        Ok(Self {
            scaler,
            classifier,
            meta: artifact.metadata,
        })
    }

    /// Encode a categorical value through the artifact's table; unknown
    /// values map to index 0.
    fn encode(&self, field: &str, value: &str) -> f64 {
        match self
            .meta
            .encodings
            .get(field)
            .and_then(|table| table.get(value))
        {
            Some(idx) => *idx as f64,
            None => {
                tracing::debug!(field, value, "unknown category, using default index 0");
                0.0
            }
        }
    }
}

impl AnomalyModel {
    fn load(path: &Path) -> Result<Self, ArtifactError> {
        let artifact: AnomalyArtifact = read_artifact(path)?;

        if artifact.pipeline.forest.trees.is_empty() {
            return Err(ArtifactError::Invalid {
                path: path.to_path_buf(),
                reason: "forest contains no trees".to_string(),
            });
        }

        Ok(Self {
            scaler: StandardScaler::from_params(artifact.pipeline.scaler),
            forest: IsolationForest::from_params(artifact.pipeline.forest),
            meta: artifact.metadata,
        })
    }
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let bytes = std::fs::read(path).map_err(|source| ArtifactError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
