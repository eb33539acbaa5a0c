//! Fitted standard-scaler transform.

use ndarray::Array1;

use super::artifact::ScalerParams;

#[derive(Debug)]
pub struct StandardScaler {
    mean: Array1<f64>,
    scale: Array1<f64>,
}

impl StandardScaler {
    pub fn from_params(params: ScalerParams) -> Self {
        Self {
            mean: Array1::from(params.mean),
            scale: Array1::from(params.scale),
        }
    }

    /// Number of features the scaler was fitted on.
    pub fn dim(&self) -> usize {
        self.mean.len()
    }

    pub fn transform(&self, x: &Array1<f64>) -> Array1<f64> {
        (x - &self.mean) / &self.scale
    }
}
