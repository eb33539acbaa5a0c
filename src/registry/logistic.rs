//! Logistic-regression inference.

use ndarray::Array1;

use super::artifact::LogisticParams;

#[derive(Debug)]
pub struct LogisticModel {
    coef: Array1<f64>,
    intercept: f64,
}

impl LogisticModel {
    pub fn from_params(params: LogisticParams) -> Self {
        Self {
            coef: Array1::from(params.coef),
            intercept: params.intercept,
        }
    }

    pub fn dim(&self) -> usize {
        self.coef.len()
    }

    /// Positive-class probability for a standardized feature vector.
    pub fn predict_proba(&self, x: &Array1<f64>) -> f64 {
        sigmoid(self.coef.dot(x) + self.intercept)
    }
}

/// Numerically stable logistic function.
fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_known_values() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!((sigmoid(2.0) - 0.880_797).abs() < 1e-6);
        assert!((sigmoid(-2.0) - 0.119_203).abs() < 1e-6);
    }

    #[test]
    fn sigmoid_saturates_without_overflow() {
        assert!(sigmoid(1e6) <= 1.0);
        assert!(sigmoid(-1e6) >= 0.0);
    }

    #[test]
    fn predict_proba_is_monotonic_in_logit() {
        let model = LogisticModel::from_params(LogisticParams {
            coef: vec![1.0, -0.5],
            intercept: 0.1,
        });
        let low = model.predict_proba(&Array1::from(vec![-1.0, 2.0]));
        let high = model.predict_proba(&Array1::from(vec![3.0, -1.0]));
        assert!(high > low);
        assert!((0.0..=1.0).contains(&low));
        assert!((0.0..=1.0).contains(&high));
    }
}
