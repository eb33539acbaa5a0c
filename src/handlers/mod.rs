//! HTTP handlers

pub mod anomaly;
pub mod fraud;
pub mod health;
pub mod metrics;

use std::time::Instant;

/// Elapsed wall-clock milliseconds since `started`, floored at one
/// microsecond so a sub-tick scoring call never rounds to zero latency.
pub(crate) fn elapsed_ms(started: Instant) -> f64 {
    (started.elapsed().as_secs_f64() * 1000.0).max(0.001)
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1_000.0).round() / 1_000.0
}

pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_helpers() {
        assert_eq!(round3(1.23456), 1.235);
        assert_eq!(round4(0.987654), 0.9877);
        assert_eq!(round4(1.0), 1.0);
    }

    #[test]
    fn elapsed_is_always_positive() {
        assert!(elapsed_ms(Instant::now()) > 0.0);
    }
}
