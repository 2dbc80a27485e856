//! Core trait definitions for bedtime prediction
//!
//! The estimator trait is the seam between the predictor and whatever
//! regression backs it, so failure behavior can be exercised without a
//! real artifact.

use crate::utils::error::AppResult;

/// Estimates required sleep from the model's raw feature values
///
/// Features follow the trained artifact's units: wake time in seconds
/// since midnight, desired sleep in hours, coffee in cups. The estimate
/// comes back in seconds.
pub trait SleepEstimator {
    fn estimated_sleep_seconds(
        &self,
        wake_seconds: f64,
        sleep_hours: f64,
        coffee_cups: f64,
    ) -> AppResult<f64>;
}
