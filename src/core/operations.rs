//! Bedtime prediction operations
//!
//! The predictor is the single request/response computation at the heart
//! of the application: validated inputs go in, the regression estimates
//! the sleep actually required, and the recommended bedtime is the wake
//! time minus that estimate.

use crate::config::Config;
use crate::core::data::{Bedtime, CoffeeIntake, PredictRequest, SleepAmount, WakeTime};
use crate::core::traits::SleepEstimator;
use crate::model::SleepModel;
use crate::utils::error::AppResult;

/// Stateless predictor over a sleep estimator
pub struct BedtimePredictor<M: SleepEstimator = SleepModel> {
    model: M,
}

impl BedtimePredictor<SleepModel> {
    /// Build a predictor over the artifact named in the configuration
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Ok(Self::new(SleepModel::from_config(config)?))
    }
}

impl<M: SleepEstimator> BedtimePredictor<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Compute the recommended bedtime for the given inputs
    ///
    /// Deterministic for identical inputs; no state is kept between
    /// calls. Fails only when the underlying model is unavailable or
    /// its evaluation is unusable.
    pub fn predict(
        &self,
        wake: WakeTime,
        sleep: SleepAmount,
        coffee: CoffeeIntake,
    ) -> AppResult<Bedtime> {
        let wake_seconds = wake.seconds_from_midnight() as f64;
        let actual_sleep = self.model.estimated_sleep_seconds(
            wake_seconds,
            sleep.hours(),
            coffee.cups() as f64,
        )?;

        Ok(Bedtime::from_seconds_offset(wake_seconds - actual_sleep))
    }

    /// Serve a raw schema request, validating its values first
    pub fn predict_request(&self, request: PredictRequest) -> AppResult<Bedtime> {
        let (wake, sleep, coffee) = request.into_inputs()?;
        self.predict(wake, sleep, coffee)
    }
}
