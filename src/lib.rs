//! Bedtimer - a Rust-based bedtime prediction tool
//!
//! This library provides the core functionality for recommending a
//! bedtime from a desired wake time, sleep amount, and daily coffee
//! intake, using a linear regression model loaded from an artifact file.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod model;
pub mod utils;

// Re-export core types for easier use
pub use crate::core::{
    data::{Bedtime, CoffeeIntake, PredictRequest, PredictResponse, SleepAmount, WakeTime},
    operations::BedtimePredictor,
    traits::SleepEstimator,
};
pub use crate::model::SleepModel;
pub use crate::utils::error::{AppError, AppResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main library interface for external usage
pub struct Bedtimer {
    predictor: BedtimePredictor,
}

impl Bedtimer {
    /// Create a new Bedtimer instance with the given configuration
    pub fn new(config: &config::Config) -> AppResult<Self> {
        Ok(Self {
            predictor: BedtimePredictor::from_config(config)?,
        })
    }

    /// Get the underlying predictor for direct access
    pub fn predictor(&self) -> &BedtimePredictor {
        &self.predictor
    }
}
