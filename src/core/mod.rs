//! Core business logic layer
//!
//! This module contains the data structures, traits, and the predictor
//! that form the heart of the application.

pub mod data;
pub mod operations;
pub mod traits;
