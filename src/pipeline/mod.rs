//! Image-to-board generation
//!
//! Ties sampling, budget allocation, placement and layout projection into a
//! single pass driven by a [`GenerationConfig`].

/// Generation parameters and their validation
pub mod config;
/// The end-to-end generation pass
pub mod generator;

pub use config::GenerationConfig;
pub use generator::{Generation, LevelGenerator};
