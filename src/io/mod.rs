//! Command-line surface, constants, errors and file formats

/// Command-line parsing and batch processing
pub mod cli;
/// Compile-time defaults
pub mod configuration;
/// Crate-wide error type
pub mod error;
/// PNG loading and preview export
pub mod image;
/// Batch progress display
pub mod progress;
/// Plain-text board report
pub mod summary;
