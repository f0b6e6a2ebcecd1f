//! Reference palette and nearest-color classification

/// Nearest-reference color classification with tolerance
pub mod classifier;
/// Palette entries and validation
pub mod entries;

pub use classifier::ColorClassifier;
pub use entries::{Palette, PaletteEntry, Rgba};
