//! Grid sampling of source images into color statistics

/// Grid walk, border detection and block events
pub mod grid;
/// First-seen ordered label tallies
pub mod stats;
/// Pixel-sampleable surfaces
pub mod surface;

pub use grid::{BlockPlacement, GridSampler, SampleReport};
pub use stats::ColorStat;
pub use surface::PixelSurface;
