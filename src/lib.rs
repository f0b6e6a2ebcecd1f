//! Board and shooter layout generation from pixel art
//!
//! A source image is sampled on a logical grid and each cell is matched to
//! the nearest palette color. Per-color cell counts become bullet budgets
//! split into shooter units, and the units are packed into a slot matrix:
//! the color most present on the board's border first, the rest shuffled in
//! after. Slot indices are finally projected to container coordinates.

#![forbid(unsafe_code)]

/// Bullet budgets and per-color unit generation
pub mod budget;
/// Input/output operations and error handling
pub mod io;
/// Board and slot coordinate projection
pub mod layout;
/// Palette definition and nearest-color classification
pub mod palette;
/// End-to-end generation pass
pub mod pipeline;
/// Slot matrix placement of generated units
pub mod placement;
/// Grid sampling of source images
pub mod sampling;

pub use io::error::{GenerationError, Result};
