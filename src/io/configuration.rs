//! Generation constants and runtime configuration defaults

// Color classification
/// Maximum Euclidean RGBA distance for a palette match
pub const DEFAULT_TOLERANCE: f32 = 0.75;

// Board sampling defaults
/// Logical grid width sampled from the source image
pub const DEFAULT_GRID_WIDTH: usize = 20;
/// Logical grid height sampled from the source image
pub const DEFAULT_GRID_HEIGHT: usize = 20;
/// Distance between neighbouring blocks on the board
pub const DEFAULT_BLOCK_SPACING: f32 = 1.0;

// Budget allocation
/// Bullet budgets and unit quotas are multiples of this increment
pub const BULLET_INCREMENT: usize = 10;
/// Hard cap on bullets carried by a single unit
pub const MAX_BULLETS_PER_UNIT: usize = 50;
/// Rounded budgets at or above this use the largest per-unit target
pub const HIGH_TIER_THRESHOLD: usize = 350;
/// Rounded budgets at or above this (and below the high tier) use the middle target
pub const MID_TIER_THRESHOLD: usize = 100;
/// Per-unit target for the high tier
pub const HIGH_TIER_TARGET: usize = 50;
/// Per-unit target for the middle tier
pub const MID_TIER_TARGET: usize = 40;
/// Per-unit target for small budgets
pub const LOW_TIER_TARGET: usize = 20;

// Placement
/// Random column retries before falling back to a row scan
pub const PLACEMENT_RETRIES: usize = 10;
/// Default difficulty in [0, 1]
pub const DEFAULT_DIFFICULTY: f64 = 0.5;
/// Level that maps to difficulty 1.0
pub const MAX_LEVEL: u32 = 100;

// Layout projection
/// Horizontal distance between unit slots
pub const DEFAULT_UNIT_SPACING_X: f32 = 150.0;
/// Vertical distance between unit slots
pub const DEFAULT_UNIT_SPACING_Y: f32 = 150.0;
/// Extra space added below the last occupied row
pub const BOUNDING_MARGIN: f32 = 100.0;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Board preview export
/// Suffix appended to input file stems for the preview image
pub const OUTPUT_SUFFIX: &str = "_board";
/// Edge length in pixels of one slot in the preview image
pub const PREVIEW_SLOT_PIXELS: u32 = 8;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

#[cfg(test)]
#[path = "../../tests/unit/io/configuration.rs"]
mod unit_tests;
