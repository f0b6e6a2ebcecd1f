//! Runtime configuration for a generation pass

use crate::io::configuration::{
    BOUNDING_MARGIN, DEFAULT_BLOCK_SPACING, DEFAULT_DIFFICULTY, DEFAULT_GRID_HEIGHT,
    DEFAULT_GRID_WIDTH, DEFAULT_UNIT_SPACING_X, DEFAULT_UNIT_SPACING_Y,
};
use crate::io::error::{Result, invalid_parameter};
use crate::placement::policy::difficulty_for_level;
use crate::placement::{ColumnPolicy, RowPolicy};

/// Parameters controlling sampling, placement and projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    /// Logical board columns sampled from the image
    pub grid_width: usize,
    /// Logical board rows sampled from the image
    pub grid_height: usize,
    /// Distance between neighbouring board blocks
    pub block_spacing: f32,
    /// Difficulty in [0, 1]
    pub difficulty: f64,
    /// How the slot matrix column count is chosen
    pub column_policy: ColumnPolicy,
    /// How the slot matrix row count is chosen
    pub row_policy: RowPolicy,
    /// Horizontal distance between unit slots
    pub unit_spacing_x: f32,
    /// Vertical distance between unit slots
    pub unit_spacing_y: f32,
    /// Space added below the last occupied unit row
    pub bounding_margin: f32,
    /// Add primary units until the unit total fills whole rows
    pub pad_primary: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            block_spacing: DEFAULT_BLOCK_SPACING,
            difficulty: DEFAULT_DIFFICULTY,
            column_policy: ColumnPolicy::default(),
            row_policy: RowPolicy::default(),
            unit_spacing_x: DEFAULT_UNIT_SPACING_X,
            unit_spacing_y: DEFAULT_UNIT_SPACING_Y,
            bounding_margin: BOUNDING_MARGIN,
            pad_primary: false,
        }
    }
}

impl GenerationConfig {
    /// Configuration for a numbered level
    ///
    /// Difficulty follows the level and columns are drawn from its tier.
    pub fn for_level(level: u32) -> Self {
        Self {
            difficulty: difficulty_for_level(level),
            column_policy: ColumnPolicy::FromLevel(level),
            ..Self::default()
        }
    }

    /// Check every parameter before any work is done
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either grid dimension is zero
    /// - Any spacing or the margin is not finite
    /// - The difficulty is NaN or outside [0, 1]
    /// - A fixed column count is zero
    pub fn validate(&self) -> Result<()> {
        if self.grid_width == 0 {
            return Err(invalid_parameter(
                "grid_width",
                &self.grid_width,
                &"grid must have at least one column",
            ));
        }
        if self.grid_height == 0 {
            return Err(invalid_parameter(
                "grid_height",
                &self.grid_height,
                &"grid must have at least one row",
            ));
        }

        for (parameter, value) in [
            ("block_spacing", self.block_spacing),
            ("unit_spacing_x", self.unit_spacing_x),
            ("unit_spacing_y", self.unit_spacing_y),
            ("bounding_margin", self.bounding_margin),
        ] {
            if !value.is_finite() {
                return Err(invalid_parameter(parameter, &value, &"must be finite"));
            }
        }

        if !(0.0..=1.0).contains(&self.difficulty) {
            return Err(invalid_parameter(
                "difficulty",
                &self.difficulty,
                &"must lie within [0, 1]",
            ));
        }

        if self.column_policy == ColumnPolicy::Fixed(0) {
            return Err(invalid_parameter(
                "columns",
                &0,
                &"slot matrix needs at least one column",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/config.rs"]
mod unit_tests;
