//! Projection of slot assignments onto physical coordinates

use crate::budget::UnitId;
use crate::io::configuration::BOUNDING_MARGIN;
use crate::placement::SlotMatrix;

/// A unit's physical position in the unit layout container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalPosition {
    /// The unit positioned
    pub unit: UnitId,
    /// Horizontal offset, centred on the container
    pub x: f32,
    /// Vertical offset, growing downward from row 0
    pub y: f32,
}

/// Projected layout and container extent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    /// Positions in row-major slot order
    pub positions: Vec<PhysicalPosition>,
    /// Highest row holding a unit, 0 when the matrix is empty
    pub last_active_row: usize,
    /// Container height needed to show every occupied row plus the margin
    pub bounding_height: f32,
}

/// Converts slot indices into container coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutProjector {
    spacing_x: f32,
    spacing_y: f32,
    margin: f32,
}

impl Default for LayoutProjector {
    fn default() -> Self {
        Self::new(
            crate::io::configuration::DEFAULT_UNIT_SPACING_X,
            crate::io::configuration::DEFAULT_UNIT_SPACING_Y,
        )
    }
}

impl LayoutProjector {
    /// Projector with the given slot spacing and the default margin
    pub const fn new(spacing_x: f32, spacing_y: f32) -> Self {
        Self {
            spacing_x,
            spacing_y,
            margin: BOUNDING_MARGIN,
        }
    }

    /// Override the margin added below the last occupied row
    #[must_use]
    pub const fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Horizontal position of column `col` in a `columns`-wide matrix
    pub fn x(&self, col: usize, columns: usize) -> f32 {
        let start_x = -(columns.saturating_sub(1) as f32 * self.spacing_x) / 2.0;
        (col as f32).mul_add(self.spacing_x, start_x)
    }

    /// Vertical position of row `row`
    pub fn y(&self, row: usize) -> f32 {
        (-(row as f32)).mul_add(self.spacing_y, -self.spacing_y / 2.0)
    }

    /// Project every occupied slot and size the container
    pub fn project(&self, matrix: &SlotMatrix) -> Projection {
        let columns = matrix.columns();
        let positions = matrix
            .occupied()
            .map(|(unit, col, row)| PhysicalPosition {
                unit,
                x: self.x(col, columns),
                y: self.y(row),
            })
            .collect();

        let last_active_row = matrix.last_active_row().unwrap_or(0);
        let bounding_height = ((last_active_row + 1) as f32).mul_add(self.spacing_y, self.margin);

        Projection {
            positions,
            last_active_row,
            bounding_height,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/projection.rs"]
mod unit_tests;
