//! Physical placement of board blocks

/// Centred block layout for a logical board grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    width: usize,
    height: usize,
    spacing: f32,
}

impl BoardGeometry {
    /// Geometry for a `width x height` board with uniform spacing
    pub const fn new(width: usize, height: usize, spacing: f32) -> Self {
        Self {
            width,
            height,
            spacing,
        }
    }

    /// Position of the block at column `col`, row `row`
    ///
    /// The board is centred on the origin, so the middle of the grid sits at
    /// `(0, 0)` regardless of its size.
    pub fn position(&self, col: usize, row: usize) -> (f32, f32) {
        let offset_x = self.width.saturating_sub(1) as f32 * self.spacing / 2.0;
        let offset_y = self.height.saturating_sub(1) as f32 * self.spacing / 2.0;
        (
            (col as f32).mul_add(self.spacing, -offset_x),
            (row as f32).mul_add(self.spacing, -offset_y),
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/board.rs"]
mod unit_tests;
