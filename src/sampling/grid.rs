//! Logical grid walk over a source image
//!
//! Each cell of a `width x height` grid samples the pixel at its center,
//! classifies it against the palette, and tallies the result. Border cells
//! are tallied a second time into the edge statistics used to pick the
//! primary color.

use crate::io::error::{Result, invalid_parameter};
use crate::layout::board::BoardGeometry;
use crate::palette::ColorClassifier;
use crate::sampling::stats::ColorStat;
use crate::sampling::surface::PixelSurface;
use log::debug;

/// A classified board cell, emitted once per matched cell
#[derive(Debug, Clone, PartialEq)]
pub struct BlockPlacement {
    /// Palette label of the block
    pub label: String,
    /// Logical row `i` in `[0, height)`
    pub row: usize,
    /// Logical column `j` in `[0, width)`
    pub col: usize,
    /// Board-centred horizontal position
    pub x: f32,
    /// Board-centred vertical position
    pub y: f32,
}

/// Everything one sampling pass produces
#[derive(Debug, Clone, Default)]
pub struct SampleReport {
    /// Matched cells per label
    pub totals: ColorStat,
    /// Matched border cells per label
    pub edge_totals: ColorStat,
    /// Block events in row-major order
    pub blocks: Vec<BlockPlacement>,
}

/// Walks a logical grid over an image and classifies each cell
#[derive(Debug, Clone)]
pub struct GridSampler {
    classifier: ColorClassifier,
    block_spacing: f32,
}

impl GridSampler {
    /// Create a sampler with the given classifier and block spacing
    pub const fn new(classifier: ColorClassifier, block_spacing: f32) -> Self {
        Self {
            classifier,
            block_spacing,
        }
    }

    /// Classifier used for every cell
    pub const fn classifier(&self) -> &ColorClassifier {
        &self.classifier
    }

    /// Sample a `grid_width x grid_height` grid over `image`
    ///
    /// # Errors
    ///
    /// Returns an error if either grid dimension or either image dimension is
    /// zero, or if the block spacing is not finite
    pub fn sample<S: PixelSurface + ?Sized>(
        &self,
        image: &S,
        grid_width: usize,
        grid_height: usize,
    ) -> Result<SampleReport> {
        validate_dimensions(image, grid_width, grid_height)?;
        if !self.block_spacing.is_finite() {
            return Err(invalid_parameter(
                "block_spacing",
                &self.block_spacing,
                &"must be finite",
            ));
        }

        let geometry = BoardGeometry::new(grid_width, grid_height, self.block_spacing);
        let step_x = image.width() as f64 / grid_width as f64;
        let step_y = image.height() as f64 / grid_height as f64;

        let mut report = SampleReport::default();

        for i in 0..grid_height {
            for j in 0..grid_width {
                let x = step_x.mul_add(j as f64, step_x / 2.0).floor() as usize;
                let y = step_y.mul_add(i as f64, step_y / 2.0).floor() as usize;

                let Some(label) = self.classifier.classify(&image.pixel(x, y)) else {
                    continue;
                };

                report.totals.increment(label);
                if is_border(i, j, grid_width, grid_height) {
                    report.edge_totals.increment(label);
                }

                let (block_x, block_y) = geometry.position(j, i);
                report.blocks.push(BlockPlacement {
                    label: label.to_string(),
                    row: i,
                    col: j,
                    x: block_x,
                    y: block_y,
                });
            }
        }

        debug!(
            "Sampled {grid_width}x{grid_height} grid: {} matched cells across {} colors, {} on the border",
            report.totals.total(),
            report.totals.len(),
            report.edge_totals.total()
        );

        Ok(report)
    }
}

/// Whether cell `(i, j)` lies on the outer ring of the grid
pub const fn is_border(i: usize, j: usize, grid_width: usize, grid_height: usize) -> bool {
    i == 0 || i + 1 == grid_height || j == 0 || j + 1 == grid_width
}

fn validate_dimensions<S: PixelSurface + ?Sized>(
    image: &S,
    grid_width: usize,
    grid_height: usize,
) -> Result<()> {
    if grid_width == 0 {
        return Err(invalid_parameter(
            "grid_width",
            &grid_width,
            &"grid must have at least one column",
        ));
    }
    if grid_height == 0 {
        return Err(invalid_parameter(
            "grid_height",
            &grid_height,
            &"grid must have at least one row",
        ));
    }
    if image.width() == 0 || image.height() == 0 {
        return Err(invalid_parameter(
            "image",
            &format!("{}x{}", image.width(), image.height()),
            &"image must contain at least one pixel",
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/sampling/grid.rs"]
mod unit_tests;
