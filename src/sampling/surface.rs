//! Pixel-sampleable image surfaces

use crate::palette::Rgba;
use crate::palette::classifier::bytes_to_color;
use image::RgbaImage;

/// Anything the grid sampler can read colors from
pub trait PixelSurface {
    /// Width in pixels
    fn width(&self) -> usize;

    /// Height in pixels
    fn height(&self) -> usize;

    /// Color at `(x, y)` with channels in [0, 1]
    ///
    /// The origin is the bottom-left pixel and `y` grows upward. Coordinates
    /// outside the surface clamp to the nearest edge pixel.
    fn pixel(&self, x: usize, y: usize) -> Rgba;
}

impl PixelSurface for RgbaImage {
    fn width(&self) -> usize {
        self.dimensions().0 as usize
    }

    fn height(&self) -> usize {
        self.dimensions().1 as usize
    }

    fn pixel(&self, x: usize, y: usize) -> Rgba {
        let (width, height) = self.dimensions();
        let max_x = width.saturating_sub(1);
        let max_y = height.saturating_sub(1);
        let x = (x as u32).min(max_x);
        // Image rows are stored top-down
        let y = max_y - (y as u32).min(max_y);
        self.get_pixel_checked(x, y)
            .map_or([0.0; 4], |pixel| bytes_to_color(pixel.0))
    }
}

/// Single-color surface, mostly useful for tests and benches
#[derive(Debug, Clone, Copy)]
pub struct SolidSurface {
    /// Width in pixels
    pub width: usize,
    /// Height in pixels
    pub height: usize,
    /// Color returned for every pixel
    pub color: Rgba,
}

impl PixelSurface for SolidSurface {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixel(&self, _x: usize, _y: usize) -> Rgba {
        self.color
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sampling/surface.rs"]
mod unit_tests;
