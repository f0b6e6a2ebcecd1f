//! Nearest-reference color classification

use crate::palette::entries::{Palette, Rgba};

/// Relative tolerance for treating two distances as equal
const DISTANCE_EPSILON: f32 = 1e-6;

/// Euclidean distance over all four RGBA channels
pub fn color_distance(a: &Rgba, b: &Rgba) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}

/// Maps sampled colors onto palette labels
#[derive(Debug, Clone, Default)]
pub struct ColorClassifier {
    palette: Palette,
}

impl ColorClassifier {
    /// Create a classifier over the given palette
    pub const fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Palette used for classification
    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Label of the nearest palette entry, or `None` if it lies beyond tolerance
    ///
    /// Near-equal distances resolve to the earliest declared entry.
    pub fn classify(&self, color: &Rgba) -> Option<&str> {
        let mut best: Option<(&str, f32)> = None;

        for entry in self.palette.entries() {
            let distance = color_distance(color, &entry.color);
            let closer = match best {
                None => true,
                Some((_, best_distance)) => {
                    distance < best_distance
                        && !approximately_equal(distance, best_distance)
                }
            };
            if closer {
                best = Some((entry.label.as_str(), distance));
            }
        }

        best.filter(|&(_, distance)| distance <= self.palette.tolerance())
            .map(|(label, _)| label)
    }

    /// Classify an 8-bit RGBA pixel
    pub fn classify_bytes(&self, pixel: [u8; 4]) -> Option<&str> {
        self.classify(&bytes_to_color(pixel))
    }
}

/// Convert 8-bit channels into the [0, 1] range
pub fn bytes_to_color(pixel: [u8; 4]) -> Rgba {
    pixel.map(|channel| f32::from(channel) / 255.0)
}

fn approximately_equal(a: f32, b: f32) -> bool {
    (a - b).abs() <= DISTANCE_EPSILON * a.abs().max(b.abs()).max(1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/palette/classifier.rs"]
mod unit_tests;
