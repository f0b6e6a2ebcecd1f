//! Named reference colors and the palette that owns them

use crate::io::configuration::DEFAULT_TOLERANCE;
use crate::io::error::{GenerationError, Result};
use std::collections::HashSet;

/// RGBA color with channels in [0, 1]
pub type Rgba = [f32; 4];

/// A named reference color
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    /// Unique color label, also used to key statistics and units
    pub label: String,
    /// Reference color compared against sampled pixels
    pub color: Rgba,
}

impl PaletteEntry {
    /// Create an entry from a label and RGBA color
    pub fn new(label: impl Into<String>, color: Rgba) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }

    /// Create an opaque entry from RGB channels
    pub fn opaque(label: impl Into<String>, r: f32, g: f32, b: f32) -> Self {
        Self::new(label, [r, g, b, 1.0])
    }
}

/// Ordered set of reference colors plus a matching tolerance
///
/// Declaration order doubles as tie-break priority: when two entries are
/// equally close to a sample, the earlier one wins.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    tolerance: f32,
}

impl Palette {
    /// Build a palette, rejecting empty or duplicate labels
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The entry list is empty
    /// - Any label is empty or appears more than once
    /// - Any channel or the tolerance is not finite, or the tolerance is negative
    pub fn new(entries: Vec<PaletteEntry>, tolerance: f32) -> Result<Self> {
        if entries.is_empty() {
            return Err(GenerationError::InvalidPalette {
                reason: "palette has no entries".to_string(),
            });
        }
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(GenerationError::InvalidPalette {
                reason: format!("tolerance {tolerance} must be finite and non-negative"),
            });
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.label.is_empty() {
                return Err(GenerationError::InvalidPalette {
                    reason: "palette labels must not be empty".to_string(),
                });
            }
            if !seen.insert(entry.label.as_str()) {
                return Err(GenerationError::InvalidPalette {
                    reason: format!("duplicate label '{}'", entry.label),
                });
            }
            if entry.color.iter().any(|c| !c.is_finite()) {
                return Err(GenerationError::InvalidPalette {
                    reason: format!("color for '{}' has a non-finite channel", entry.label),
                });
            }
        }

        Ok(Self { entries, tolerance })
    }

    /// Entries in declaration order
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Maximum distance accepted as a match
    pub const fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// Number of entries
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a validated palette
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the reference color for a label
    pub fn color_of(&self, label: &str) -> Option<Rgba> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.color)
    }
}

impl Default for Palette {
    /// The ten runtime block colors, ordered by match priority
    fn default() -> Self {
        Self {
            entries: vec![
                PaletteEntry::opaque("red", 0.82, 0.14, 0.13),
                PaletteEntry::opaque("green", 0.36, 0.96, 0.23),
                PaletteEntry::opaque("yellow", 0.98, 0.87, 0.24),
                PaletteEntry::opaque("orange", 0.95, 0.57, 0.14),
                PaletteEntry::opaque("black", 0.25, 0.27, 0.29),
                PaletteEntry::opaque("blue", 0.26, 0.95, 0.95),
                PaletteEntry::opaque("dark green", 0.12, 0.67, 0.09),
                PaletteEntry::opaque("dark pink", 0.945, 0.34, 0.71),
                PaletteEntry::opaque("white", 0.96, 0.99, 0.97),
                PaletteEntry::opaque("pink", 1.0, 0.77, 1.0),
            ],
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/entries.rs"]
mod unit_tests;
