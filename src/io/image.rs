//! PNG loading and board preview export

use crate::io::configuration::PREVIEW_SLOT_PIXELS;
use crate::io::error::{GenerationError, Result, WithPath};
use crate::palette::{Palette, Rgba as PaletteColor};
use crate::pipeline::Generation;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Load an image file as 8-bit RGBA
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_png(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path).with_path(path)?;
    Ok(image.to_rgba8())
}

/// Convert a normalized palette color to 8-bit channels
pub fn color_to_bytes(color: &PaletteColor) -> [u8; 4] {
    color.map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8)
}

/// Render the occupied rows of the slot matrix
///
/// Each slot becomes a square block filled with its unit's palette color.
/// Vacant slots and labels missing from `palette` stay transparent.
///
/// # Errors
///
/// Returns an error if no unit was placed
pub fn render_layout(generation: &Generation, palette: &Palette) -> Result<RgbaImage> {
    if generation.placed.is_empty() || generation.columns == 0 {
        return Err(GenerationError::InvalidParameter {
            parameter: "generation",
            value: format!("{} placed units", generation.placed.len()),
            reason: "No units have been placed on the board".to_string(),
        });
    }

    let rows = generation.last_active_row + 1;
    let width = generation.columns as u32 * PREVIEW_SLOT_PIXELS;
    let height = rows as u32 * PREVIEW_SLOT_PIXELS;
    let mut img: RgbaImage = ImageBuffer::new(width, height);

    for placed in &generation.placed {
        if placed.row >= rows {
            continue;
        }
        let Some(color) = generation
            .unit(placed.unit)
            .and_then(|quota| palette.color_of(&quota.label))
        else {
            continue;
        };
        let pixel = Rgba(color_to_bytes(&color));

        let origin_x = placed.col as u32 * PREVIEW_SLOT_PIXELS;
        let origin_y = placed.row as u32 * PREVIEW_SLOT_PIXELS;
        for dy in 0..PREVIEW_SLOT_PIXELS {
            for dx in 0..PREVIEW_SLOT_PIXELS {
                if let Some(target) = img.get_pixel_mut_checked(origin_x + dx, origin_y + dy) {
                    *target = pixel;
                }
            }
        }
    }

    Ok(img)
}

/// Render the slot matrix and save it as a PNG
///
/// # Errors
///
/// Returns an error if:
/// - No unit was placed
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_layout_png(generation: &Generation, palette: &Palette, output_path: &Path) -> Result<()> {
    let img = render_layout(generation, palette)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

#[cfg(test)]
#[path = "../../tests/unit/io/image.rs"]
mod unit_tests;
