//! Tests for PNG loading and board preview export

#[cfg(test)]
mod tests {
    use crate::io::configuration::PREVIEW_SLOT_PIXELS;
    use crate::io::error::GenerationError;
    use crate::io::image::{color_to_bytes, export_layout_png, load_png, render_layout};
    use crate::palette::Palette;
    use crate::pipeline::{Generation, GenerationConfig, LevelGenerator};
    use crate::placement::{ColumnPolicy, SeededRandom};
    use crate::sampling::surface::SolidSurface;
    use image::{Rgba, RgbaImage};
    use std::path::Path;

    fn red_generation() -> Generation {
        let config = GenerationConfig {
            column_policy: ColumnPolicy::Fixed(2),
            ..GenerationConfig::default()
        };
        let surface = SolidSurface {
            width: 20,
            height: 20,
            color: [0.82, 0.14, 0.13, 1.0],
        };
        let Ok(generator) = LevelGenerator::new(Palette::default(), config) else {
            unreachable!("valid generator configuration");
        };
        let Ok(generation) = generator.generate(&surface, &mut SeededRandom::new(5)) else {
            unreachable!("solid image generates");
        };
        generation
    }

    #[test]
    fn test_color_to_bytes() {
        assert_eq!(color_to_bytes(&[1.0, 0.0, 0.5, 1.0]), [255, 0, 128, 255]);
        assert_eq!(color_to_bytes(&[2.0, -1.0, 0.0, 0.0]), [255, 0, 0, 0]);
    }

    // Tests the preview is cropped to occupied rows and colored per unit
    // Verified by sizing the preview from the full row count
    #[test]
    fn test_render_layout_dimensions_and_colors() {
        let generation = red_generation();
        let Ok(img) = render_layout(&generation, &Palette::default()) else {
            unreachable!("placed units render");
        };

        let rows = generation.last_active_row as u32 + 1;
        assert_eq!(img.width(), 2 * PREVIEW_SLOT_PIXELS);
        assert_eq!(img.height(), rows * PREVIEW_SLOT_PIXELS);

        let red = Rgba(color_to_bytes(&[0.82, 0.14, 0.13, 1.0]));
        for placed in &generation.placed {
            let x = placed.col as u32 * PREVIEW_SLOT_PIXELS;
            let y = placed.row as u32 * PREVIEW_SLOT_PIXELS;
            assert_eq!(img.get_pixel_checked(x, y), Some(&red));
        }
    }

    #[test]
    fn test_render_layout_requires_units() {
        let mut generation = red_generation();
        generation.placed.clear();
        assert!(matches!(
            render_layout(&generation, &Palette::default()),
            Err(GenerationError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_export_and_reload() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory available");
        };
        let output = dir.path().join("nested").join("level_board.png");
        let generation = red_generation();

        assert!(export_layout_png(&generation, &Palette::default(), &output).is_ok());
        assert!(output.exists());

        let Ok(reloaded) = load_png(&output) else {
            unreachable!("exported preview reloads");
        };
        assert_eq!(reloaded.width(), 2 * PREVIEW_SLOT_PIXELS);
    }

    #[test]
    fn test_load_roundtrips_pixels() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("temporary directory available");
        };
        let path = dir.path().join("source.png");
        let img = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255]));
        assert!(img.save(&path).is_ok());

        let Ok(loaded) = load_png(&path) else {
            unreachable!("saved image loads");
        };
        assert_eq!(loaded.dimensions(), (3, 2));
        assert_eq!(loaded.get_pixel_checked(2, 1), Some(&Rgba([10, 20, 30, 255])));
    }

    // Tests load failures carry the offending path
    // Verified by leaving the placeholder path in place
    #[test]
    fn test_load_missing_file_reports_path() {
        let path = Path::new("does/not/exist.png");
        match load_png(path) {
            Err(GenerationError::ImageLoad { path: reported, .. }) => {
                assert_eq!(reported, path);
            }
            other => unreachable!("expected ImageLoad error, got {other:?}"),
        }
    }
}
