//! Tests for palette construction and validation

#[cfg(test)]
mod tests {
    use crate::io::error::GenerationError;
    use crate::palette::entries::{Palette, PaletteEntry};

    // Tests duplicate labels are rejected
    // Verified by removing the duplicate check
    #[test]
    fn test_duplicate_labels_rejected() {
        let result = Palette::new(
            vec![
                PaletteEntry::opaque("red", 1.0, 0.0, 0.0),
                PaletteEntry::opaque("red", 0.9, 0.1, 0.1),
            ],
            0.75,
        );

        assert!(matches!(result, Err(GenerationError::InvalidPalette { .. })));
    }

    #[test]
    fn test_empty_palette_and_label_rejected() {
        assert!(Palette::new(Vec::new(), 0.75).is_err());
        assert!(Palette::new(vec![PaletteEntry::opaque("", 0.0, 0.0, 0.0)], 0.75).is_err());
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let entries = vec![PaletteEntry::opaque("red", 1.0, 0.0, 0.0)];
        assert!(Palette::new(entries.clone(), f32::NAN).is_err());
        assert!(Palette::new(entries, -0.1).is_err());
        assert!(
            Palette::new(
                vec![PaletteEntry::new("odd", [f32::INFINITY, 0.0, 0.0, 1.0])],
                0.75
            )
            .is_err()
        );
    }

    // Tests the default palette has ten unique opaque entries
    // Verified by duplicating an entry in the default set
    #[test]
    fn test_default_palette_is_valid() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 10);
        assert!(!palette.is_empty());
        assert!(Palette::new(palette.entries().to_vec(), palette.tolerance()).is_ok());
        assert!(palette.entries().iter().all(|e| (e.color[3] - 1.0).abs() < f32::EPSILON));
        assert_eq!(palette.entries().first().map(|e| e.label.as_str()), Some("red"));
    }

    #[test]
    fn test_color_of_lookup() {
        let palette = Palette::default();
        assert_eq!(palette.color_of("black"), Some([0.25, 0.27, 0.29, 1.0]));
        assert_eq!(palette.color_of("purple"), None);
    }
}
