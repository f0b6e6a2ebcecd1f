//! Tests for generation configuration defaults and validation

#[cfg(test)]
mod tests {
    use crate::io::error::GenerationError;
    use crate::pipeline::config::GenerationConfig;
    use crate::placement::{ColumnPolicy, RowPolicy};

    #[test]
    fn test_default_is_valid() {
        let config = GenerationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 20);
        assert_eq!(config.column_policy, ColumnPolicy::FromDifficulty);
        assert_eq!(config.row_policy, RowPolicy::Overallocated);
        assert!(!config.pad_primary);
    }

    // Tests empty grids are refused before sampling
    // Verified by letting a zero width through to the sampler
    #[test]
    fn test_zero_grid_rejected() {
        let config = GenerationConfig {
            grid_width: 0,
            ..GenerationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GenerationError::InvalidParameter {
                parameter: "grid_width",
                ..
            })
        ));

        let config = GenerationConfig {
            grid_height: 0,
            ..GenerationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_difficulty_range() {
        for difficulty in [-0.01, 1.01, f64::NAN] {
            let config = GenerationConfig {
                difficulty,
                ..GenerationConfig::default()
            };
            assert!(config.validate().is_err(), "difficulty {difficulty}");
        }
        for difficulty in [0.0, 1.0] {
            let config = GenerationConfig {
                difficulty,
                ..GenerationConfig::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_fixed_zero_columns_rejected() {
        let config = GenerationConfig {
            column_policy: ColumnPolicy::Fixed(0),
            ..GenerationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_spacing_rejected() {
        let config = GenerationConfig {
            unit_spacing_y: f32::INFINITY,
            ..GenerationConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(GenerationError::InvalidParameter {
                parameter: "unit_spacing_y",
                ..
            })
        ));

        let config = GenerationConfig {
            block_spacing: f32::NAN,
            ..GenerationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_for_level() {
        let config = GenerationConfig::for_level(25);
        assert!((config.difficulty - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.column_policy, ColumnPolicy::FromLevel(25));
        assert!(config.validate().is_ok());

        let config = GenerationConfig::for_level(500);
        assert!((config.difficulty - 1.0).abs() < f64::EPSILON);
    }
}
