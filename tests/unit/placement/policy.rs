//! Tests for column and row count policies

#[cfg(test)]
mod tests {
    use crate::placement::policy::{
        ColumnPolicy, RowPolicy, columns_for_difficulty, columns_for_level, difficulty_for_level,
    };
    use crate::placement::random::{SeededRandom, SequenceRandom};

    #[test]
    fn test_row_policies() {
        assert_eq!(RowPolicy::Overallocated.rows(13, 4), 13);
        assert_eq!(RowPolicy::Computed.rows(13, 4), 4);
        assert_eq!(RowPolicy::Computed.rows(12, 4), 3);
        assert_eq!(RowPolicy::Computed.rows(0, 4), 0);
        assert_eq!(RowPolicy::default(), RowPolicy::Overallocated);
    }

    // Tests difficulty maps to five columns at zero and two at one
    // Verified by rounding halves away from zero
    #[test]
    fn test_columns_for_difficulty() {
        assert_eq!(columns_for_difficulty(0.0), 5);
        assert_eq!(columns_for_difficulty(1.0), 2);
        assert_eq!(columns_for_difficulty(0.5), 4);
        assert_eq!(columns_for_difficulty(1.0 / 6.0), 4);
        assert_eq!(columns_for_difficulty(7.0), 2);
        assert_eq!(columns_for_difficulty(f64::NAN), 5);
    }

    // Tests level tiers map random draws onto column counts
    // Verified by shifting the first tier boundary
    #[test]
    fn test_columns_for_level_tiers() {
        let draw = |level: u32, chance: usize| {
            columns_for_level(level, &mut SequenceRandom::new(vec![chance]))
        };

        assert_eq!(draw(1, 19), 2);
        assert_eq!(draw(15, 20), 3);
        assert_eq!(draw(15, 90), 4);
        assert_eq!(draw(16, 46), 3);
        assert_eq!(draw(30, 47), 4);
        assert_eq!(draw(31, 9), 3);
        assert_eq!(draw(80, 74), 4);
        assert_eq!(draw(80, 75), 5);
    }

    #[test]
    fn test_column_policy_resolution() {
        let mut rng = SeededRandom::new(3);
        assert_eq!(ColumnPolicy::Fixed(3).columns(0.0, &mut rng).ok(), Some(3));
        assert!(ColumnPolicy::Fixed(0).columns(0.0, &mut rng).is_err());
        assert_eq!(ColumnPolicy::FromDifficulty.columns(1.0, &mut rng).ok(), Some(2));

        let level = ColumnPolicy::FromLevel(50).columns(0.5, &mut rng).unwrap_or(0);
        assert!((3..=5).contains(&level));
    }

    #[test]
    fn test_difficulty_for_level() {
        assert!(difficulty_for_level(0).abs() < f64::EPSILON);
        assert!((difficulty_for_level(25) - 0.25).abs() < f64::EPSILON);
        assert!((difficulty_for_level(250) - 1.0).abs() < f64::EPSILON);
    }
}
