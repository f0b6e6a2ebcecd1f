//! Tests for generation constants

#[cfg(test)]
mod tests {
    use crate::io::configuration::{
        BULLET_INCREMENT, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TOLERANCE,
        HIGH_TIER_TARGET, HIGH_TIER_THRESHOLD, LOW_TIER_TARGET, MAX_BULLETS_PER_UNIT,
        MID_TIER_TARGET, MID_TIER_THRESHOLD, PLACEMENT_RETRIES,
    };

    // Tests per-unit targets never exceed the hard unit cap
    // Verified by raising the high tier target above the cap
    #[test]
    fn test_tier_targets_within_cap() {
        for target in [HIGH_TIER_TARGET, MID_TIER_TARGET, LOW_TIER_TARGET] {
            assert!(target <= MAX_BULLETS_PER_UNIT);
            assert_eq!(target % BULLET_INCREMENT, 0);
        }
    }

    // Tests tier thresholds are ordered
    // Verified by swapping threshold values
    #[test]
    fn test_tier_thresholds_ordered() {
        assert!(MID_TIER_THRESHOLD < HIGH_TIER_THRESHOLD);
        assert_eq!(MID_TIER_THRESHOLD, 100);
        assert_eq!(HIGH_TIER_THRESHOLD, 350);
    }

    #[test]
    fn test_classification_and_retry_defaults() {
        assert!((DEFAULT_TOLERANCE - 0.75).abs() < f32::EPSILON);
        assert_eq!(PLACEMENT_RETRIES, 10);
        assert_eq!((DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT), (20, 20));
    }
}
