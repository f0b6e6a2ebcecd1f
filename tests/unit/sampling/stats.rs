//! Tests for ordered label tallies

#[cfg(test)]
mod tests {
    use crate::sampling::stats::ColorStat;

    // Tests labels iterate in first-seen order
    // Verified by sorting labels on insertion
    #[test]
    fn test_iteration_follows_first_seen_order() {
        let mut stat = ColorStat::new();
        stat.increment("yellow");
        stat.increment("blue");
        stat.increment("yellow");
        stat.increment("azure");

        let pairs: Vec<_> = stat.iter().collect();
        assert_eq!(pairs, vec![("yellow", 2), ("blue", 1), ("azure", 1)]);
    }

    #[test]
    fn test_totals_and_lookup() {
        let mut stat = ColorStat::default();
        assert!(stat.is_empty());
        assert_eq!(stat.get("red"), 0);

        for _ in 0..5 {
            stat.increment("red");
        }
        stat.increment("black");

        assert_eq!(stat.get("red"), 5);
        assert_eq!(stat.len(), 2);
        assert_eq!(stat.total(), 6);
    }

    #[test]
    fn test_from_iterator_merges_duplicates() {
        let stat: ColorStat = [("red", 3), ("blue", 1), ("red", 2)].into_iter().collect();
        assert_eq!(stat.get("red"), 5);
        assert_eq!(stat.iter().map(|(l, _)| l).collect::<Vec<_>>(), vec!["red", "blue"]);
    }
}
