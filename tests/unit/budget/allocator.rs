//! Tests for tiered budget allocation

#[cfg(test)]
mod tests {
    use crate::budget::allocator::{
        allocate, allocate_all, round_budget, split_budget, target_per_unit, unit_count,
    };
    use crate::sampling::ColorStat;

    fn bullets(label: &str, count: usize) -> Vec<usize> {
        allocate(label, count).into_iter().map(|q| q.bullets).collect()
    }

    #[test]
    fn test_round_budget() {
        assert_eq!(round_budget(0), 0);
        assert_eq!(round_budget(1), 10);
        assert_eq!(round_budget(10), 10);
        assert_eq!(round_budget(15), 20);
        assert_eq!(round_budget(400), 400);
    }

    // Tests tier boundaries are inclusive at 100 and 350
    // Verified by switching the middle threshold to a strict comparison
    #[test]
    fn test_tier_boundaries_inclusive() {
        assert_eq!(target_per_unit(90), 20);
        assert_eq!(target_per_unit(100), 40);
        assert_eq!(target_per_unit(340), 40);
        assert_eq!(target_per_unit(350), 50);
        assert_eq!(unit_count(100), 3);
    }

    // Tests a solid 400-cell color becomes eight full units
    // Verified by using the middle tier for large budgets
    #[test]
    fn test_four_hundred_cells() {
        assert_eq!(bullets("red", 400), vec![50; 8]);
    }

    #[test]
    fn test_fifteen_cells_single_unit() {
        let quotas = allocate("green", 15);
        assert_eq!(quotas.len(), 1);
        assert_eq!(quotas.first().map(|q| (q.label.as_str(), q.bullets)), Some(("green", 20)));
    }

    // Tests leftover increments go to the front of the sequence
    // Verified by giving extras to the back of the sequence
    #[test]
    fn test_extra_increments_at_front() {
        // 130 bullets, target 40 -> 4 units, base 30, one extra
        assert_eq!(bullets("blue", 125), vec![40, 30, 30, 30]);
        // 60 bullets, target 20 -> 3 units of 20
        assert_eq!(bullets("blue", 53), vec![20, 20, 20]);
        // 70 bullets, target 20 -> 4 units, base 10, three extras
        assert_eq!(bullets("blue", 70), vec![20, 20, 20, 10]);
    }

    #[test]
    fn test_zero_cells_produce_nothing() {
        assert!(allocate("red", 0).is_empty());
    }

    // Tests conservation and cap for every count up to 2000
    // Verified by dropping the extra increments
    #[test]
    fn test_budget_conservation_and_cap() {
        for count in 1..=2000 {
            let quotas = allocate("x", count);
            let sum: usize = quotas.iter().map(|q| q.bullets).sum();
            assert_eq!(sum, round_budget(count), "count {count}");
            assert!(!quotas.is_empty());
            assert!(
                quotas
                    .iter()
                    .all(|q| q.bullets > 0 && q.bullets <= 50 && q.bullets % 10 == 0),
                "count {count}"
            );
        }
    }

    // Tests degenerate splits are floored to one increment
    // Verified by removing the zero-chunk guard
    #[test]
    fn test_split_budget_floors_zero_chunk() {
        let quotas = split_budget("pink", 20, 3);
        let values: Vec<usize> = quotas.iter().map(|q| q.bullets).collect();
        assert_eq!(values, vec![10, 10, 10]);
        assert!(split_budget("pink", 20, 0).is_empty());
        assert!(split_budget("pink", 0, 3).is_empty());
    }

    #[test]
    fn test_allocate_all_keeps_stat_order() {
        let totals: ColorStat = [("white", 30), ("black", 400), ("red", 0)]
            .into_iter()
            .collect();

        let set = allocate_all(&totals);
        let labels: Vec<&str> = set.groups().map(|(label, _)| label).collect();

        assert_eq!(labels, vec!["white", "black"]);
        assert_eq!(set.units_of("black").len(), 8);
        assert_eq!(set.bullets_of("white"), 30);
        assert_eq!(set.total_units(), 10);
    }
}
