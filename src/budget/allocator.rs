//! Conversion of per-color cell counts into bullet-carrying units
//!
//! A color's cell count is rounded up to the next multiple of ten to form its
//! bullet budget. The budget picks a per-unit target by tier, which fixes
//! how many units are generated; the budget is then split as evenly as
//! possible in multiples of ten, with leftover increments going to the front
//! of the sequence.

use crate::budget::units::{ColorUnitSet, UnitQuota};
use crate::io::configuration::{
    BULLET_INCREMENT, HIGH_TIER_TARGET, HIGH_TIER_THRESHOLD, LOW_TIER_TARGET,
    MAX_BULLETS_PER_UNIT, MID_TIER_TARGET, MID_TIER_THRESHOLD,
};
use crate::sampling::ColorStat;
use log::debug;

/// Round a cell count up to the next bullet increment
pub const fn round_budget(cell_count: usize) -> usize {
    cell_count.div_ceil(BULLET_INCREMENT) * BULLET_INCREMENT
}

/// Per-unit target for a rounded budget
///
/// Both thresholds are inclusive: a budget of exactly 100 already uses the
/// middle tier, and exactly 350 the high tier.
pub const fn target_per_unit(rounded_total: usize) -> usize {
    if rounded_total >= HIGH_TIER_THRESHOLD {
        HIGH_TIER_TARGET
    } else if rounded_total >= MID_TIER_THRESHOLD {
        MID_TIER_TARGET
    } else {
        LOW_TIER_TARGET
    }
}

/// Number of units a rounded budget is split into
///
/// Never fewer than needed to keep every unit at or under the hard cap.
pub const fn unit_count(rounded_total: usize) -> usize {
    let by_target = rounded_total.div_ceil(target_per_unit(rounded_total));
    let by_cap = rounded_total.div_ceil(MAX_BULLETS_PER_UNIT);
    if by_target > by_cap { by_target } else { by_cap }
}

/// Split `rounded_total` bullets across exactly `count` units
///
/// Each unit gets the same base chunk (a multiple of ten) and the first
/// units absorb one extra increment each until the budget is spent. A base
/// chunk that would round down to zero is raised to one increment, in which
/// case the split may exceed `rounded_total`.
pub fn split_budget(label: &str, rounded_total: usize, count: usize) -> Vec<UnitQuota> {
    if rounded_total == 0 || count == 0 {
        return Vec::new();
    }

    let mut base_chunk = rounded_total / count / BULLET_INCREMENT * BULLET_INCREMENT;
    if base_chunk == 0 {
        base_chunk = BULLET_INCREMENT;
    }
    let extra_units = rounded_total.saturating_sub(base_chunk * count) / BULLET_INCREMENT;

    (0..count)
        .map(|i| {
            let bullets = if i < extra_units {
                base_chunk + BULLET_INCREMENT
            } else {
                base_chunk
            };
            UnitQuota::new(label, bullets)
        })
        .collect()
}

/// Turn one color's cell count into its unit quotas
///
/// Returns an empty sequence for a zero count. Otherwise the quotas sum to
/// exactly [`round_budget`] of the count and none exceeds the unit cap.
pub fn allocate(label: &str, cell_count: usize) -> Vec<UnitQuota> {
    let rounded_total = round_budget(cell_count);
    if rounded_total == 0 {
        return Vec::new();
    }

    let quotas = split_budget(label, rounded_total, unit_count(rounded_total));
    debug!(
        "Allocated {rounded_total} bullets for '{label}' across {} units",
        quotas.len()
    );
    quotas
}

/// Allocate units for every color in `totals`, preserving its order
pub fn allocate_all(totals: &ColorStat) -> ColorUnitSet {
    let mut set = ColorUnitSet::new();
    for (label, count) in totals.iter() {
        let quotas = allocate(label, count);
        if !quotas.is_empty() {
            set.insert(label, quotas);
        }
    }
    set
}

#[cfg(test)]
#[path = "../../tests/unit/budget/allocator.rs"]
mod unit_tests;
