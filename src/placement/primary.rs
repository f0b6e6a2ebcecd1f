//! Primary color selection and its priority placement loop
//!
//! The primary color is the one most present along the board's border. Its
//! units are placed first, one at a time, walking down the matrix in random
//! steps whose size and starting depth scale with difficulty.

use crate::budget::UnitId;
use crate::placement::matrix::SlotMatrix;
use crate::placement::random::RandomSource;
use crate::placement::strategy::{PlacementStrategy, Slot, next_row};
use crate::sampling::ColorStat;
use log::debug;

/// Label with the strictly greatest edge count
///
/// The first label to reach a new maximum wins ties. Returns `None` when no
/// edge cells were classified.
pub fn select_primary(edge_totals: &ColorStat) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for (label, count) in edge_totals.iter() {
        if count == 0 {
            continue;
        }
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label.to_string())
}

/// Outcome of placing a single unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementAttempt {
    /// Placed at the slot by the named strategy
    Placed {
        /// Slot the unit now occupies
        slot: Slot,
        /// Strategy that found the slot
        strategy: PlacementStrategy,
    },
    /// No strategy found a vacant slot
    Dropped,
}

/// Walks primary units down the matrix
#[derive(Debug, Clone)]
pub struct PrimaryPlacer<'a> {
    difficulty: f64,
    strategies: &'a [PlacementStrategy],
}

impl<'a> PrimaryPlacer<'a> {
    /// Create a placer for a difficulty in [0, 1] with a fallback chain
    pub const fn new(difficulty: f64, strategies: &'a [PlacementStrategy]) -> Self {
        Self {
            difficulty,
            strategies,
        }
    }

    /// Upper bound (exclusive) for a random row step
    pub fn step_limit(&self) -> usize {
        (3.0 * self.difficulty).ceil() as usize
    }

    /// Rows past which the walk restarts near the top
    pub const fn max_distance(rows: usize) -> usize {
        rows / 2 + 1
    }

    /// Place `units` in order, returning one attempt per unit
    pub fn place<R: RandomSource + ?Sized>(
        &self,
        matrix: &mut SlotMatrix,
        units: &[UnitId],
        rng: &mut R,
    ) -> Vec<(UnitId, PlacementAttempt)> {
        let rows = matrix.rows();
        let columns = matrix.columns();
        let total = units.len();
        let max_distance = Self::max_distance(rows);
        let step_limit = self.step_limit();
        let mut last_row = 0;
        let mut attempts = Vec::with_capacity(total);

        for (n, &unit) in units.iter().enumerate() {
            if rows == 0 {
                attempts.push((unit, PlacementAttempt::Dropped));
                continue;
            }

            let col = rng.next_int(0, columns);
            let step = rng.next_int(1 + n / total, step_limit);

            let mut row = if n == 0 || last_row >= max_distance {
                (self.difficulty * rng.next_int(0, max_distance) as f64).floor() as usize
            } else {
                last_row + step
            };
            if row >= rows {
                row = rows - 1;
            }

            let candidate = Slot::new(col, row);
            let attempt = self.place_one(matrix, unit, candidate, rng);

            last_row = match attempt {
                PlacementAttempt::Placed { slot, .. } => slot.row,
                PlacementAttempt::Dropped => next_row(row, rows),
            };
            attempts.push((unit, attempt));
        }

        attempts
    }

    fn place_one<R: RandomSource + ?Sized>(
        &self,
        matrix: &mut SlotMatrix,
        unit: UnitId,
        candidate: Slot,
        rng: &mut R,
    ) -> PlacementAttempt {
        for &strategy in self.strategies {
            let Some(slot) = strategy.attempt(matrix, candidate, rng) else {
                continue;
            };
            if matrix.place(slot.col, slot.row, unit) {
                if strategy != PlacementStrategy::Direct {
                    debug!(
                        "Primary unit {unit} moved from ({}, {}) to ({}, {}) by {}",
                        candidate.col,
                        candidate.row,
                        slot.col,
                        slot.row,
                        strategy.name()
                    );
                }
                return PlacementAttempt::Placed { slot, strategy };
            }
        }
        PlacementAttempt::Dropped
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/primary.rs"]
mod unit_tests;
