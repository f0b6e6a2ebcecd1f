//! Slot matrix placement for one generation pass
//!
//! Primary units go first through the priority walk, then every other color
//! is shuffled into whatever slots remain. Units that find no slot are
//! reported back rather than discarded.

use crate::budget::UnitId;
use crate::io::error::{Result, invalid_parameter};
use crate::placement::filler::fill_remaining;
use crate::placement::matrix::SlotMatrix;
use crate::placement::primary::{PlacementAttempt, PrimaryPlacer};
use crate::placement::random::RandomSource;
use crate::placement::strategy::PlacementStrategy;
use log::{debug, warn};

/// A unit committed to a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedUnit {
    /// The unit placed
    pub unit: UnitId,
    /// Column index
    pub col: usize,
    /// Row index
    pub row: usize,
}

/// Result of a placement pass
#[derive(Debug, Clone)]
pub struct PlacementOutcome {
    /// Final slot assignments
    pub matrix: SlotMatrix,
    /// Placements in the order they were made
    pub placed: Vec<PlacedUnit>,
    /// Units that found no vacant slot
    pub dropped: Vec<UnitId>,
}

impl PlacementOutcome {
    /// Number of units placed
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }

    /// Number of units left unplaced
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }
}

/// Packs units into a `columns x rows` slot matrix
#[derive(Debug, Clone)]
pub struct PlacementEngine {
    columns: usize,
    difficulty: f64,
    strategies: Vec<PlacementStrategy>,
}

impl PlacementEngine {
    /// Create an engine using the default fallback chain
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `columns` is zero
    /// - `difficulty` is NaN or outside [0, 1]
    pub fn new(columns: usize, difficulty: f64) -> Result<Self> {
        if columns == 0 {
            return Err(invalid_parameter(
                "columns",
                &columns,
                &"slot matrix needs at least one column",
            ));
        }
        if !(0.0..=1.0).contains(&difficulty) {
            return Err(invalid_parameter(
                "difficulty",
                &difficulty,
                &"must lie within [0, 1]",
            ));
        }

        Ok(Self {
            columns,
            difficulty,
            strategies: PlacementStrategy::default_chain().to_vec(),
        })
    }

    /// Replace the fallback chain used for primary units
    #[must_use]
    pub fn with_strategies(mut self, strategies: Vec<PlacementStrategy>) -> Self {
        self.strategies = strategies;
        self
    }

    /// Column count
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Difficulty in [0, 1]
    pub const fn difficulty(&self) -> f64 {
        self.difficulty
    }

    /// Fallback chain in the order it is tried
    pub fn strategies(&self) -> &[PlacementStrategy] {
        &self.strategies
    }

    /// Place primary units by priority, then shuffled fillers, into `rows` rows
    pub fn place<R: RandomSource + ?Sized>(
        &self,
        primary: &[UnitId],
        fillers: Vec<UnitId>,
        rows: usize,
        rng: &mut R,
    ) -> PlacementOutcome {
        let mut matrix = SlotMatrix::new(self.columns, rows);
        let mut placed = Vec::with_capacity(primary.len() + fillers.len());
        let mut dropped = Vec::new();

        let placer = PrimaryPlacer::new(self.difficulty, &self.strategies);
        for (unit, attempt) in placer.place(&mut matrix, primary, rng) {
            match attempt {
                PlacementAttempt::Placed { slot, .. } => placed.push(PlacedUnit {
                    unit,
                    col: slot.col,
                    row: slot.row,
                }),
                PlacementAttempt::Dropped => dropped.push(unit),
            }
        }

        let (filled, leftover) = fill_remaining(&mut matrix, fillers, rng);
        placed.extend(filled.into_iter().map(|(unit, slot)| PlacedUnit {
            unit,
            col: slot.col,
            row: slot.row,
        }));
        dropped.extend(leftover);

        debug!(
            "Placed {} units into {}x{} matrix",
            placed.len(),
            self.columns,
            rows
        );
        if !dropped.is_empty() {
            warn!(
                "{} units did not fit into the {}x{} slot matrix",
                dropped.len(),
                self.columns,
                rows
            );
        }

        PlacementOutcome {
            matrix,
            placed,
            dropped,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/engine.rs"]
mod unit_tests;
