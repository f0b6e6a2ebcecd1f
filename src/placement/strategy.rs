//! Ordered fallback strategies for placing a unit near a candidate slot
//!
//! Each strategy inspects the matrix and a candidate slot and proposes a
//! vacant slot without mutating anything. The engine tries strategies in
//! order and commits the first proposal.

use crate::io::configuration::PLACEMENT_RETRIES;
use crate::placement::matrix::SlotMatrix;
use crate::placement::random::RandomSource;

/// A `(col, row)` position in the slot matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    /// Column index
    pub col: usize,
    /// Row index
    pub row: usize,
}

impl Slot {
    /// Create a slot at `(col, row)`
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// One step of the placement fallback chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementStrategy {
    /// Use the candidate slot itself
    Direct,
    /// Draw random columns in the candidate row
    RandomRetry {
        /// Number of columns drawn before giving up
        attempts: usize,
    },
    /// First vacant column in the candidate row
    RowScan,
    /// First vacant column in the row below, clamped to the last row
    NextRowScan,
    /// First vacant slot anywhere, row-major from the candidate row with wrap-around
    MatrixScan,
}

impl PlacementStrategy {
    /// The default chain: direct hit, random retries, row scan, next-row scan, full scan
    pub const fn default_chain() -> [Self; 5] {
        [
            Self::Direct,
            Self::RandomRetry {
                attempts: PLACEMENT_RETRIES,
            },
            Self::RowScan,
            Self::NextRowScan,
            Self::MatrixScan,
        ]
    }

    /// Short name used in diagnostics
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::RandomRetry { .. } => "random retry",
            Self::RowScan => "row scan",
            Self::NextRowScan => "next row scan",
            Self::MatrixScan => "matrix scan",
        }
    }

    /// Propose a vacant slot for `candidate`, or `None` if this strategy finds none
    pub fn attempt<R: RandomSource + ?Sized>(
        &self,
        matrix: &SlotMatrix,
        candidate: Slot,
        rng: &mut R,
    ) -> Option<Slot> {
        match *self {
            Self::Direct => matrix
                .is_vacant(candidate.col, candidate.row)
                .then_some(candidate),
            Self::RandomRetry { attempts } => (0..attempts).find_map(|_| {
                let col = rng.next_int(0, matrix.columns());
                matrix
                    .is_vacant(col, candidate.row)
                    .then_some(Slot::new(col, candidate.row))
            }),
            Self::RowScan => matrix
                .first_vacant_in_row(candidate.row)
                .map(|col| Slot::new(col, candidate.row)),
            Self::NextRowScan => {
                let row = next_row(candidate.row, matrix.rows());
                matrix
                    .first_vacant_in_row(row)
                    .map(|col| Slot::new(col, row))
            }
            Self::MatrixScan => {
                let rows = matrix.rows();
                (0..rows)
                    .map(|offset| (candidate.row + offset) % rows)
                    .find_map(|row| {
                        matrix
                            .first_vacant_in_row(row)
                            .map(|col| Slot::new(col, row))
                    })
            }
        }
    }
}

/// Row below `row`, clamped to the last row of a `rows`-row matrix
pub const fn next_row(row: usize, rows: usize) -> usize {
    let next = row + 1;
    let last = rows.saturating_sub(1);
    if next > last { last } else { next }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/strategy.rs"]
mod unit_tests;
