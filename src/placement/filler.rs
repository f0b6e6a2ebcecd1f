//! Shuffled filler placement into the slots left by the primary pass

use crate::budget::UnitId;
use crate::placement::matrix::SlotMatrix;
use crate::placement::random::{RandomSource, shuffle};
use crate::placement::strategy::Slot;

/// Shuffle `fillers` and drop them into vacant slots in row-major order
///
/// Returns the placements made and the units left over once the matrix is
/// full. Occupied slots are never touched.
pub fn fill_remaining<R: RandomSource + ?Sized>(
    matrix: &mut SlotMatrix,
    mut fillers: Vec<UnitId>,
    rng: &mut R,
) -> (Vec<(UnitId, Slot)>, Vec<UnitId>) {
    shuffle(&mut fillers, rng);

    let vacant: Vec<(usize, usize)> = matrix.vacant_slots().collect();
    let mut queue = fillers.into_iter();
    let mut placed = Vec::new();
    let mut leftover = Vec::new();

    for (col, row) in vacant {
        let Some(unit) = queue.next() else {
            break;
        };
        if matrix.place(col, row, unit) {
            placed.push((unit, Slot::new(col, row)));
        } else {
            leftover.push(unit);
        }
    }

    leftover.extend(queue);
    (placed, leftover)
}

#[cfg(test)]
#[path = "../../tests/unit/placement/filler.rs"]
mod unit_tests;
