//! Column by row slot grid owned by one placement pass

use crate::budget::UnitId;
use ndarray::Array2;

/// Fixed-size grid of placement slots, each holding at most one unit
///
/// Indexed as `(col, row)`; scans are row-major with columns ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotMatrix {
    slots: Array2<Option<UnitId>>,
}

impl SlotMatrix {
    /// Create an empty matrix of `columns x rows` slots
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            slots: Array2::from_elem((columns, rows), None),
        }
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.slots.dim().0
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.slots.dim().1
    }

    /// Total slot count
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Unit at `(col, row)`, `None` if empty or out of bounds
    pub fn get(&self, col: usize, row: usize) -> Option<UnitId> {
        self.slots.get([col, row]).copied().flatten()
    }

    /// Whether `(col, row)` exists and holds no unit
    pub fn is_vacant(&self, col: usize, row: usize) -> bool {
        matches!(self.slots.get([col, row]), Some(None))
    }

    /// Put `unit` into a vacant slot
    ///
    /// Returns false and leaves the matrix untouched if the slot is occupied
    /// or out of bounds.
    pub fn place(&mut self, col: usize, row: usize, unit: UnitId) -> bool {
        match self.slots.get_mut([col, row]) {
            Some(slot) if slot.is_none() => {
                *slot = Some(unit);
                true
            }
            _ => false,
        }
    }

    /// First vacant column in `row`, scanning left to right
    pub fn first_vacant_in_row(&self, row: usize) -> Option<usize> {
        (0..self.columns()).find(|&col| self.is_vacant(col, row))
    }

    /// Vacant slots in row-major order
    pub fn vacant_slots(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows()).flat_map(move |row| {
            (0..self.columns())
                .filter(move |&col| self.is_vacant(col, row))
                .map(move |col| (col, row))
        })
    }

    /// Occupied slots as `(unit, col, row)` in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (UnitId, usize, usize)> + '_ {
        (0..self.rows()).flat_map(move |row| {
            (0..self.columns())
                .filter_map(move |col| self.get(col, row).map(|unit| (unit, col, row)))
        })
    }

    /// Number of occupied slots
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Highest row index holding at least one unit
    pub fn last_active_row(&self) -> Option<usize> {
        (0..self.rows())
            .rev()
            .find(|&row| (0..self.columns()).any(|col| self.get(col, row).is_some()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/matrix.rs"]
mod unit_tests;
