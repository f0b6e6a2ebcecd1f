//! Column and row count policies for the slot matrix

use crate::io::configuration::MAX_LEVEL;
use crate::io::error::{Result, invalid_parameter};
use crate::placement::random::RandomSource;

/// How many rows the slot matrix gets for a given unit count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowPolicy {
    /// One row per unit, so randomized row advances can never run out of room
    #[default]
    Overallocated,
    /// Just enough rows to hold every unit: `ceil(total / columns)`
    Computed,
}

impl RowPolicy {
    /// Row count for `total_units` spread over `columns`
    ///
    /// `columns` must already be validated as non-zero.
    pub const fn rows(self, total_units: usize, columns: usize) -> usize {
        match self {
            Self::Overallocated => total_units,
            Self::Computed => {
                if columns == 0 {
                    total_units
                } else {
                    total_units.div_ceil(columns)
                }
            }
        }
    }
}

/// How the column count of the slot matrix is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnPolicy {
    /// A fixed column count
    Fixed(usize),
    /// `round(5 - 3 * difficulty)`, from five columns at 0 down to two at 1
    #[default]
    FromDifficulty,
    /// Tiered random draw based on the level number
    FromLevel(u32),
}

impl ColumnPolicy {
    /// Resolve the column count
    ///
    /// # Errors
    ///
    /// Returns an error if a fixed column count is zero
    pub fn columns<R: RandomSource + ?Sized>(self, difficulty: f64, rng: &mut R) -> Result<usize> {
        match self {
            Self::Fixed(columns) => {
                if columns == 0 {
                    Err(invalid_parameter(
                        "columns",
                        &columns,
                        &"slot matrix needs at least one column",
                    ))
                } else {
                    Ok(columns)
                }
            }
            Self::FromDifficulty => Ok(columns_for_difficulty(difficulty)),
            Self::FromLevel(level) => Ok(columns_for_level(level, rng)),
        }
    }
}

/// Column count for a difficulty in [0, 1], rounding halves to even
pub fn columns_for_difficulty(difficulty: f64) -> usize {
    let difficulty = if difficulty.is_nan() {
        0.0
    } else {
        difficulty.clamp(0.0, 1.0)
    };
    3.0_f64.mul_add(-difficulty, 5.0).round_ties_even() as usize
}

/// Random column count weighted by level tier
///
/// Early levels favour narrow matrices; late levels mostly draw four or
/// five columns.
pub fn columns_for_level<R: RandomSource + ?Sized>(level: u32, rng: &mut R) -> usize {
    let chance = rng.next_int(0, 100);
    if level <= 15 {
        match chance {
            0..20 => 2,
            20..90 => 3,
            _ => 4,
        }
    } else if level <= 30 {
        if chance < 47 { 3 } else { 4 }
    } else {
        match chance {
            0..10 => 3,
            10..75 => 4,
            _ => 5,
        }
    }
}

/// Difficulty in [0, 1] for a level, where [`MAX_LEVEL`] maps to 1
pub fn difficulty_for_level(level: u32) -> f64 {
    (f64::from(level) / f64::from(MAX_LEVEL)).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/placement/policy.rs"]
mod unit_tests;
