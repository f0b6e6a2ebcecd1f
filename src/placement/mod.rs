//! Slot matrix placement of generated units
//!
//! This module contains:
//! - Injectable random sources
//! - The slot matrix and its fallback placement strategies
//! - Primary color selection and its priority walk
//! - Shuffled filler placement and the engine tying both passes together

/// Placement engine and pass outcome
pub mod engine;
/// Shuffled filler placement
pub mod filler;
/// Slot matrix storage
pub mod matrix;
/// Column and row count policies
pub mod policy;
/// Primary color selection and priority placement
pub mod primary;
/// Random sources and shuffling
pub mod random;
/// Ordered placement fallback strategies
pub mod strategy;

pub use engine::{PlacedUnit, PlacementEngine, PlacementOutcome};
pub use matrix::SlotMatrix;
pub use policy::{ColumnPolicy, RowPolicy};
pub use primary::select_primary;
pub use random::{RandomSource, SeededRandom, SequenceRandom};
pub use strategy::{PlacementStrategy, Slot};
