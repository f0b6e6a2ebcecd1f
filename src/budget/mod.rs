//! Bullet budgets and unit generation per color

/// Tiered budget splitting into unit quotas
pub mod allocator;
/// Unit handles, quotas and per-color grouping
pub mod units;

pub use allocator::{allocate, allocate_all, split_budget};
pub use units::{ColorUnitSet, UnitId, UnitQuota};
