//! Generated units and their grouping by color

use std::fmt;

/// Stable handle for a generated unit within one generation pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnitId(pub usize);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A placeable unit carrying a bullet budget for one color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitQuota {
    /// Palette label the unit belongs to
    pub label: String,
    /// Bullets carried, a positive multiple of the bullet increment
    pub bullets: usize,
}

impl UnitQuota {
    /// Create a quota for `label` carrying `bullets`
    pub fn new(label: impl Into<String>, bullets: usize) -> Self {
        Self {
            label: label.into(),
            bullets,
        }
    }
}

/// All units of a pass, grouped by color in generation order
///
/// Unit ids index the flat generation order, so the n-th unit of a color is
/// always the same id for identical inputs.
#[derive(Debug, Clone, Default)]
pub struct ColorUnitSet {
    units: Vec<UnitQuota>,
    groups: Vec<(String, Vec<UnitId>)>,
}

impl ColorUnitSet {
    /// Create an empty set
    pub const fn new() -> Self {
        Self {
            units: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Append quotas for a color, returning the ids assigned to them
    ///
    /// Quotas for a label already present extend that label's sequence.
    pub fn insert(&mut self, label: &str, quotas: Vec<UnitQuota>) -> Vec<UnitId> {
        let start = self.units.len();
        let ids: Vec<UnitId> = (start..start + quotas.len()).map(UnitId).collect();
        self.units.extend(quotas);

        if let Some((_, group)) = self.groups.iter_mut().find(|(l, _)| l == label) {
            group.extend(ids.iter().copied());
        } else {
            self.groups.push((label.to_string(), ids.clone()));
        }
        ids
    }

    /// Replace a color's units with a new sequence
    ///
    /// Ids of the discarded units are retired and never reused.
    pub fn replace(&mut self, label: &str, quotas: Vec<UnitQuota>) -> Vec<UnitId> {
        if let Some((_, group)) = self.groups.iter_mut().find(|(l, _)| l == label) {
            group.clear();
        }
        self.insert(label, quotas)
    }

    /// Look up a unit by id
    pub fn get(&self, id: UnitId) -> Option<&UnitQuota> {
        self.units.get(id.0)
    }

    /// Ids of one color's units in generation order
    pub fn units_of(&self, label: &str) -> &[UnitId] {
        self.groups
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, ids)| ids.as_slice())
            .unwrap_or(&[])
    }

    /// Concatenated ids of every color except `excluded`, in set order
    pub fn units_excluding(&self, excluded: Option<&str>) -> Vec<UnitId> {
        self.groups
            .iter()
            .filter(|(label, _)| Some(label.as_str()) != excluded)
            .flat_map(|(_, ids)| ids.iter().copied())
            .collect()
    }

    /// Iterate `(label, ids)` groups in insertion order
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[UnitId])> {
        self.groups
            .iter()
            .map(|(label, ids)| (label.as_str(), ids.as_slice()))
    }

    /// Number of live units across all colors
    pub fn total_units(&self) -> usize {
        self.groups.iter().map(|(_, ids)| ids.len()).sum()
    }

    /// Sum of bullets across one color's units
    pub fn bullets_of(&self, label: &str) -> usize {
        self.units_of(label)
            .iter()
            .filter_map(|&id| self.get(id))
            .map(|unit| unit.bullets)
            .sum()
    }

    /// Whether the set holds no live units
    pub fn is_empty(&self) -> bool {
        self.total_units() == 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/budget/units.rs"]
mod unit_tests;
