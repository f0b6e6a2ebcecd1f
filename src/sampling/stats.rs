//! Per-label cell tallies

/// Label to count mapping that remembers first-seen order
///
/// Iteration order is the order labels were first incremented, which keeps
/// first-wins tie-breaks reproducible across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorStat {
    counts: Vec<(String, usize)>,
}

impl ColorStat {
    /// Create an empty tally
    pub const fn new() -> Self {
        Self { counts: Vec::new() }
    }

    /// Add one to the count for `label`
    pub fn increment(&mut self, label: &str) {
        if let Some((_, count)) = self.counts.iter_mut().find(|(l, _)| l == label) {
            *count += 1;
        } else {
            self.counts.push((label.to_string(), 1));
        }
    }

    /// Count recorded for `label`, zero if never seen
    pub fn get(&self, label: &str) -> usize {
        self.counts
            .iter()
            .find(|(l, _)| l == label)
            .map_or(0, |&(_, count)| count)
    }

    /// Whether any label has been recorded
    pub const fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct labels
    pub const fn len(&self) -> usize {
        self.counts.len()
    }

    /// Sum over all labels
    pub fn total(&self) -> usize {
        self.counts.iter().map(|&(_, count)| count).sum()
    }

    /// Iterate `(label, count)` pairs in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(label, count)| (label.as_str(), *count))
    }
}

impl<'a> FromIterator<(&'a str, usize)> for ColorStat {
    fn from_iter<I: IntoIterator<Item = (&'a str, usize)>>(iter: I) -> Self {
        let mut stat = Self::new();
        for (label, count) in iter {
            if let Some((_, existing)) = stat.counts.iter_mut().find(|(l, _)| l == label) {
                *existing += count;
            } else {
                stat.counts.push((label.to_string(), count));
            }
        }
        stat
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sampling/stats.rs"]
mod unit_tests;
