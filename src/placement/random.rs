//! Injectable integer random sources

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniformly distributed integers for placement decisions
pub trait RandomSource {
    /// Uniform integer in `[low, high)`, or `low` when the range is empty
    fn next_int(&mut self, low: usize, high: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_int(&mut self, low: usize, high: usize) -> usize {
        (**self).next_int(low, high)
    }
}

/// Seeded random source for reproducible generation
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a deterministic source from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_int(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        self.rng.random_range(low..high)
    }
}

/// Replays a fixed script of values, cycling when exhausted
///
/// Each scripted value is clamped into the requested range, which lets tests
/// pin exact placements without knowing every range in advance. Empty ranges
/// return `low` without consuming a value.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<usize>,
    cursor: usize,
}

impl SequenceRandom {
    /// Create a source that replays `values` in order
    pub const fn new(values: Vec<usize>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Number of values drawn so far
    pub const fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandom {
    fn next_int(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        let value = if self.values.is_empty() {
            low
        } else {
            self.values
                .get(self.cursor % self.values.len())
                .copied()
                .unwrap_or(low)
        };
        self.cursor += 1;
        value.clamp(low, high - 1)
    }
}

/// In-place Fisher-Yates shuffle driven by a [`RandomSource`]
pub fn shuffle<T, R: RandomSource + ?Sized>(items: &mut [T], rng: &mut R) {
    let len = items.len();
    for i in 0..len {
        let j = rng.next_int(i, len);
        items.swap(i, j);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/random.rs"]
mod unit_tests;
