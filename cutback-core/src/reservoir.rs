//! Reservoir sampling (Algorithm R).
//!
//! Draws a uniform sample of `k` items from a stream of unknown length in
//! one pass and O(k) memory. After `n` items every item is in the reservoir
//! with probability exactly `k / n`, provided the index source is uniform.

use rand::Rng;

/// Source of uniform random indices.
///
/// Every [`rand::Rng`] is an index source; tests can plug in a scripted
/// implementation to pin the reservoir contents.
pub trait IndexSource {
    /// Uniform integer in `0..=upper`
    fn index_inclusive(&mut self, upper: usize) -> usize;
}

impl<R: Rng> IndexSource for R {
    fn index_inclusive(&mut self, upper: usize) -> usize {
        self.gen_range(0..=upper)
    }
}

/// Fixed-size uniform sampler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservoirSampler {
    k: usize,
}

impl ReservoirSampler {
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// Sample up to `k` items from `items`.
    ///
    /// Yields the whole input when it has `k` items or fewer.
    pub fn sample<I, S>(&self, items: I, source: &mut S) -> Vec<I::Item>
    where
        I: IntoIterator,
        S: IndexSource + ?Sized,
    {
        let mut reservoir = Vec::with_capacity(self.k);
        if self.k == 0 {
            return reservoir;
        }

        for (i, item) in items.into_iter().enumerate() {
            if i < self.k {
                reservoir.push(item);
            } else {
                let r = source.index_inclusive(i);
                if r < self.k {
                    reservoir[r] = item;
                }
            }
        }
        reservoir
    }
}
