use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::keyed::Keyed;

/// Picks the pivot index for a partition window `[low, high]`.
///
/// Implementations must return an index inside the window. The window is
/// already validated and non-empty when this is called.
pub trait PivotStrategy {
    fn choose<T: Keyed>(&mut self, data: &[T], low: usize, high: usize) -> usize;
}

/// Last element of the window. Deterministic; worst case O(n^2) on sorted or
/// reverse-sorted input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LastElement;

impl PivotStrategy for LastElement {
    #[inline]
    fn choose<T: Keyed>(&mut self, _data: &[T], _low: usize, high: usize) -> usize {
        high
    }
}

/// Median of the first, middle and last elements of the window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MedianOfThree;

impl PivotStrategy for MedianOfThree {
    fn choose<T: Keyed>(&mut self, data: &[T], low: usize, high: usize) -> usize {
        let mid = low + (high - low) / 2;
        let (a, b, c) = (data[low].key(), data[mid].key(), data[high].key());

        if (a <= b) == (b <= c) {
            mid
        } else if (b <= a) == (a <= c) {
            low
        } else {
            high
        }
    }
}

/// Uniformly random index in the window.
#[derive(Debug, Clone)]
pub struct RandomPivot {
    rng: StdRng,
}

impl RandomPivot {
    /// Reproducible sequence of pivots for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl PivotStrategy for RandomPivot {
    fn choose<T: Keyed>(&mut self, _data: &[T], low: usize, high: usize) -> usize {
        self.rng.gen_range(low..=high)
    }
}

impl<P: PivotStrategy + ?Sized> PivotStrategy for &mut P {
    fn choose<T: Keyed>(&mut self, data: &[T], low: usize, high: usize) -> usize {
        (**self).choose(data, low, high)
    }
}
