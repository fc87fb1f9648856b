use tracing::trace;

use crate::error::{check_index, check_window, SortError};
use crate::keyed::Keyed;
use crate::pivot::{LastElement, PivotStrategy};

/// How pending partition windows are scheduled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Traversal {
    /// Native call-stack recursion into the smaller window, looping on the
    /// larger one. Stack depth stays O(log n) even when every partition is
    /// maximally unbalanced.
    #[default]
    Recursive,
    /// Explicit stack of pending windows. Visits windows in the same order as
    /// `Recursive` but keeps native stack depth constant.
    WorkStack,
}

/// In-place, unstable quicksort using the Lomuto partition scheme.
///
/// The pivot strategy and the traversal are both explicit; the free functions
/// in this module use `LastElement` with `Traversal::Recursive`.
#[derive(Debug, Clone, Default)]
pub struct QuickSorter<P = LastElement> {
    pivot: P,
    traversal: Traversal,
}

impl QuickSorter<LastElement> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: PivotStrategy> QuickSorter<P> {
    pub fn with_pivot(pivot: P) -> Self {
        Self {
            pivot,
            traversal: Traversal::default(),
        }
    }

    pub fn traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Sort the whole of `data` in place.
    pub fn sort<T: Keyed>(&mut self, data: &mut [T]) {
        if data.len() > 1 {
            self.sort_window(data, 0, data.len() - 1);
        }
    }

    /// Sort `data[low..=high]` in place, leaving every other element as is.
    ///
    /// `high` must be a valid index. A window with `low >= high` holds at most
    /// one element and is left alone.
    pub fn sort_range<T: Keyed>(
        &mut self,
        data: &mut [T],
        low: usize,
        high: usize,
    ) -> Result<(), SortError> {
        check_index(high, data.len())?;
        if low < high {
            self.sort_window(data, low, high);
        }
        Ok(())
    }

    /// Partition `data[low..=high]` around the pivot this sorter's strategy
    /// picks and return the pivot's final index.
    pub fn partition<T: Keyed>(
        &mut self,
        data: &mut [T],
        low: usize,
        high: usize,
    ) -> Result<usize, SortError> {
        check_window(low, high, data.len())?;
        Ok(lomuto(data, low, high, &mut self.pivot))
    }

    fn sort_window<T: Keyed>(&mut self, data: &mut [T], low: usize, high: usize) {
        match self.traversal {
            Traversal::Recursive => self.recurse(data, low, high),
            Traversal::WorkStack => self.drain(data, low, high),
        }
    }

    fn recurse<T: Keyed>(&mut self, data: &mut [T], mut low: usize, mut high: usize) {
        while low < high {
            let p = lomuto(data, low, high, &mut self.pivot);

            // ties go to the left window
            if p - low <= high - p {
                if p > low {
                    self.recurse(data, low, p - 1);
                }
                low = p + 1;
            } else {
                self.recurse(data, p + 1, high);
                high = p - 1;
            }
        }
    }

    fn drain<T: Keyed>(&mut self, data: &mut [T], low: usize, high: usize) {
        let mut pending = vec![(low, high)];

        while let Some((low, high)) = pending.pop() {
            if low >= high {
                continue;
            }

            let p = lomuto(data, low, high, &mut self.pivot);

            // larger window pushed first so the smaller one is processed next,
            // matching `recurse`
            if p - low <= high - p {
                pending.push((p + 1, high));
                if p > low {
                    pending.push((low, p - 1));
                }
            } else {
                pending.push((low, p - 1));
                pending.push((p + 1, high));
            }
        }
    }
}

/*
--------------------------------------------------------------------------------
   LOMUTO partition of a validated, non-empty window
--------------------------------------------------------------------------------
*/
fn lomuto<T: Keyed, P: PivotStrategy>(
    data: &mut [T],
    low: usize,
    high: usize,
    pivot: &mut P,
) -> usize {
    let chosen = pivot.choose(data, low, high);
    debug_assert!(
        (low..=high).contains(&chosen),
        "pivot {chosen} outside window [{low}, {high}]"
    );

    data.swap(chosen, high);
    let split = data[high].key();

    let mut j = low;
    for i in low..high {
        if data[i].key() <= split {
            data.swap(i, j);
            j += 1;
        }
    }
    data.swap(j, high);

    trace!(low, high, pivot = j, "partition");
    j
}

/// Sort all of `data` in place with the last-element pivot.
pub fn quick_sort<T: Keyed>(data: &mut [T]) {
    QuickSorter::new().sort(data);
}

/// Sort `data[low..=high]` in place with the last-element pivot.
pub fn quick_sort_range<T: Keyed>(data: &mut [T], low: usize, high: usize) -> Result<(), SortError> {
    QuickSorter::new().sort_range(data, low, high)
}

/// Lomuto partition of `data[low..=high]` around its last element.
///
/// Afterwards everything in `[low, p)` is <= `data[p]` and everything in
/// `(p, high]` is > `data[p]`, where `p` is the returned index.
pub fn partition<T: Keyed>(data: &mut [T], low: usize, high: usize) -> Result<usize, SortError> {
    QuickSorter::new().partition(data, low, high)
}

/// Index of the pivot the default strategy picks for `[low, high]`.
pub fn choose_pivot<T: Keyed>(data: &[T], low: usize, high: usize) -> Result<usize, SortError> {
    check_window(low, high, data.len())?;
    Ok(LastElement.choose(data, low, high))
}

/// Exchange `data[i]` and `data[j]`. Swapping an index with itself is a no-op.
pub fn swap<T>(data: &mut [T], i: usize, j: usize) -> Result<(), SortError> {
    check_index(i, data.len())?;
    check_index(j, data.len())?;
    data.swap(i, j);
    Ok(())
}
