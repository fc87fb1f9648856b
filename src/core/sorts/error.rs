use thiserror::Error;

/// Caller contract violations detected by the checked sort operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("index {index} is out of bounds for a sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("window [{low}, {high}] is inverted")]
    InvertedWindow { low: usize, high: usize },
}

/// Fail with `IndexOutOfBounds` unless `index < len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), SortError> {
    if index < len {
        Ok(())
    } else {
        Err(SortError::IndexOutOfBounds { index, len })
    }
}

/// Fail unless `[low, high]` is a non-empty window inside a sequence of `len`.
pub(crate) fn check_window(low: usize, high: usize, len: usize) -> Result<(), SortError> {
    if low > high {
        return Err(SortError::InvertedWindow { low, high });
    }
    check_index(high, len)
}
