use std::fmt;

/// An element ordered by a single signed integer key.
///
/// Ordering is always the natural order of the key, so sorting stays fixed to
/// totally-ordered scalars while still letting a record carry extra data
/// (see [`Tagged`]).
pub trait Keyed: Copy + fmt::Debug {
    fn key(&self) -> i64;
}

impl Keyed for i64 {
    #[inline]
    fn key(&self) -> i64 {
        *self
    }
}

impl Keyed for i32 {
    #[inline]
    fn key(&self) -> i64 {
        i64::from(*self)
    }
}

/// A value together with the position it had in the original input.
///
/// Only `value` takes part in comparisons; `origin` makes the relative order
/// of equal values observable after a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tagged {
    pub value: i64,
    pub origin: usize,
}

impl Tagged {
    /// Tag every value with its index in `values`.
    pub fn tag_all(values: &[i64]) -> Vec<Tagged> {
        values
            .iter()
            .enumerate()
            .map(|(origin, &value)| Tagged { value, origin })
            .collect()
    }
}

impl Keyed for Tagged {
    #[inline]
    fn key(&self) -> i64 {
        self.value
    }
}

/// True when every key is <= the next one.
pub(crate) fn is_ascending<T: Keyed>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0].key() <= w[1].key())
}

/// True when equal keys keep increasing `origin` tags, i.e. the sort that
/// produced `data` from `Tagged::tag_all` output was stable.
#[cfg(test)]
pub(crate) fn preserves_origin_order(data: &[Tagged]) -> bool {
    data.windows(2)
        .all(|w| w[0].value != w[1].value || w[0].origin < w[1].origin)
}
