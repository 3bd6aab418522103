use super::{ElementEq, index_of_sub_with, index_of_with, last_index_of_sub_with, last_index_of_with};

/// The direction in which a sequence is scanned. A [`Forward`] search finds
/// the leftmost match at or after its bound, while a [`Backward`] search finds
/// the rightmost match at or before its bound.
///
/// [`Forward`]: SearchDirection::Forward
/// [`Backward`]: SearchDirection::Backward
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SearchDirection {
    #[default]
    Forward,
    Backward,
}

impl SearchDirection {
    /// The bound which places no restriction on the search: `0` for forward
    /// searches and [`isize::MAX`] for backward searches.
    #[inline]
    #[must_use]
    pub const fn unbounded(self) -> isize {
        match self {
            SearchDirection::Forward => 0,
            SearchDirection::Backward => isize::MAX,
        }
    }

    /// The opposite direction.
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            SearchDirection::Forward => SearchDirection::Backward,
            SearchDirection::Backward => SearchDirection::Forward,
        }
    }

    /// Searches `source` for `target` in this direction. `bound` is the
    /// inclusive start index for forward searches and the inclusive end index
    /// for backward searches. See [`index_of_with`] and [`last_index_of_with`].
    #[inline]
    #[must_use]
    pub fn find_element<E, M>(self, source: &[E], target: &E, bound: isize, eq: &M) -> Option<usize>
    where
        M: ElementEq<E> + ?Sized, {
        match self {
            SearchDirection::Forward => index_of_with(source, target, bound, eq),
            SearchDirection::Backward => last_index_of_with(source, target, bound, eq),
        }
    }

    /// Searches `source` for `pattern` in this direction. `bound` is the
    /// inclusive start index for forward searches and the inclusive end index
    /// for backward searches. See [`index_of_sub_with`] and
    /// [`last_index_of_sub_with`].
    #[inline]
    #[must_use]
    pub fn find_sub<E, M>(self, source: &[E], pattern: &[E], bound: isize, eq: &M) -> Option<usize>
    where
        M: ElementEq<E> + ?Sized, {
        match self {
            SearchDirection::Forward => index_of_sub_with(source, pattern, bound, eq),
            SearchDirection::Backward => last_index_of_sub_with(source, pattern, bound, eq),
        }
    }
}
