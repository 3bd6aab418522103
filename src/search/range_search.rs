use super::{ElementEq, Exact, index_of_sub_with, index_of_with, last_index_of_sub_with, last_index_of_with};
use std::ops::{Bound, RangeBounds};

/// A subsequence along with its starting index. This is used for restricting
/// the search range when searching a sequence. See [Restricting the search
/// range](crate::search#restricting-the-search-range) for more details.
///
/// <div class="warning">
/// All search methods called on this struct return indices with respect to the
/// original sequence, not the subsequence. However, the `start` and `end`
/// bounds taken by the `_with` methods are relative to the subsequence.
/// </div>
#[derive(Debug)]
pub struct RangeSearch<'a, E> {
    pub(crate) slice:       &'a [E],
    pub(crate) starting_at: usize,
}

// Manual impls avoid requiring `E: Clone`
impl<E> Clone for RangeSearch<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for RangeSearch<'_, E> {}

impl<'a, E> RangeSearch<'a, E> {
    /// Create a new [`RangeSearch`] from a sequence and a range. The range is
    /// clamped to the sequence, so an out-of-bounds range produces an empty
    /// or shortened search rather than a panic.
    pub(crate) fn new<R: RangeBounds<usize>>(sequence: &'a [E], range: &R) -> Self {
        let len = sequence.len();
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => len,
        }
        .min(len);
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        }
        .min(end);

        Self {
            slice:       &sequence[start..end],
            starting_at: start,
        }
    }

    /// The restricted portion of the sequence.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &'a [E] {
        self.slice
    }

    /// The index in the original sequence at which the restricted portion
    /// begins.
    #[inline]
    #[must_use]
    pub fn starting_at(&self) -> usize {
        self.starting_at
    }

    /// Given an index in the frame of reference of `slice`, adjust it to be in
    /// the original frame of reference.
    #[inline]
    fn adjust_to_context(&self, index: Option<usize>) -> Option<usize> {
        index.map(|i| i + self.starting_at)
    }

    /// Similar to [`index_of_with`] but restricted to the range.
    #[inline]
    #[must_use]
    pub fn index_of_with<M: ElementEq<E> + ?Sized>(&self, target: &E, start: isize, eq: &M) -> Option<usize> {
        self.adjust_to_context(index_of_with(self.slice, target, start, eq))
    }

    /// Similar to [`last_index_of_with`] but restricted to the range.
    #[inline]
    #[must_use]
    pub fn last_index_of_with<M: ElementEq<E> + ?Sized>(&self, target: &E, end: isize, eq: &M) -> Option<usize> {
        self.adjust_to_context(last_index_of_with(self.slice, target, end, eq))
    }

    /// Similar to [`index_of_sub_with`] but restricted to the range.
    #[inline]
    #[must_use]
    pub fn index_of_sub_with<M: ElementEq<E> + ?Sized>(&self, pattern: &[E], start: isize, eq: &M) -> Option<usize> {
        self.adjust_to_context(index_of_sub_with(self.slice, pattern, start, eq))
    }

    /// Similar to [`last_index_of_sub_with`] but restricted to the range.
    #[inline]
    #[must_use]
    pub fn last_index_of_sub_with<M: ElementEq<E> + ?Sized>(&self, pattern: &[E], end: isize, eq: &M) -> Option<usize> {
        self.adjust_to_context(last_index_of_sub_with(self.slice, pattern, end, eq))
    }
}

impl<E: PartialEq> RangeSearch<'_, E> {
    /// Returns the index of the first element in the range equal to `target`.
    #[inline]
    #[must_use]
    pub fn index_of(&self, target: &E) -> Option<usize> {
        self.index_of_with(target, 0, &Exact)
    }

    /// Returns the index of the last element in the range equal to `target`.
    #[inline]
    #[must_use]
    pub fn last_index_of(&self, target: &E) -> Option<usize> {
        self.last_index_of_with(target, isize::MAX, &Exact)
    }

    /// Returns the starting index of the first occurrence of `pattern` lying
    /// entirely within the range.
    #[inline]
    #[must_use]
    pub fn index_of_sub(&self, pattern: impl AsRef<[E]>) -> Option<usize> {
        self.index_of_sub_with(pattern.as_ref(), 0, &Exact)
    }

    /// Returns the starting index of the last occurrence of `pattern` lying
    /// entirely within the range.
    #[inline]
    #[must_use]
    pub fn last_index_of_sub(&self, pattern: impl AsRef<[E]>) -> Option<usize> {
        self.last_index_of_sub_with(pattern.as_ref(), isize::MAX, &Exact)
    }

    /// Returns `true` if any element in the range equals `target`.
    #[inline]
    #[must_use]
    pub fn contains_element(&self, target: &E) -> bool {
        self.index_of(target).is_some()
    }

    /// Returns `true` if `pattern` occurs entirely within the range.
    #[inline]
    #[must_use]
    pub fn contains_sub(&self, pattern: impl AsRef<[E]>) -> bool {
        self.index_of_sub(pattern).is_some()
    }
}

/// Trait for performing restricted searches on sequences. In particular, it
/// provides methods for generating a [`RangeSearch`] struct from a sequence.
/// See [Restricting the search
/// range](crate::search#restricting-the-search-range) for more details.
pub trait ToRangeSearch<E>: AsRef<[E]> {
    /// Restrict the search to be in `range`. Bounds beyond the sequence are
    /// clamped to it.
    ///
    /// <div class="warning">
    /// All search methods called on the resulting struct return indices with
    /// respect to the original sequence, not the subsequence.
    /// </div>
    #[inline]
    fn search_in<R: RangeBounds<usize>>(&self, range: R) -> RangeSearch<'_, E> {
        RangeSearch::new(self.as_ref(), &range)
    }

    /// Restrict the search to be in only the first `n` elements. If the
    /// sequence is less than `n` elements long, then the full sequence is
    /// searched.
    ///
    /// <div class="warning">
    /// All search methods called on the resulting struct return indices with
    /// respect to the original sequence, not the subsequence.
    /// </div>
    #[inline]
    fn search_in_first(&self, n: usize) -> RangeSearch<'_, E> {
        RangeSearch::new(self.as_ref(), &(..n))
    }

    /// Restrict the search to be in only the last `n` elements. If the
    /// sequence is less than `n` elements long, then the full sequence is
    /// searched.
    ///
    /// <div class="warning">
    /// All search methods called on the resulting struct return indices with
    /// respect to the original sequence, not the subsequence.
    /// </div>
    #[inline]
    fn search_in_last(&self, n: usize) -> RangeSearch<'_, E> {
        let seq = self.as_ref();
        RangeSearch::new(seq, &(seq.len().saturating_sub(n)..))
    }
}

impl<E, T: AsRef<[E]> + ?Sized> ToRangeSearch<E> for T {}
