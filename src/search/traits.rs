use super::{Exact, index_of_sub_with, index_of_with, last_index_of_sub_with, last_index_of_with};
use crate::math::{Float, Tolerance};
use std::ops::Range;

///
/// Trait for searching sequences for elements and subsequences using
/// [`PartialEq`]. Implemented for anything which is [`AsRef<[E]>`], including
/// slices, arrays, [`Vec`], and [`str`] (as bytes).
///
/// Forward searches take an inclusive start index and treat a negative start
/// as `0`. Backward searches take an inclusive end index and find nothing for
/// a negative end. See [`index_of_sub_with`] and [`last_index_of_sub_with`]
/// for the treatment of empty patterns.
///
pub trait SequenceSearch<E> {
    /// Returns the index of the first element equal to `target`.
    fn index_of(&self, target: &E) -> Option<usize>;
    /// Returns the index of the first element equal to `target` at or after
    /// `start`.
    fn index_of_from(&self, target: &E, start: isize) -> Option<usize>;
    /// Returns the index of the last element equal to `target`.
    fn last_index_of(&self, target: &E) -> Option<usize>;
    /// Returns the index of the last element equal to `target` at or before
    /// `end`.
    fn last_index_of_from(&self, target: &E, end: isize) -> Option<usize>;
    /// Returns the starting index of the first occurrence of `pattern`.
    fn index_of_sub(&self, pattern: impl AsRef<[E]>) -> Option<usize>;
    /// Returns the starting index of the first occurrence of `pattern` at or
    /// after `start`.
    fn index_of_sub_from(&self, pattern: impl AsRef<[E]>, start: isize) -> Option<usize>;
    /// Returns the starting index of the last occurrence of `pattern`.
    fn last_index_of_sub(&self, pattern: impl AsRef<[E]>) -> Option<usize>;
    /// Returns the starting index of the last occurrence of `pattern` starting
    /// at or before `end`.
    fn last_index_of_sub_from(&self, pattern: impl AsRef<[E]>, end: isize) -> Option<usize>;
    /// Returns the index range of the first occurrence of `pattern`.
    fn find_sub(&self, pattern: impl AsRef<[E]>) -> Option<Range<usize>>;
    /// Returns the index range of the last occurrence of `pattern`.
    fn rfind_sub(&self, pattern: impl AsRef<[E]>) -> Option<Range<usize>>;
    /// Returns `true` if any element equals `target`.
    fn contains_element(&self, target: &E) -> bool;
    /// Returns `true` if `pattern` occurs as a contiguous subsequence.
    fn contains_sub(&self, pattern: impl AsRef<[E]>) -> bool;
    /// Returns `true` if at least one of `targets` is present.
    fn contains_any(&self, targets: impl AsRef<[E]>) -> bool;
    /// Returns `true` if every one of `targets` is present. Vacuously `true`
    /// for no targets.
    fn contains_all(&self, targets: impl AsRef<[E]>) -> bool;
}

impl<E: PartialEq, S: AsRef<[E]> + ?Sized> SequenceSearch<E> for S {
    #[inline]
    fn index_of(&self, target: &E) -> Option<usize> {
        index_of_with(self.as_ref(), target, 0, &Exact)
    }

    #[inline]
    fn index_of_from(&self, target: &E, start: isize) -> Option<usize> {
        index_of_with(self.as_ref(), target, start, &Exact)
    }

    #[inline]
    fn last_index_of(&self, target: &E) -> Option<usize> {
        last_index_of_with(self.as_ref(), target, isize::MAX, &Exact)
    }

    #[inline]
    fn last_index_of_from(&self, target: &E, end: isize) -> Option<usize> {
        last_index_of_with(self.as_ref(), target, end, &Exact)
    }

    #[inline]
    fn index_of_sub(&self, pattern: impl AsRef<[E]>) -> Option<usize> {
        index_of_sub_with(self.as_ref(), pattern.as_ref(), 0, &Exact)
    }

    #[inline]
    fn index_of_sub_from(&self, pattern: impl AsRef<[E]>, start: isize) -> Option<usize> {
        index_of_sub_with(self.as_ref(), pattern.as_ref(), start, &Exact)
    }

    #[inline]
    fn last_index_of_sub(&self, pattern: impl AsRef<[E]>) -> Option<usize> {
        last_index_of_sub_with(self.as_ref(), pattern.as_ref(), isize::MAX, &Exact)
    }

    #[inline]
    fn last_index_of_sub_from(&self, pattern: impl AsRef<[E]>, end: isize) -> Option<usize> {
        last_index_of_sub_with(self.as_ref(), pattern.as_ref(), end, &Exact)
    }

    #[inline]
    fn find_sub(&self, pattern: impl AsRef<[E]>) -> Option<Range<usize>> {
        let pattern = pattern.as_ref();
        index_of_sub_with(self.as_ref(), pattern, 0, &Exact).map(|s| s..s + pattern.len())
    }

    #[inline]
    fn rfind_sub(&self, pattern: impl AsRef<[E]>) -> Option<Range<usize>> {
        let pattern = pattern.as_ref();
        last_index_of_sub_with(self.as_ref(), pattern, isize::MAX, &Exact).map(|s| s..s + pattern.len())
    }

    #[inline]
    fn contains_element(&self, target: &E) -> bool {
        index_of_with(self.as_ref(), target, 0, &Exact).is_some()
    }

    #[inline]
    fn contains_sub(&self, pattern: impl AsRef<[E]>) -> bool {
        index_of_sub_with(self.as_ref(), pattern.as_ref(), 0, &Exact).is_some()
    }

    #[inline]
    fn contains_any(&self, targets: impl AsRef<[E]>) -> bool {
        let source = self.as_ref();
        targets.as_ref().iter().any(|t| index_of_with(source, t, 0, &Exact).is_some())
    }

    #[inline]
    fn contains_all(&self, targets: impl AsRef<[E]>) -> bool {
        let source = self.as_ref();
        targets.as_ref().iter().all(|t| index_of_with(source, t, 0, &Exact).is_some())
    }
}

/// Trait for searching floating point sequences where elements within an
/// absolute tolerance `eps` of each other are considered equal. A negative or
/// `NaN` `eps` is treated as zero, see [`Tolerance::clamped`].
pub trait ToleranceSearch<T: Float> {
    /// Returns the index of the first element within `eps` of `target`.
    fn index_of_within(&self, target: T, eps: T) -> Option<usize>;
    /// Returns the index of the last element within `eps` of `target`.
    fn last_index_of_within(&self, target: T, eps: T) -> Option<usize>;
    /// Returns the starting index of the first window matching `pattern`
    /// elementwise within `eps`.
    fn index_of_sub_within(&self, pattern: impl AsRef<[T]>, eps: T) -> Option<usize>;
    /// Returns the starting index of the last window matching `pattern`
    /// elementwise within `eps`.
    fn last_index_of_sub_within(&self, pattern: impl AsRef<[T]>, eps: T) -> Option<usize>;
    /// Returns `true` if any element is within `eps` of `target`.
    fn contains_within(&self, target: T, eps: T) -> bool;
    /// Returns `true` if some window matches `pattern` elementwise within
    /// `eps`.
    fn contains_sub_within(&self, pattern: impl AsRef<[T]>, eps: T) -> bool;
}

impl<T: Float, S: AsRef<[T]> + ?Sized> ToleranceSearch<T> for S {
    #[inline]
    fn index_of_within(&self, target: T, eps: T) -> Option<usize> {
        index_of_with(self.as_ref(), &target, 0, &Tolerance::clamped(eps))
    }

    #[inline]
    fn last_index_of_within(&self, target: T, eps: T) -> Option<usize> {
        last_index_of_with(self.as_ref(), &target, isize::MAX, &Tolerance::clamped(eps))
    }

    #[inline]
    fn index_of_sub_within(&self, pattern: impl AsRef<[T]>, eps: T) -> Option<usize> {
        index_of_sub_with(self.as_ref(), pattern.as_ref(), 0, &Tolerance::clamped(eps))
    }

    #[inline]
    fn last_index_of_sub_within(&self, pattern: impl AsRef<[T]>, eps: T) -> Option<usize> {
        last_index_of_sub_with(self.as_ref(), pattern.as_ref(), isize::MAX, &Tolerance::clamped(eps))
    }

    #[inline]
    fn contains_within(&self, target: T, eps: T) -> bool {
        index_of_with(self.as_ref(), &target, 0, &Tolerance::clamped(eps)).is_some()
    }

    #[inline]
    fn contains_sub_within(&self, pattern: impl AsRef<[T]>, eps: T) -> bool {
        index_of_sub_with(self.as_ref(), pattern.as_ref(), 0, &Tolerance::clamped(eps)).is_some()
    }
}
