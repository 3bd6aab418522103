use super::{
    ElementEq,
    element::{backward_end, forward_start, position_from},
};

/// Returns the starting index of the first occurrence of `pattern` in `source`
/// at or after `start`, or [`None`] otherwise. Elements are compared with
/// `eq`.
///
/// ### Boundaries
///
/// - An empty `source` never matches.
/// - A negative `start` is treated as `0`.
/// - A `start` at or past the end of `source` never matches, even for an empty
///   `pattern`.
/// - Otherwise an empty `pattern` matches at `start`.
///
/// ### Limitations
///
/// This is a naïve restart-on-mismatch scan: on any mismatch the whole match is
/// retried one position after the previous candidate, giving `O(n·m)` worst
/// case behavior.
#[inline]
#[must_use]
pub fn index_of_sub_with<E, M>(source: &[E], pattern: &[E], start: isize, eq: &M) -> Option<usize>
where
    M: ElementEq<E> + ?Sized, {
    if source.is_empty() {
        return None;
    }

    let start = forward_start(start);
    if start >= source.len() {
        return None;
    }

    if pattern.is_empty() {
        return Some(start);
    }

    let max = source.len().checked_sub(pattern.len())?;
    restart_forward(source, pattern, start, max, eq)
}

/// Returns the starting index of the last occurrence of `pattern` in `source`
/// starting at or before `end`, or [`None`] otherwise. Elements are compared
/// with `eq`.
///
/// ### Boundaries
///
/// - An empty `source` never matches.
/// - A negative `end` never matches.
/// - An `end` past the last possible starting index (`source.len() -
///   pattern.len()`) is clamped to it.
/// - Otherwise an empty `pattern` matches at the clamped `end`.
///
/// ### Limitations
///
/// Mirrors [`index_of_sub_with`], anchoring on the last element of the pattern
/// and retrying one position earlier on any mismatch.
#[inline]
#[must_use]
pub fn last_index_of_sub_with<E, M>(source: &[E], pattern: &[E], end: isize, eq: &M) -> Option<usize>
where
    M: ElementEq<E> + ?Sized, {
    if source.is_empty() {
        return None;
    }

    let max = source.len().checked_sub(pattern.len())?;
    let end = backward_end(end, max)?;

    if pattern.is_empty() {
        return Some(end);
    }

    restart_backward(source, pattern, end, eq)
}

/// Similar to [`index_of_sub_with`] but takes the equality as a closure.
#[inline]
#[must_use]
pub fn index_of_sub_by<E, F>(source: &[E], pattern: &[E], start: isize, eq: F) -> Option<usize>
where
    F: Fn(&E, &E) -> bool, {
    index_of_sub_with(source, pattern, start, &eq)
}

/// Similar to [`last_index_of_sub_with`] but takes the equality as a closure.
#[inline]
#[must_use]
pub fn last_index_of_sub_by<E, F>(source: &[E], pattern: &[E], end: isize, eq: F) -> Option<usize>
where
    F: Fn(&E, &E) -> bool, {
    last_index_of_sub_with(source, pattern, end, &eq)
}

/// Returns `true` if `pattern` occurs anywhere in `source` under the closure
/// `eq`.
#[inline]
#[must_use]
pub fn contains_sub_by<E, F>(source: &[E], pattern: &[E], eq: F) -> bool
where
    F: Fn(&E, &E) -> bool, {
    index_of_sub_with(source, pattern, 0, &eq).is_some()
}

/// Forward scan kernel over window starts `start..=max`, where
/// `max + pattern.len() == source.len()`.
#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
fn restart_forward<E, M>(source: &[E], pattern: &[E], start: usize, max: usize, eq: &M) -> Option<usize>
where
    M: ElementEq<E> + ?Sized, {
    let (first, rest) = pattern.split_first()?;
    let starts = &source[..=max];
    let mut candidate = start;

    loop {
        candidate = position_from(starts, candidate, |e| eq.elements_eq(e, first))?;

        let window = &source[candidate + 1..candidate + pattern.len()];
        if window.iter().zip(rest).all(|(s, p)| eq.elements_eq(s, p)) {
            return Some(candidate);
        }

        candidate += 1;
    }
}

/// Backward scan kernel over window starts `end..=0`, where
/// `end + pattern.len() <= source.len()`.
#[cfg_attr(feature = "multiversion", multiversion::multiversion(targets = "simd"))]
fn restart_backward<E, M>(source: &[E], pattern: &[E], end: usize, eq: &M) -> Option<usize>
where
    M: ElementEq<E> + ?Sized, {
    let (last, rest) = pattern.split_last()?;
    let offset = rest.len();
    let mut candidate = end;

    loop {
        // Index `j` of this slice holds the last element of the window starting
        // at `j`.
        candidate = source[offset..=candidate + offset]
            .iter()
            .rposition(|e| eq.elements_eq(e, last))?;

        let window = &source[candidate..candidate + offset];
        if window.iter().zip(rest).all(|(s, p)| eq.elements_eq(s, p)) {
            return Some(candidate);
        }

        candidate = candidate.checked_sub(1)?;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::search::Exact;

    #[test]
    fn restart_on_self_overlap() {
        assert_eq!(index_of_sub_with(b"aaab", b"aab", 0, &Exact), Some(1));
        assert_eq!(last_index_of_sub_with(b"baaa", b"baa", isize::MAX, &Exact), Some(0));
        assert_eq!(last_index_of_sub_with(b"abaab", b"aab", isize::MAX, &Exact), Some(2));
        assert_eq!(index_of_sub_with(b"abababc", b"ababc", 0, &Exact), Some(2));
        assert_eq!(last_index_of_sub_with(b"cbababa", b"cbaba", isize::MAX, &Exact), Some(0));
    }

    #[test]
    fn forward_boundaries() {
        let s = b"abcabc";
        assert_eq!(index_of_sub_with(s, b"bc", -3, &Exact), Some(1));
        assert_eq!(index_of_sub_with(s, b"bc", 2, &Exact), Some(4));
        assert_eq!(index_of_sub_with(s, b"bc", 5, &Exact), None);
        assert_eq!(index_of_sub_with(s, b"abcabcd", 0, &Exact), None);
        assert_eq!(index_of_sub_with(s, b"abcabc", 0, &Exact), Some(0));

        assert_eq!(index_of_sub_with(s, b"", -1, &Exact), Some(0));
        assert_eq!(index_of_sub_with(s, b"", 4, &Exact), Some(4));
        assert_eq!(index_of_sub_with(s, b"", 6, &Exact), None);
        assert_eq!(index_of_sub_with(b"", b"", 0, &Exact), None);
    }

    #[test]
    fn backward_boundaries() {
        let s = b"abcabc";
        assert_eq!(last_index_of_sub_with(s, b"bc", isize::MAX, &Exact), Some(4));
        assert_eq!(last_index_of_sub_with(s, b"bc", 3, &Exact), Some(1));
        assert_eq!(last_index_of_sub_with(s, b"bc", 0, &Exact), None);
        assert_eq!(last_index_of_sub_with(s, b"ab", -1, &Exact), None);
        assert_eq!(last_index_of_sub_with(s, b"abcabcd", 10, &Exact), None);
        assert_eq!(last_index_of_sub_with(s, b"abcabc", 10, &Exact), Some(0));

        assert_eq!(last_index_of_sub_with(s, b"", 100, &Exact), Some(6));
        assert_eq!(last_index_of_sub_with(s, b"", 2, &Exact), Some(2));
        assert_eq!(last_index_of_sub_with(s, b"", -1, &Exact), None);
        assert_eq!(last_index_of_sub_with(b"", b"", 0, &Exact), None);
    }

    #[test]
    fn closures() {
        let source = [Some(1), None, Some(3), None];
        let pattern = [None, Some(3)];
        assert_eq!(index_of_sub_by(&source, &pattern, 0, |a, b| a == b), Some(1));
        assert_eq!(last_index_of_sub_by(&source, &[None], isize::MAX, |a, b| a == b), Some(3));
        assert!(contains_sub_by(&source, &pattern, |a, b| a == b));
        assert!(!contains_sub_by(&source, &[None, None], |a, b| a == b));
    }
}
