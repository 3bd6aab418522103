use super::ElementEq;

/// Converts an inclusive forward start index to a position, treating a
/// negative start as `0`.
#[inline]
pub(crate) fn forward_start(start: isize) -> usize {
    usize::try_from(start).unwrap_or(0)
}

/// Converts an inclusive backward end index to a position no greater than
/// `last`. A negative end has no position.
#[inline]
pub(crate) fn backward_end(end: isize, last: usize) -> Option<usize> {
    usize::try_from(end).ok().map(|end| end.min(last))
}

/// Position of the first element at or after `start` satisfying `predicate`,
/// in the frame of `source`.
#[inline]
pub(crate) fn position_from<E, P>(source: &[E], start: usize, predicate: P) -> Option<usize>
where
    P: FnMut(&E) -> bool, {
    source.get(start..)?.iter().position(predicate).map(|p| p + start)
}

/// Returns the index of the first element at or after `start` that equals
/// `target` under `eq`, or [`None`] if there is none.
///
/// An empty `source` is never searched and a negative `start` is treated as
/// `0`.
#[inline]
#[must_use]
pub fn index_of_with<E, M>(source: &[E], target: &E, start: isize, eq: &M) -> Option<usize>
where
    M: ElementEq<E> + ?Sized, {
    if source.is_empty() {
        return None;
    }

    position_from(source, forward_start(start), |e| eq.elements_eq(e, target))
}

/// Returns the index of the last element at or before `end` that equals
/// `target` under `eq`, or [`None`] if there is none.
///
/// Unlike [`index_of_with`], a negative bound is not clamped: it yields
/// [`None`]. An `end` past the last element is clamped to the last element.
#[inline]
#[must_use]
pub fn last_index_of_with<E, M>(source: &[E], target: &E, end: isize, eq: &M) -> Option<usize>
where
    M: ElementEq<E> + ?Sized, {
    let end = backward_end(end, source.len().checked_sub(1)?)?;
    source[..=end].iter().rposition(|e| eq.elements_eq(e, target))
}

/// Similar to [`index_of_with`] but takes the equality as a closure.
#[inline]
#[must_use]
pub fn index_of_by<E, F>(source: &[E], target: &E, start: isize, eq: F) -> Option<usize>
where
    F: Fn(&E, &E) -> bool, {
    index_of_with(source, target, start, &eq)
}

/// Similar to [`last_index_of_with`] but takes the equality as a closure.
#[inline]
#[must_use]
pub fn last_index_of_by<E, F>(source: &[E], target: &E, end: isize, eq: F) -> Option<usize>
where
    F: Fn(&E, &E) -> bool, {
    last_index_of_with(source, target, end, &eq)
}
