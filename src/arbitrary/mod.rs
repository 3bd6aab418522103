//! A module providing implementations of
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! for fuzzing the search functions.
//!
//! <div class="warning note">
//!
//! **Note**
//!
//! You must enable the *fuzzing* feature in your `Cargo.toml` to use these
//! functions.
//!
//! </div>

use crate::{
    math::{Float, Tolerance},
    search::SearchDirection,
};
use arbitrary::{Arbitrary, Result, Unstructured};

/// An arbitrary search: a source, a pattern, a bound, and a direction. Half of
/// the time the pattern is drawn from the source itself so that matches are
/// common. Bounds range from just below zero to just past the end of the
/// source so that clamping is exercised.
#[derive(Clone, Debug)]
pub struct SearchCase<E> {
    pub source:    Vec<E>,
    pub pattern:   Vec<E>,
    pub bound:     isize,
    pub direction: SearchDirection,
}

impl<'a> Arbitrary<'a> for SearchDirection {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(if bool::arbitrary(u)? {
            SearchDirection::Forward
        } else {
            SearchDirection::Backward
        })
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        bool::size_hint(depth)
    }
}

impl<'a, E: Arbitrary<'a> + Clone> Arbitrary<'a> for SearchCase<E> {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let source = Vec::<E>::arbitrary(u)?;

        let pattern = if !source.is_empty() && bool::arbitrary(u)? {
            let start = u.choose_index(source.len())?;
            let end = u.int_in_range(start..=source.len())?;
            source[start..end].to_vec()
        } else {
            Vec::<E>::arbitrary(u)?
        };

        let len = isize::try_from(source.len()).unwrap_or(isize::MAX);
        let bound = u.int_in_range(-2..=len.saturating_add(2))?;
        let direction = SearchDirection::arbitrary(u)?;

        Ok(SearchCase {
            source,
            pattern,
            bound,
            direction,
        })
    }
}

/// Generates a valid tolerance: never `NaN` and never negative.
impl<'a, T> Arbitrary<'a> for Tolerance<T>
where
    T: Float + Arbitrary<'a>,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let eps = T::arbitrary(u)?;
        let eps = if eps.is_nan() { T::ZERO } else { eps.abs() };
        Ok(Tolerance::clamped(eps))
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        T::size_hint(depth)
    }
}
