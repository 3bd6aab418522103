//! Functions and traits for locating a single element or a contiguous
//! subsequence (a *pattern*) inside a larger sequence.
//!
//! All searches return [`Option<usize>`], the index at which the match
//! begins. Forward searches report the leftmost match at or after their start
//! bound and backward searches the rightmost match at or before their end
//! bound. The most convenient entry points are the [`SequenceSearch`] and
//! [`ToleranceSearch`] extension traits:
//!
//! ```
//! # use seqsearch::search::*;
//! let source = [3, 1, 4, 1, 5, 9, 2, 6];
//! assert_eq!(source.index_of(&1), Some(1));
//! assert_eq!(source.last_index_of(&1), Some(3));
//! assert_eq!(source.index_of_sub([1, 5]), Some(3));
//! assert!(!source.contains_sub([9, 6]));
//!
//! let readings = [0.5, 1.02, 1.98, 3.01];
//! assert_eq!(readings.index_of_sub_within([1.0, 2.0], 0.05), Some(1));
//! ```
//!
//! ## Equality policies
//!
//! The generic functions ending in `_with` take any [`ElementEq`] policy:
//! [`Exact`], [`Tolerance`], [`IgnoreAsciiCase`], or a closure. The `_by`
//! variants accept a closure directly.
//!
//! ```
//! # use seqsearch::search::*;
//! let words = ["Alpha", "beta", "Gamma", "beta"];
//! assert_eq!(index_of_sub_with(&words, &["BETA", "gamma"], 0, &IgnoreAsciiCase), Some(1));
//! assert_eq!(last_index_of_by(&words, &"BETA", isize::MAX, |w, t| w.eq_ignore_ascii_case(t)), Some(3));
//! ```
//!
//! ## Bounds
//!
//! Forward searches clamp a negative start to `0`, whereas backward searches
//! treat a negative end as "nothing to search" and return [`None`]. Ends past
//! the sequence are clamped to the last admissible position. A
//! [`SearchDirection`] selects between the two at runtime, and
//! [`SearchDirection::unbounded`] provides a bound covering the whole sequence.
//!
//! ## Restricting the search range
//!
//! A search can be confined to part of a sequence with
//! [`search_in`](ToRangeSearch::search_in),
//! [`search_in_first`](ToRangeSearch::search_in_first), or
//! [`search_in_last`](ToRangeSearch::search_in_last). Matches must lie
//! entirely within the range, and all indices are reported with respect to
//! the original sequence.
//!
//! ```
//! # use seqsearch::search::*;
//! let primer = b"ACGTACGTACGT";
//! assert_eq!(primer.search_in(2..).index_of_sub(b"ACGT"), Some(4));
//! assert_eq!(primer.search_in_first(6).last_index_of_sub(b"ACGT"), Some(0));
//! ```
//!
//! [`Tolerance`]: crate::math::Tolerance

/// Direction-agnostic dispatch.
mod direction;
/// Element equality policies.
mod equality;
/// Single element search.
mod element;
/// Searches restricted to a range of the sequence.
mod range_search;
/// Conversion to and from signed sentinel indices.
mod sentinel;
/// Subsequence search.
mod subsequence;
/// Extension traits for sequences.
mod traits;

#[cfg(test)]
mod test;

pub use direction::*;
pub use element::{index_of_by, index_of_with, last_index_of_by, last_index_of_with};
pub use equality::*;
pub use range_search::*;
pub use sentinel::*;
pub use subsequence::*;
pub use traits::*;
