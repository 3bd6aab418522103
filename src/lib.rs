#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

/// Floating point traits and tolerances.
pub mod math;
/// Element and subsequence search, forward and backward.
pub mod search;

/// Generate random sequences.
#[cfg(feature = "rand")]
pub mod generate;

#[cfg(feature = "fuzzing")]
pub mod arbitrary;

mod private {
    pub trait Sealed {}
}

/// Common structures and traits re-exported
pub mod prelude {
    #[cfg(feature = "rand")]
    pub use crate::generate::rand_sequence;
    pub use crate::math::{Float, Tolerance, ToleranceError};
    pub use crate::search::{
        ElementEq, Exact, IgnoreAsciiCase, IndexSentinel, NOT_FOUND, SearchDirection, SequenceSearch, ToRangeSearch,
        ToleranceSearch,
    };
}
