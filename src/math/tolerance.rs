use super::Float;
use std::{error::Error, fmt};

/// An absolute tolerance `eps` for comparing floating point values. Two values
/// `a` and `b` are considered equal when `a == b` or `|a - b| <= eps`.
///
/// The `a == b` shortcut means a tolerance of zero behaves exactly like the
/// primitive `==`: `0.0` equals `-0.0`, infinities equal themselves, and `NaN`
/// never equals anything.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Tolerance<T> {
    eps: T,
}

impl<T: Float> Tolerance<T> {
    /// A tolerance of zero, i.e., exact floating point equality.
    #[inline]
    #[must_use]
    pub const fn exact() -> Self {
        Self { eps: T::ZERO }
    }

    /// Creates a new tolerance.
    ///
    /// ## Errors
    ///
    /// Returns [`ToleranceError::NaN`] if `eps` is `NaN` and
    /// [`ToleranceError::Negative`] if `eps` is less than zero.
    #[inline]
    pub fn new(eps: T) -> Result<Self, ToleranceError> {
        if eps.is_nan() {
            Err(ToleranceError::NaN)
        } else if eps < T::ZERO {
            Err(ToleranceError::Negative)
        } else {
            Ok(Self { eps })
        }
    }

    /// Creates a new tolerance, replacing a negative or `NaN` `eps` with zero.
    #[inline]
    #[must_use]
    pub fn clamped(eps: T) -> Self {
        if eps >= T::ZERO {
            Self { eps }
        } else {
            Self::exact()
        }
    }

    /// The maximum absolute difference at which two values are equal.
    #[inline]
    #[must_use]
    pub fn eps(self) -> T {
        self.eps
    }

    /// Returns `true` if `a` and `b` are within the tolerance. Symmetric in its
    /// arguments.
    #[inline]
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn within(self, a: T, b: T) -> bool {
        a == b || (a - b).abs() <= self.eps
    }
}

/// Errors from constructing a [`Tolerance`].
#[non_exhaustive]
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum ToleranceError {
    Negative,
    NaN,
}

impl fmt::Display for ToleranceError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ToleranceError::Negative => write!(f, "the tolerance must not be negative"),
            ToleranceError::NaN => write!(f, "the tolerance must not be NaN"),
        }
    }
}

impl fmt::Debug for ToleranceError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for ToleranceError {}
