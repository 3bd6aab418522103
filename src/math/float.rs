use std::{
    fmt::{Debug, Display},
    ops::{Add, Neg, Sub},
};

use crate::private::Sealed;

/// Trait for providing generic functionality over floating point numbers.
pub trait Float:
    Sub<Output = Self> + Add<Output = Self> + Neg<Output = Self> + Default + PartialEq + PartialOrd + Copy + Debug + Display + Sealed
{
    const ZERO: Self;

    /// Generic absolute value for [`Float`]
    #[must_use]
    fn abs(self) -> Self;

    /// Generic `is_nan` calculation for [`Float`]
    #[must_use]
    fn is_nan(self) -> bool;
}

/// Implement [`Float`] for multiple floating point primitive types
macro_rules! impl_float {
    {$($ty:ty),* } => {
        $(
        impl Sealed for $ty {}

        impl Float for $ty {
            const ZERO: Self = 0.0;

            #[inline]
            fn abs(self) -> Self {
                self.abs()
            }

            #[inline]
            fn is_nan(self) -> bool {
                self.is_nan()
            }
        } )*
     }
}

impl_float!(f32, f64);
