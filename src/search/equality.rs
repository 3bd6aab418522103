use crate::math::{Float, Tolerance};

/// A policy deciding when an element of the source matches an element of the
/// target or pattern. Implemented for [`Exact`], [`Tolerance`],
/// [`IgnoreAsciiCase`], and `Fn(&T, &T) -> bool` closures (custom policies).
///
/// The first argument is always the element from the source being searched
/// and the second is the element being searched for.
pub trait ElementEq<T: ?Sized> {
    fn elements_eq(&self, source: &T, target: &T) -> bool;
}

/// Equality through [`PartialEq`]. For slices of [`Option`], `None` matches
/// `None` and never matches `Some`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Exact;

impl<T: PartialEq + ?Sized> ElementEq<T> for Exact {
    #[inline]
    fn elements_eq(&self, source: &T, target: &T) -> bool {
        source == target
    }
}

impl<T: Float> ElementEq<T> for Tolerance<T> {
    #[inline]
    fn elements_eq(&self, source: &T, target: &T) -> bool {
        self.within(*source, *target)
    }
}

impl<T: Float> ElementEq<Option<T>> for Tolerance<T> {
    #[inline]
    fn elements_eq(&self, source: &Option<T>, target: &Option<T>) -> bool {
        match (source, target) {
            (Some(a), Some(b)) => self.within(*a, *b),
            (None, None) => true,
            _ => false,
        }
    }
}

/// Equality ignoring ASCII case, for bytes, characters, and strings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct IgnoreAsciiCase;

impl ElementEq<u8> for IgnoreAsciiCase {
    #[inline]
    fn elements_eq(&self, source: &u8, target: &u8) -> bool {
        source.eq_ignore_ascii_case(target)
    }
}

impl ElementEq<char> for IgnoreAsciiCase {
    #[inline]
    fn elements_eq(&self, source: &char, target: &char) -> bool {
        source.eq_ignore_ascii_case(target)
    }
}

impl ElementEq<str> for IgnoreAsciiCase {
    #[inline]
    fn elements_eq(&self, source: &str, target: &str) -> bool {
        source.eq_ignore_ascii_case(target)
    }
}

impl ElementEq<String> for IgnoreAsciiCase {
    #[inline]
    fn elements_eq(&self, source: &String, target: &String) -> bool {
        source.eq_ignore_ascii_case(target)
    }
}

impl ElementEq<&str> for IgnoreAsciiCase {
    #[inline]
    fn elements_eq(&self, source: &&str, target: &&str) -> bool {
        source.eq_ignore_ascii_case(target)
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> ElementEq<T> for F {
    #[inline]
    fn elements_eq(&self, source: &T, target: &T) -> bool {
        self(source, target)
    }
}
