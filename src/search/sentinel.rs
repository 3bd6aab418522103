/// The index reported for "not found" by APIs that use a signed sentinel
/// rather than [`Option`].
pub const NOT_FOUND: isize = -1;

/// Converts search results to the signed sentinel convention, where a missing
/// match is [`NOT_FOUND`].
pub trait IndexSentinel {
    /// Returns the index as an [`isize`], or [`NOT_FOUND`] if there is none.
    fn or_not_found(self) -> isize;
}

impl IndexSentinel for Option<usize> {
    #[inline]
    fn or_not_found(self) -> isize {
        // Slice indices never exceed `isize::MAX`
        self.and_then(|i| isize::try_from(i).ok()).unwrap_or(NOT_FOUND)
    }
}

/// Converts a signed sentinel index back into an [`Option`]. Any negative
/// value is treated as [`NOT_FOUND`].
#[inline]
#[must_use]
pub fn from_sentinel(index: isize) -> Option<usize> {
    usize::try_from(index).ok()
}
