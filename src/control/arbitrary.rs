//! The `Arbitrary` placeholder used as the payload of a detail-less `Err`.

use std::fmt;

/// Placeholder payload of an `Err` constructed without an explicit value.
///
/// `Outcome<T>` defaults its error type to `Arbitrary`, so "errored, no
/// further detail" is a single, comparable type tag that is still
/// distinguishable from an `Err` carrying an explicit absent-like payload.
///
/// # Examples
///
/// ```rust
/// use explicit::control::{Arbitrary, Outcome, err_arbitrary};
///
/// let failed: Outcome<i32> = err_arbitrary();
/// assert_eq!(failed.unwrap_err(), Arbitrary);
/// assert_eq!(failed, Outcome::Err(Arbitrary));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arbitrary;

impl fmt::Display for Arbitrary {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Arbitrary")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_arbitrary_is_equal_to_itself() {
        assert_eq!(Arbitrary, Arbitrary);
        assert_eq!(Arbitrary::default(), Arbitrary);
    }

    #[rstest]
    fn test_arbitrary_display() {
        assert_eq!(Arbitrary.to_string(), "Arbitrary");
    }
}
