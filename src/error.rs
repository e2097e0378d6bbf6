//! Error taxonomy shared by the combinator types.
//!
//! Every failure the library can signal is a small struct implementing
//! [`std::error::Error`]. Fallible `try_*` operations return the precise
//! struct; [`CombinatorError`] unifies them so callers can propagate any of
//! them with `?`.
//!
//! The panicking forms (`unwrap`, `expect`, `unwrap_err`) panic with the
//! `Display` text of the corresponding error.
//!
//! # Examples
//!
//! ```rust
//! use explicit::control::{Maybe, none};
//! use explicit::error::{CombinatorError, UnwrapError};
//!
//! fn first_name(name: Maybe<&str>) -> Result<&str, CombinatorError> {
//!     Ok(name.try_unwrap()?)
//! }
//!
//! let error = first_name(none()).unwrap_err();
//! assert_eq!(error, CombinatorError::Unwrap(UnwrapError::none()));
//! assert_eq!(error.to_string(), "value is None");
//! ```

use std::fmt;

/// The two algebras a combinator can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algebra {
    /// The Option algebra (`Maybe`).
    Option,
    /// The Result algebra (`Outcome`).
    Result,
}

impl fmt::Display for Algebra {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Option => formatter.write_str("an Option"),
            Self::Result => formatter.write_str("a Result"),
        }
    }
}

/// Which input of a combinator had the wrong algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentRole {
    /// A value passed directly as an argument, as in `or(other)`.
    Argument,
    /// The value returned by a caller-supplied block, as in `and_then`.
    BlockResult,
}

impl fmt::Display for ArgumentRole {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argument => formatter.write_str("argument must be"),
            Self::BlockResult => formatter.write_str("block must return"),
        }
    }
}

/// Raised when a value is unwrapped from the variant that holds nothing
/// extractable for that operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct UnwrapError {
    /// Describes the variant that was found.
    pub message: &'static str,
}

impl UnwrapError {
    /// `unwrap` on a `None`.
    pub const fn none() -> Self {
        Self {
            message: "value is None",
        }
    }

    /// `unwrap` on an `Err`.
    pub const fn err() -> Self {
        Self {
            message: "value is an Err",
        }
    }

    /// `unwrap_err` on an `Ok`.
    pub const fn ok() -> Self {
        Self {
            message: "value is an Ok",
        }
    }
}

/// Raised by `expect`, carrying the caller-supplied diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ExpectError {
    /// The message given to `expect`.
    pub message: String,
}

impl ExpectError {
    /// Creates an `ExpectError` with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Raised when a combinator receives an argument or block result of the
/// wrong algebra.
///
/// # Examples
///
/// ```rust
/// use explicit::error::{Algebra, ArgumentError, ArgumentRole};
///
/// let error = ArgumentError {
///     operation: "Maybe::and_then",
///     role: ArgumentRole::BlockResult,
///     expected: Algebra::Option,
///     found: "Symbol",
/// };
/// assert_eq!(
///     error.to_string(),
///     "Maybe::and_then: block must return an Option, got Symbol"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{operation}: {role} {expected}, got {found}")]
pub struct ArgumentError {
    /// The combinator that rejected the value.
    pub operation: &'static str,
    /// Whether the rejected value was an argument or a block result.
    pub role: ArgumentRole,
    /// The algebra the combinator requires.
    pub expected: Algebra,
    /// Type name of the rejected value.
    pub found: &'static str,
}

/// Raised when equality is attempted across incompatible types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot compare {left} with {right}")]
pub struct NotComparableError {
    /// Type name of the left-hand side.
    pub left: &'static str,
    /// Type name of the right-hand side.
    pub right: &'static str,
}

/// Raised by presence enforcement when a value is blank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected a present value, got a blank {type_name}")]
pub struct NotPresentError {
    /// Type name of the blank value.
    pub type_name: &'static str,
}

/// Raised when a fallback value's type disagrees with the original's type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("fallback must be a {expected}, got {found}")]
pub struct TypeMismatchError {
    /// Type name of the original value.
    pub expected: &'static str,
    /// Type name of the fallback.
    pub found: &'static str,
}

/// Raised when a value is asserted to be a Result and is not.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected a Result, got {found}")]
pub struct ResultRequiredError {
    /// Type name of the value that was found instead.
    pub found: &'static str,
}

/// Any error raised by the combinator types.
///
/// Each variant wraps one of the error structs of this module and converts
/// from it, so `?` works across the whole taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CombinatorError {
    /// See [`NotPresentError`].
    #[error(transparent)]
    NotPresent(#[from] NotPresentError),
    /// See [`TypeMismatchError`].
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatchError),
    /// See [`UnwrapError`].
    #[error(transparent)]
    Unwrap(#[from] UnwrapError),
    /// See [`ExpectError`].
    #[error(transparent)]
    Expect(#[from] ExpectError),
    /// See [`ArgumentError`].
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    /// See [`ResultRequiredError`].
    #[error(transparent)]
    ResultRequired(#[from] ResultRequiredError),
    /// See [`NotComparableError`].
    #[error(transparent)]
    NotComparable(#[from] NotComparableError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(UnwrapError::none(), "value is None")]
    #[case(UnwrapError::err(), "value is an Err")]
    #[case(UnwrapError::ok(), "value is an Ok")]
    fn test_unwrap_error_display(#[case] error: UnwrapError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn test_expect_error_display_is_the_message() {
        assert_eq!(ExpectError::new("no user").to_string(), "no user");
    }

    #[rstest]
    fn test_argument_error_display_for_argument() {
        let error = ArgumentError {
            operation: "Outcome::or",
            role: ArgumentRole::Argument,
            expected: Algebra::Result,
            found: "Integer",
        };
        assert_eq!(
            error.to_string(),
            "Outcome::or: argument must be a Result, got Integer"
        );
    }

    #[rstest]
    fn test_not_comparable_error_display() {
        let error = NotComparableError {
            left: "Result",
            right: "Integer",
        };
        assert_eq!(error.to_string(), "cannot compare Result with Integer");
    }

    #[rstest]
    fn test_combinator_error_is_transparent() {
        let error: CombinatorError = ResultRequiredError { found: "Nil" }.into();
        assert_eq!(error.to_string(), "expected a Result, got Nil");
        assert!(matches!(error, CombinatorError::ResultRequired(_)));
    }

    #[rstest]
    fn test_combinator_error_source_is_none_for_leaf_errors() {
        use std::error::Error;

        let error = CombinatorError::from(UnwrapError::none());
        assert!(error.source().is_none());
    }
}
