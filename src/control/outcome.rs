//! Outcome type - a success value or a failure value.
//!
//! This module provides `Outcome<T, E>`, which is either `Ok(T)` or
//! `Err(E)`. The error type defaults to [`Arbitrary`], so an outcome that
//! failed without further detail is still a single, comparable type.
//!
//! # Examples
//!
//! ```rust
//! use explicit::control::{Outcome, err, ok};
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     match input.parse() {
//!         Ok(number) => ok(number),
//!         Err(_) => err(format!("not a number: {input}")),
//!     }
//! }
//!
//! let doubled = parse("21").and_then(|n| ok(n * 2));
//! assert_eq!(doubled, Outcome::Ok(42));
//!
//! let message = parse("x").match_with(|n| n.to_string(), |error| error);
//! assert_eq!(message, "not a number: x");
//! ```

use std::fmt;

use super::arbitrary::Arbitrary;
use super::maybe::Maybe;
use crate::error::{ExpectError, NotComparableError, UnwrapError};
use crate::policy::Policy;

/// A value that is either a success (`Ok`) or a failure (`Err`).
///
/// # Type Parameters
///
/// * `T` - The success type
/// * `E` - The failure type, [`Arbitrary`] unless stated otherwise
///
/// # Examples
///
/// ```rust
/// use explicit::control::{Arbitrary, Outcome, err, err_arbitrary};
///
/// let detailed: Outcome<i32, &str> = err("explicit");
/// let bare: Outcome<i32> = err_arbitrary();
/// assert!(detailed.is_err() && bare.is_err());
/// assert_eq!(bare.unwrap_err(), Arbitrary);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<T, E = Arbitrary> {
    /// A success value.
    Ok(T),
    /// A failure value.
    Err(E),
}

/// Wraps `value` in `Ok`.
#[inline]
pub const fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Wraps `error` in `Err`.
#[inline]
pub const fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}

/// Creates an `Err` without detail, holding the [`Arbitrary`] placeholder.
#[inline]
pub const fn err_arbitrary<T>() -> Outcome<T> {
    Outcome::Err(Arbitrary)
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` if this is an `Ok`.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns `false` for `Err`, otherwise the verdict of `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::{Outcome, err, ok};
    ///
    /// assert!(ok::<i32, ()>(2).ok_and(|n| *n > 1));
    /// assert!(!err::<i32, ()>(()).ok_and(|_| true));
    /// ```
    #[inline]
    pub fn ok_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Ok(value) => predicate(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `false` for `Ok`, otherwise the verdict of `predicate` on the
    /// error.
    #[inline]
    pub fn err_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&E) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => predicate(error),
        }
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Borrows both payloads, producing an `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns the success value as a `Maybe`, discarding any error.
    #[inline]
    pub fn ok_value(self) -> Maybe<T> {
        match self {
            Self::Ok(value) => Maybe::Some(value),
            Self::Err(_) => Maybe::None,
        }
    }

    /// Returns the error as a `Maybe`, discarding any success value.
    #[inline]
    pub fn err_value(self) -> Maybe<E> {
        match self {
            Self::Ok(_) => Maybe::None,
            Self::Err(error) => Maybe::Some(error),
        }
    }

    // =========================================================================
    // Unwrapping
    // =========================================================================

    /// Returns the success value, or an [`UnwrapError`] for `Err`.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapError`] if this is an `Err`.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(_) => Err(UnwrapError::err()),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with "value is an Err" if this is an `Err`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the success value, or an [`ExpectError`] carrying `message`.
    ///
    /// # Errors
    ///
    /// Returns [`ExpectError`] if this is an `Err`.
    #[inline]
    pub fn try_expect(self, message: impl Into<String>) -> Result<T, ExpectError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(_) => Err(ExpectError::new(message)),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is an `Err`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self.try_expect(message) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the error, or an [`UnwrapError`] for `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapError`] if this is an `Ok`.
    #[inline]
    pub fn try_unwrap_err(self) -> Result<E, UnwrapError> {
        match self {
            Self::Ok(_) => Err(UnwrapError::ok()),
            Self::Err(error) => Ok(error),
        }
    }

    /// Returns the error.
    ///
    /// # Panics
    ///
    /// Panics with "value is an Ok" if this is an `Ok`.
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self.try_unwrap_err() {
            Ok(error) => error,
            Err(unwrap_error) => panic!("{unwrap_error}"),
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value, or computes one from the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::{Outcome, err, ok};
    ///
    /// let failed: Outcome<usize, &str> = err("four");
    /// assert_eq!(failed.unwrap_or_else(str::len), 4);
    /// assert_eq!(ok::<usize, &str>(1).unwrap_or_else(|_| panic!("not called")), 1);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => function(error),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Returns `self` if it is an `Err`, otherwise `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::{Outcome, err, ok};
    ///
    /// assert_eq!(ok::<i32, &str>(1).and(ok::<i32, &str>(2)), Outcome::Ok(2));
    /// assert_eq!(err::<i32, &str>("e").and(ok::<i32, &str>(2)), Outcome::Err("e"));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// `function` is only called for `Ok`.
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns `other` if this is an `Err`, otherwise `self`.
    #[inline]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(_) => other,
        }
    }

    /// Recovers from an `Err` with a computation that may itself fail.
    ///
    /// `function` is only called for `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::{Outcome, err, ok};
    ///
    /// let recovered: Outcome<i32, String> =
    ///     err::<i32, &str>("retry").or_else(|reason| if reason == "retry" { ok(1) } else { err(reason.to_string()) });
    /// assert_eq!(recovered, Outcome::Ok(1));
    /// ```
    #[inline]
    pub fn or_else<F, O>(self, function: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => function(error),
        }
    }

    /// Dispatches to exactly one handler and returns its result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::{Outcome, err, ok};
    ///
    /// let describe = |outcome: Outcome<i32, &str>| {
    ///     outcome.match_with(|n| format!("got {n}"), |e| format!("failed: {e}"))
    /// };
    /// assert_eq!(describe(ok(3)), "got 3");
    /// assert_eq!(describe(err("boom")), "failed: boom");
    /// ```
    #[inline]
    pub fn match_with<R, O, F>(self, on_ok: O, on_err: F) -> R
    where
        O: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }
}

// =============================================================================
// Lenient Equality
// =============================================================================

impl<T: PartialEq, E> Outcome<T, E> {
    /// Compares this outcome against a bare value, under the current policy.
    ///
    /// See [`Outcome::try_eq_value_with`].
    ///
    /// # Errors
    ///
    /// Returns [`NotComparableError`] unless lenient equality is enabled.
    #[inline]
    pub fn try_eq_value(&self, value: &T) -> Result<bool, NotComparableError> {
        self.try_eq_value_with(value, &Policy::current())
    }

    /// Compares this outcome against a bare value.
    ///
    /// With [`Policy::lenient_equality`] enabled, an `Ok` equals a bare
    /// value when its payload does, and an `Err` never does. Otherwise the
    /// comparison is refused.
    ///
    /// # Errors
    ///
    /// Returns [`NotComparableError`] unless `policy` enables lenient
    /// equality.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::ok;
    /// use explicit::policy::Policy;
    ///
    /// let strict = Policy::default();
    /// let lenient = Policy::default().with_lenient_equality(true);
    ///
    /// assert!(ok::<i32, ()>(1).try_eq_value_with(&1, &strict).is_err());
    /// assert_eq!(ok::<i32, ()>(1).try_eq_value_with(&1, &lenient), Ok(true));
    /// ```
    pub fn try_eq_value_with(&self, value: &T, policy: &Policy) -> Result<bool, NotComparableError> {
        if !policy.lenient_equality() {
            return Err(NotComparableError {
                left: "Result",
                right: std::any::type_name::<T>(),
            });
        }
        Ok(self.ok_and(|held| held == value))
    }
}

// =============================================================================
// Display
// =============================================================================

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(formatter, "Ok({value})"),
            Self::Err(error) => write!(formatter, "Err({error})"),
        }
    }
}

// =============================================================================
// std Interop
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}
