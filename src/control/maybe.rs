//! Maybe type - a value or its absence.
//!
//! This module provides `Maybe<T>`, which is either `Some(T)` or `None`.
//! Unlike a null sentinel, absence has to be handled explicitly: the value is
//! only reachable through combinators or an explicit (possibly failing)
//! unwrap.
//!
//! There are two families of combinators:
//!
//! - `map`, `map_or` and `map_or_else` take a callback returning a plain
//!   value and re-wrap it in `Some`.
//! - `and_then` and `or_else` take a callback that returns a `Maybe` itself,
//!   which allows flat chaining without nesting.
//!
//! Every callback-taking combinator is lazy: the callback only runs on the
//! branch that needs it.
//!
//! # Examples
//!
//! ```rust
//! use explicit::control::{Maybe, none, some};
//!
//! fn lookup(id: u32) -> Maybe<&'static str> {
//!     if id == 1 { some("alice") } else { none() }
//! }
//!
//! let greeting = lookup(1)
//!     .map(|name| format!("hello, {name}"))
//!     .unwrap_or_else(|| "who are you?".to_string());
//! assert_eq!(greeting, "hello, alice");
//!
//! let missing = lookup(2).and_then(|name| lookup(name.len() as u32));
//! assert!(missing.is_none());
//! ```

use std::fmt;

use super::arbitrary::Arbitrary;
use super::outcome::Outcome;
use crate::error::{ExpectError, UnwrapError};

/// A value that is either present (`Some`) or absent (`None`).
///
/// `Some` stores whatever it is given, including absent-like values such as
/// another `None`; there is no implicit flattening.
///
/// # Examples
///
/// ```rust
/// use explicit::control::{Maybe, none, some};
///
/// let nested: Maybe<Maybe<i32>> = some(none());
/// assert!(nested.is_some());
/// assert_eq!(nested.unwrap(), Maybe::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// No value.
    #[default]
    None,
    /// Exactly one value.
    Some(T),
}

/// Wraps `value` in `Some`.
#[inline]
pub const fn some<T>(value: T) -> Maybe<T> {
    Maybe::Some(value)
}

/// Creates a `None`.
#[inline]
pub const fn none<T>() -> Maybe<T> {
    Maybe::None
}

impl<T> Maybe<T> {
    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` if this is a `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::{Maybe, some};
    ///
    /// assert!(some(1).is_some());
    /// assert!(!Maybe::<i32>::None.is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is a `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `false` for `None`, otherwise the verdict of `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::{Maybe, some};
    ///
    /// assert!(some(4).some_and(|n| n % 2 == 0));
    /// assert!(!some(3).some_and(|n| n % 2 == 0));
    /// assert!(!Maybe::<i32>::None.some_and(|_| true));
    /// ```
    #[inline]
    pub fn some_and<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    /// Returns `true` for `None`, otherwise the verdict of `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::{Maybe, some};
    ///
    /// assert!(Maybe::<i32>::None.none_or(|_| false));
    /// assert!(some(2).none_or(|n| *n > 1));
    /// assert!(!some(0).none_or(|n| *n > 1));
    /// ```
    #[inline]
    pub fn none_or<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => true,
        }
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts to a sequence of zero or one elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::{Maybe, some};
    ///
    /// assert_eq!(some(7).to_sequence(), vec![7]);
    /// assert!(Maybe::<i32>::None.to_sequence().is_empty());
    /// ```
    #[inline]
    pub fn to_sequence(self) -> Vec<T> {
        match self {
            Self::Some(value) => vec![value],
            Self::None => Vec::new(),
        }
    }

    /// Borrows the held value, producing a `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Converts into an `Outcome`, using `Arbitrary` as the error of a `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::{Arbitrary, Maybe, Outcome, some};
    ///
    /// assert_eq!(some(1).ok(), Outcome::Ok(1));
    /// assert_eq!(Maybe::<i32>::None.ok(), Outcome::Err(Arbitrary));
    /// ```
    #[inline]
    pub fn ok(self) -> Outcome<T, Arbitrary> {
        self.ok_or(Arbitrary)
    }

    /// Converts into an `Outcome`, using `error` as the error of a `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::{Maybe, Outcome, some};
    ///
    /// assert_eq!(Maybe::<i32>::None.ok_or("wow"), Outcome::Err("wow"));
    /// assert_eq!(some(1).ok_or("x"), Outcome::Ok(1));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(error),
        }
    }

    /// Like [`Maybe::ok_or`], but builds the error lazily.
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(error()),
        }
    }

    // =========================================================================
    // Unwrapping
    // =========================================================================

    /// Returns the held value, or an [`UnwrapError`] for `None`.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapError`] if this is a `None`.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(UnwrapError::none()),
        }
    }

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics with the [`UnwrapError`] message if this is a `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::some;
    ///
    /// assert_eq!(some("x").unwrap(), "x");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the held value, or an [`ExpectError`] carrying `message`.
    ///
    /// # Errors
    ///
    /// Returns [`ExpectError`] if this is a `None`.
    #[inline]
    pub fn try_expect(self, message: impl Into<String>) -> Result<T, ExpectError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(ExpectError::new(message)),
        }
    }

    /// Returns the held value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is a `None`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self.try_expect(message) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the held value or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the held value or the result of `default`.
    ///
    /// `default` is only called for `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::{Maybe, some};
    ///
    /// assert_eq!(some(1).unwrap_or_else(|| panic!("not called")), 1);
    /// assert_eq!(Maybe::None.unwrap_or_else(|| 2), 2);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => default(),
        }
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Calls `function` with the held value for its side effect, then
    /// returns `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::some;
    ///
    /// let mut seen = Vec::new();
    /// let value = some(3).tap_some(|n| seen.push(*n));
    /// assert_eq!(value, some(3));
    /// assert_eq!(seen, vec![3]);
    /// ```
    #[inline]
    pub fn tap_some<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            function(value);
        }
        self
    }

    /// Applies `function` to the held value and wraps the result in `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::{Maybe, some};
    ///
    /// assert_eq!(some(2).map(|n| n * 10), some(20));
    /// assert_eq!(Maybe::<i32>::None.map(|n| n * 10), Maybe::None);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Maps the held value, or substitutes `Some(default)` for `None`.
    ///
    /// Note that the result is still a `Maybe`, and for `None` it is a
    /// `Some` holding `default`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::{Maybe, some};
    ///
    /// assert_eq!(some(2).map_or(0, |n| n + 1), some(3));
    /// assert_eq!(Maybe::<i32>::None.map_or(0, |n| n + 1), some(0));
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, default: U, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::Some(default),
        }
    }

    /// Maps the held value, or asks `default` for a fallback.
    ///
    /// For `None`, `default` is called; a present fallback is wrapped in
    /// `Some`, an absent one yields `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::{Maybe, some};
    ///
    /// let none: Maybe<i32> = Maybe::None;
    /// assert_eq!(none.map_or_else(|| Some(0), |n| n + 1), some(0));
    /// assert_eq!(none.map_or_else(|| None, |n| n + 1), Maybe::None);
    /// assert_eq!(some(1).map_or_else(|| None, |n| n + 1), some(2));
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, default: D, function: F) -> Maybe<U>
    where
        D: FnOnce() -> Option<U>,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::from(default()),
        }
    }

    // =========================================================================
    // Chaining
    // =========================================================================

    /// Returns `self` if it is a `Some`, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            present @ Self::Some(_) => present,
            Self::None => other,
        }
    }

    /// Returns `self` if it is a `Some`, otherwise the `Maybe` produced by
    /// `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::{Maybe, some};
    ///
    /// assert_eq!(Maybe::None.or_else(|| some(9)), some(9));
    /// assert_eq!(some(1).or_else(|| panic!("not called")), some(1));
    /// ```
    #[inline]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            present @ Self::Some(_) => present,
            Self::None => function(),
        }
    }

    /// Returns `None` if this is a `None`, otherwise `other`.
    #[inline]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Maybe::None,
        }
    }

    /// Chains a computation that may itself be absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::{Maybe, none, some};
    ///
    /// let half = |n: i32| if n % 2 == 0 { some(n / 2) } else { none() };
    /// assert_eq!(some(8).and_then(half).and_then(half), some(2));
    /// assert_eq!(some(6).and_then(half).and_then(half), Maybe::None);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    /// Pairs the held values of `self` and `other` when both are `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::{Maybe, some};
    ///
    /// assert_eq!(some(2).zip(some(3)), some((2, 3)));
    /// assert_eq!(some(2).zip(Maybe::<i32>::None), Maybe::None);
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        self.zip_with(other, |left, right| (left, right))
    }

    /// Combines the held values of `self` and `other` with `function` when
    /// both are `Some`.
    #[inline]
    pub fn zip_with<U, R, F>(self, other: Maybe<U>, function: F) -> Maybe<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Self::Some(left), Maybe::Some(right)) => Maybe::Some(function(left, right)),
            _ => Maybe::None,
        }
    }
}

// =============================================================================
// Display
// =============================================================================

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// std Interop
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        Option::from(self).into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_some_is_some() {
        let value = some(1);
        assert!(value.is_some());
        assert!(!value.is_none());
    }

    #[rstest]
    fn test_none_is_none() {
        let value: Maybe<i32> = none();
        assert!(value.is_none());
        assert!(!value.is_some());
    }

    #[rstest]
    fn test_default_is_none() {
        assert_eq!(Maybe::<String>::default(), Maybe::None);
    }

    #[rstest]
    #[case(some(5), "Some(5)")]
    #[case(none(), "None")]
    fn test_display(#[case] value: Maybe<i32>, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[rstest]
    fn test_std_option_roundtrip() {
        let original: Option<i32> = Some(3);
        let maybe: Maybe<i32> = original.into();
        assert_eq!(maybe, some(3));
        assert_eq!(Option::from(maybe), Some(3));
        assert_eq!(Option::<i32>::from(Maybe::None), None);
    }

    #[rstest]
    fn test_into_iter_yields_held_value() {
        let collected: Vec<i32> = some(4).into_iter().collect();
        assert_eq!(collected, vec![4]);
        assert_eq!(none::<i32>().into_iter().count(), 0);
    }

    #[rstest]
    #[should_panic(expected = "value is None")]
    fn test_unwrap_none_panics() {
        none::<i32>().unwrap();
    }
}
