//! Checked combinators on `Maybe<Value>`.
//!
//! These mirror the statically typed combinators, but accept arguments and
//! block results as [`Value`]s. Arguments that must be an Option are always
//! checked; block results are checked according to the current
//! [`Policy`].

use super::check::require_option;
use super::value::Value;
use crate::control::Maybe;
use crate::error::ArgumentError;
use crate::policy::Policy;

impl Maybe<Value> {
    /// Returns `self` if it is a `Some`, otherwise `other`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError`] if `other` is not an Option.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::{Maybe, some};
    /// use explicit::dynamic::Value;
    ///
    /// let fallback = Maybe::<Value>::None.or_value(Value::some(2)).unwrap();
    /// assert_eq!(fallback, some(Value::from(2)));
    /// assert!(some(Value::from(1)).or_value(Value::from(2)).is_err());
    /// ```
    pub fn or_value(self, other: Value) -> Result<Self, ArgumentError> {
        let other = require_option(other, "Maybe::or")?;
        Ok(self.or(other))
    }

    /// Returns `None` if this is a `None`, otherwise `other`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError`] if `other` is not an Option.
    pub fn and_value(self, other: Value) -> Result<Self, ArgumentError> {
        let other = require_option(other, "Maybe::and")?;
        Ok(self.and(other))
    }

    /// Chains a block whose result should be an Option.
    ///
    /// For `None` the block is not called and `None` is returned. For
    /// `Some`, the block result is checked by the current policy; when the
    /// policy is lenient, a non-Option result is returned as is.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError`] if the policy is strict and the block did
    /// not return an Option.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::some;
    /// use explicit::dynamic::Value;
    ///
    /// let chained = some(Value::from(2)).and_then_value(|_| Value::some(3));
    /// assert_eq!(chained, Ok(Value::some(3)));
    ///
    /// let rejected = some(Value::from(2)).and_then_value(|_| Value::from(3));
    /// assert!(rejected.is_err());
    /// ```
    pub fn and_then_value<F>(self, function: F) -> Result<Value, ArgumentError>
    where
        F: FnOnce(Value) -> Value,
    {
        match self {
            Self::Some(value) => Policy::current().check_option(function(value), "Maybe::and_then"),
            Self::None => Ok(Value::none()),
        }
    }

    /// Falls back to a block whose result should be an Option.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError`] if the policy is strict and the block did
    /// not return an Option.
    pub fn or_else_value<F>(self, function: F) -> Result<Value, ArgumentError>
    where
        F: FnOnce() -> Value,
    {
        match self {
            present @ Self::Some(_) => Ok(Value::from(present)),
            Self::None => Policy::current().check_option(function(), "Maybe::or_else"),
        }
    }

    /// Maps the held value, or asks `default` for a fallback that is kept
    /// only when truthy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::{Maybe, some};
    /// use explicit::dynamic::Value;
    ///
    /// let none: Maybe<Value> = Maybe::None;
    /// assert_eq!(none.clone().map_or_else_value(|| Value::from(0), |v| v), some(Value::from(0)));
    /// assert_eq!(none.map_or_else_value(|| Value::Nil, |v| v), Maybe::None);
    /// ```
    pub fn map_or_else_value<D, F>(self, default: D, function: F) -> Self
    where
        D: FnOnce() -> Value,
        F: FnOnce(Value) -> Value,
    {
        match self {
            Self::Some(value) => Self::Some(function(value)),
            Self::None => {
                let fallback = default();
                if fallback.is_truthy() {
                    Self::Some(fallback)
                } else {
                    Self::None
                }
            }
        }
    }

    /// Pairs both held values into a two-element array when both are `Some`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError`] if `other` is not an Option.
    pub fn zip_value(self, other: Value) -> Result<Self, ArgumentError> {
        let other = require_option(other, "Maybe::zip")?;
        Ok(self.zip_with(other, |left, right| Value::Array(vec![left, right])))
    }

    /// Combines both held values with `function` when both are `Some`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError`] if `other` is not an Option.
    pub fn zip_with_value<F>(self, other: Value, function: F) -> Result<Self, ArgumentError>
    where
        F: FnOnce(Value, Value) -> Value,
    {
        let other = require_option(other, "Maybe::zip_with")?;
        Ok(self.zip_with(other, function))
    }
}
