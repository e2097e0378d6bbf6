//! Checked combinators on `Outcome<Value, Value>`.

use super::check::require_result;
use super::value::Value;
use crate::control::Outcome;
use crate::error::ArgumentError;
use crate::policy::Policy;

impl Outcome<Value, Value> {
    /// Returns `self` if it is an `Err`, otherwise `other`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError`] if `other` is not a Result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::control::{Outcome, err, ok};
    /// use explicit::dynamic::Value;
    ///
    /// let success: Outcome<Value, Value> = ok(Value::from(1));
    /// assert_eq!(success.and_value(Value::ok(2)), Ok(ok(Value::from(2))));
    ///
    /// let failure: Outcome<Value, Value> = err(Value::from("e"));
    /// assert_eq!(failure.clone().and_value(Value::ok(2)), Ok(failure));
    /// ```
    pub fn and_value(self, other: Value) -> Result<Self, ArgumentError> {
        let other = require_result(other, "Outcome::and")?;
        Ok(self.and(other))
    }

    /// Returns `other` if this is an `Err`, otherwise `self`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError`] if `other` is not a Result.
    pub fn or_value(self, other: Value) -> Result<Self, ArgumentError> {
        let other = require_result(other, "Outcome::or")?;
        Ok(self.or(other))
    }

    /// Chains a block whose result should be a Result.
    ///
    /// For `Err` the block is not called and `self` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError`] if the policy is strict and the block did
    /// not return a Result.
    pub fn and_then_value<F>(self, function: F) -> Result<Value, ArgumentError>
    where
        F: FnOnce(Value) -> Value,
    {
        match self {
            Self::Ok(value) => Policy::current().check_result(function(value), "Outcome::and_then"),
            failure @ Self::Err(_) => Ok(Value::from(failure)),
        }
    }

    /// Recovers from an `Err` with a block whose result should be a Result.
    ///
    /// For `Ok` the block is not called and `self` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError`] if the policy is strict and the block did
    /// not return a Result.
    pub fn or_else_value<F>(self, function: F) -> Result<Value, ArgumentError>
    where
        F: FnOnce(Value) -> Value,
    {
        match self {
            success @ Self::Ok(_) => Ok(Value::from(success)),
            Self::Err(error) => Policy::current().check_result(function(error), "Outcome::or_else"),
        }
    }
}
