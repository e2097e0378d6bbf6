//! Runtime algebra checks used by the dynamic combinators.

use super::value::Value;
use crate::control::{Maybe, Outcome};
use crate::error::{Algebra, ArgumentError, ArgumentRole};
use crate::policy::Policy;

impl Policy {
    /// Checks that a block returned an Option value.
    ///
    /// The value is returned unchanged when it is an Option, or when
    /// `strict_block_return_type` is disabled.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError`] if the policy is strict and `value` is not
    /// an Option.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::dynamic::Value;
    /// use explicit::policy::Policy;
    ///
    /// let strict = Policy::new();
    /// assert!(strict.check_option(Value::from(1), "Maybe::and_then").is_err());
    ///
    /// let relaxed = strict.with_strict_block_return_type(false);
    /// assert_eq!(
    ///     relaxed.check_option(Value::from(1), "Maybe::and_then"),
    ///     Ok(Value::from(1))
    /// );
    /// ```
    pub fn check_option(&self, value: Value, operation: &'static str) -> Result<Value, ArgumentError> {
        self.check_block_result(value, operation, Algebra::Option)
    }

    /// Checks that a block returned a Result value.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError`] if the policy is strict and `value` is not
    /// a Result.
    pub fn check_result(&self, value: Value, operation: &'static str) -> Result<Value, ArgumentError> {
        self.check_block_result(value, operation, Algebra::Result)
    }

    fn check_block_result(
        &self,
        value: Value,
        operation: &'static str,
        expected: Algebra,
    ) -> Result<Value, ArgumentError> {
        let matches = match expected {
            Algebra::Option => value.is_option(),
            Algebra::Result => value.is_result(),
        };
        if matches {
            return Ok(value);
        }
        if self.strict_block_return_type() {
            return Err(ArgumentError {
                operation,
                role: ArgumentRole::BlockResult,
                expected,
                found: value.type_name(),
            });
        }
        tracing::debug!(
            operation,
            %expected,
            found = value.type_name(),
            "block result not checked, strict_block_return_type is disabled"
        );
        Ok(value)
    }
}

/// Unwraps an argument that must be an Option, regardless of policy.
pub(crate) fn require_option(value: Value, operation: &'static str) -> Result<Maybe<Value>, ArgumentError> {
    value.into_option().map_err(|other| ArgumentError {
        operation,
        role: ArgumentRole::Argument,
        expected: Algebra::Option,
        found: other.type_name(),
    })
}

/// Unwraps an argument that must be a Result, regardless of policy.
pub(crate) fn require_result(
    value: Value,
    operation: &'static str,
) -> Result<Outcome<Value, Value>, ArgumentError> {
    value.into_result().map_err(|other| ArgumentError {
        operation,
        role: ArgumentRole::Argument,
        expected: Algebra::Result,
        found: other.type_name(),
    })
}
