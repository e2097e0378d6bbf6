//! Checked equality between dynamic values.

use super::value::Value;
use crate::control::{Maybe, Outcome};
use crate::error::NotComparableError;
use crate::policy::Policy;

impl Value {
    /// Compares two values under the current policy.
    ///
    /// See [`Value::try_eq_with`].
    ///
    /// # Errors
    ///
    /// Returns [`NotComparableError`] when an Option or Result is compared
    /// with an unrelated value.
    pub fn try_eq(&self, other: &Self) -> Result<bool, NotComparableError> {
        self.try_eq_with(other, &Policy::current())
    }

    /// Compares two values.
    ///
    /// Two Options or two Results are equal when their tags and payloads
    /// are. Bare values compare structurally. Comparing an Option or Result
    /// with anything else fails, except that with
    /// [`Policy::lenient_equality`] a Result may be compared with a bare
    /// value: an `Ok` is equal to it when its payload is, an `Err` never is.
    ///
    /// The same rules apply to nested payloads, array elements and map
    /// values, so an Option buried in an array is still refused against a
    /// bare value.
    ///
    /// # Errors
    ///
    /// Returns [`NotComparableError`] when the comparison is refused.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::dynamic::Value;
    /// use explicit::policy::Policy;
    ///
    /// let strict = Policy::new();
    /// assert_eq!(Value::ok(1).try_eq_with(&Value::ok(1), &strict), Ok(true));
    /// assert_eq!(Value::ok(1).try_eq_with(&Value::err(1), &strict), Ok(false));
    /// assert!(Value::ok(1).try_eq_with(&Value::from(1), &strict).is_err());
    ///
    /// let lenient = strict.with_lenient_equality(true);
    /// assert_eq!(Value::ok(1).try_eq_with(&Value::from(1), &lenient), Ok(true));
    /// assert_eq!(Value::from(1).try_eq_with(&Value::err(1), &lenient), Ok(false));
    /// ```
    pub fn try_eq_with(&self, other: &Self, policy: &Policy) -> Result<bool, NotComparableError> {
        match (self, other) {
            (Self::Option(left), Self::Option(right)) => match ((**left).as_ref(), (**right).as_ref()) {
                (Maybe::Some(left), Maybe::Some(right)) => left.try_eq_with(right, policy),
                (Maybe::None, Maybe::None) => Ok(true),
                _ => Ok(false),
            },
            (Self::Result(left), Self::Result(right)) => match ((**left).as_ref(), (**right).as_ref()) {
                (Outcome::Ok(left), Outcome::Ok(right)) | (Outcome::Err(left), Outcome::Err(right)) => {
                    left.try_eq_with(right, policy)
                }
                _ => Ok(false),
            },
            (Self::Result(outcome), bare) | (bare, Self::Result(outcome))
                if policy.lenient_equality() && !bare.is_algebra() =>
            {
                match (**outcome).as_ref() {
                    Outcome::Ok(held) => held.try_eq_with(bare, policy),
                    Outcome::Err(_) => Ok(false),
                }
            }
            (left, right) if left.is_algebra() || right.is_algebra() => Err(NotComparableError {
                left: left.type_name(),
                right: right.type_name(),
            }),
            (Self::Array(left), Self::Array(right)) => {
                if left.len() != right.len() {
                    return Ok(false);
                }
                all_equal(left.iter().zip(right), policy)
            }
            (Self::Map(left), Self::Map(right)) => {
                if left.len() != right.len() || !left.keys().eq(right.keys()) {
                    return Ok(false);
                }
                all_equal(left.values().zip(right.values()), policy)
            }
            _ => Ok(self == other),
        }
    }
}

// Visits every pair so a refusal does not depend on element order.
fn all_equal<'a>(
    pairs: impl Iterator<Item = (&'a Value, &'a Value)>,
    policy: &Policy,
) -> Result<bool, NotComparableError> {
    let mut equal = true;
    for (left, right) in pairs {
        equal &= left.try_eq_with(right, policy)?;
    }
    Ok(equal)
}
