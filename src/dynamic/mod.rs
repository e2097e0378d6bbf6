//! Interop with dynamically typed hosts.
//!
//! A [`Value`] is whatever a host language hands over: a number, a string,
//! or an Option or Result built by the host. Combinators that take such
//! values cannot rely on the compiler to check what a block returns, so the
//! checks happen at run time under the current
//! [`Policy`](crate::policy::Policy).
//!
//! - Arguments that must be an Option or Result (`or_value`, `and_value`,
//!   `zip_value`) are always checked.
//! - Block results (`and_then_value`, `or_else_value`) are checked only
//!   when `strict_block_return_type` is set.
//! - [`Value::try_eq`] refuses to compare an Option or Result with an
//!   unrelated value, unless `lenient_equality` allows it.
//!
//! # Examples
//!
//! ```rust
//! use explicit::control::some;
//! use explicit::dynamic::Value;
//! use explicit::error::ArgumentRole;
//! use explicit::policy;
//!
//! let error = some(Value::from(1)).and_then_value(|n| n).unwrap_err();
//! assert_eq!(error.role, ArgumentRole::BlockResult);
//!
//! let unchecked = policy::lenient(|| some(Value::from(1)).and_then_value(|n| n));
//! assert_eq!(unchecked, Ok(Value::from(1)));
//! ```

mod check;
mod equality;
mod maybe;
mod outcome;
mod value;

pub use value::Value;
