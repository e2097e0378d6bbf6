//! # explicit
//!
//! Explicit Option and Result algebras with a uniform combinator vocabulary.
//!
//! ## Overview
//!
//! - **Control**: [`Maybe`](control::Maybe) and [`Outcome`](control::Outcome),
//!   with predicates, extraction, transformation, chaining and conversion
//!   combinators
//! - **Errors**: one small error type per failure, unified in
//!   [`CombinatorError`](error::CombinatorError)
//! - **Policy**: a scoped switch deciding how strictly block results and
//!   cross-type comparisons are checked at the dynamic boundary
//! - **Dynamic**: [`Value`](dynamic::Value) and the run-time checked
//!   combinators for dynamically typed hosts
//! - **Presence**: blank/present checks for ordinary values
//!
//! ## Feature Flags
//!
//! - `derive` (default): `#[derive(Nullable)]`, generating `Maybe` accessors
//!   for `Option` fields
//! - `serde`: `Serialize`/`Deserialize` for the algebras and `Value`
//!
//! ## Example
//!
//! ```rust
//! use explicit::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     raw.parse::<u16>().map_err(|error| error.to_string()).into()
//! }
//!
//! let port = some("8080").and_then(|raw| parse_port(raw).ok_value());
//! assert_eq!(port, some(8080));
//! assert_eq!(parse_port("http").unwrap_or(80), 80);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use explicit::prelude::*;
///
/// assert_eq!(some(1).or(none()), some(1));
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::error::CombinatorError;
    pub use crate::presence::Presence;

    #[cfg(feature = "derive")]
    pub use crate::Nullable;
}

pub mod control;
pub mod dynamic;
pub mod error;
pub mod policy;
pub mod presence;

#[cfg(feature = "derive")]
pub use explicit_derive::Nullable;
