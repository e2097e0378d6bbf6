//! The Option and Result algebras.
//!
//! - [`Maybe`]: a value that may be absent (`Some` / `None`)
//! - [`Outcome`]: a computation that succeeded or failed (`Ok` / `Err`)
//! - [`Arbitrary`]: the payload of an `Err` built without one
//!
//! Both algebras are plain enums, so they can be matched on directly. The
//! combinators cover the common cases without manual branching.
//!
//! # Examples
//!
//! ```rust
//! use explicit::control::{Maybe, Outcome, err_arbitrary, ok, some};
//!
//! let port: Maybe<u16> = some(8080);
//! let checked: Outcome<u16> = port.ok().and_then(|p| if p > 1024 { ok(p) } else { err_arbitrary() });
//! assert_eq!(checked, ok(8080));
//!
//! let missing: Maybe<u16> = Maybe::None;
//! assert_eq!(missing.unwrap_or(80), 80);
//! ```

mod arbitrary;
mod maybe;
mod outcome;

pub use arbitrary::Arbitrary;
pub use maybe::{Maybe, none, some};
pub use outcome::{Outcome, err, err_arbitrary, ok};
