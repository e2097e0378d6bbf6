//! Derive macros for the explicit Option and Result algebras.
//!
//! # Available Derive Macros
//!
//! - [`Nullable`]: Generates `Maybe` accessors for `Option` fields
//!
//! # Example
//!
//! ```rust,ignore
//! use explicit::Nullable;
//! use explicit::control::{Maybe, some};
//!
//! #[derive(Nullable)]
//! struct Account {
//!     id: u64,
//!     nickname: Option<String>,
//! }
//!
//! let account = Account { id: 1, nickname: Some("al".to_string()) };
//! assert_eq!(account.nickname().map(String::len), some(2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod nullable;

use proc_macro::TokenStream;

/// Derive macro generating `Maybe` accessors for `Option` fields.
///
/// # Requirements
///
/// - The type must be a struct with named fields
///
/// # Generated Code
///
/// For each field `foo` of type `Option<T>`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo(&self) -> ::explicit::control::Maybe<&T> { ... }
/// }
/// ```
///
/// Fields of any other type are left alone.
///
/// # Field Attributes
///
/// - `#[nullable(skip)]`: no accessor for this field
/// - `#[nullable(rename = "name")]`: name the accessor `name` instead
/// - `#[nullable(delegate(method = "len", returns = "usize"))]`: also
///   generate `foo_len(&self) -> Maybe<usize>`, calling `len` on the held
///   value. May be repeated.
///
/// # Example
///
/// ```rust,ignore
/// use explicit::Nullable;
/// use explicit::control::{Maybe, some};
///
/// #[derive(Nullable)]
/// struct Profile {
///     #[nullable(delegate(method = "len", returns = "usize"))]
///     bio: Option<String>,
///     #[nullable(rename = "avatar_url")]
///     avatar: Option<String>,
///     #[nullable(skip)]
///     cache: Option<Vec<u8>>,
/// }
///
/// let profile = Profile { bio: Some("hi".into()), avatar: None, cache: None };
/// assert_eq!(profile.bio_len(), some(2));
/// assert_eq!(profile.avatar_url(), Maybe::None);
/// ```
#[proc_macro_derive(Nullable, attributes(nullable))]
pub fn derive_nullable(input: TokenStream) -> TokenStream {
    nullable::derive_nullable_impl(input)
}
