//! Presence checks for ordinary values.
//!
//! A value is *blank* when it carries nothing worth using: an empty or
//! whitespace-only string, an empty collection, an absent optional, `false`
//! or `Nil`. Everything else is *present*. [`Presence::presence`] turns that
//! distinction into a [`Maybe`].
//!
//! # Examples
//!
//! ```rust
//! use explicit::control::{Maybe, some};
//! use explicit::presence::Presence;
//!
//! assert_eq!("alice".presence(), some("alice"));
//! assert_eq!("   ".presence(), Maybe::None);
//! assert!(Vec::<i32>::new().is_blank());
//! ```

use std::collections::{BTreeMap, HashMap};

use crate::control::Maybe;
use crate::dynamic::Value;
use crate::error::{NotPresentError, TypeMismatchError};

/// Values that can be blank.
pub trait Presence {
    /// Returns `true` if the value carries nothing worth using.
    fn is_blank(&self) -> bool;

    /// Name of the type reported by [`NotPresentError`].
    fn blank_type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Returns `true` unless the value is blank.
    fn is_present(&self) -> bool {
        !self.is_blank()
    }

    /// Returns `Some(self)` if the value is present, `None` otherwise.
    fn presence(&self) -> Maybe<&Self> {
        if self.is_present() {
            Maybe::Some(self)
        } else {
            Maybe::None
        }
    }

    /// Returns the value if it is present.
    ///
    /// # Errors
    ///
    /// Returns [`NotPresentError`] if the value is blank.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::presence::Presence;
    ///
    /// assert_eq!(String::from("bob").require_present().map(String::as_str), Ok("bob"));
    /// assert!(String::new().require_present().is_err());
    /// ```
    fn require_present(&self) -> Result<&Self, NotPresentError> {
        if self.is_present() {
            Ok(self)
        } else {
            Err(NotPresentError {
                type_name: self.blank_type_name(),
            })
        }
    }
}

impl Presence for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }

    fn blank_type_name(&self) -> &'static str {
        "str"
    }
}

impl Presence for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }

    fn blank_type_name(&self) -> &'static str {
        "String"
    }
}

impl<T> Presence for [T] {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Presence for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Presence for HashMap<K, V, S> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Presence for BTreeMap<K, V> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Presence for Option<T> {
    fn is_blank(&self) -> bool {
        self.is_none()
    }
}

impl<T> Presence for Maybe<T> {
    fn is_blank(&self) -> bool {
        self.is_none()
    }
}

impl Presence for bool {
    fn is_blank(&self) -> bool {
        !*self
    }
}

impl<T: Presence + ?Sized> Presence for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }

    fn blank_type_name(&self) -> &'static str {
        (**self).blank_type_name()
    }
}

/// Host semantics: `Nil`, `false`, blank strings and empty collections are
/// blank. Options, Results, numbers and symbols are always present.
impl Presence for Value {
    fn is_blank(&self) -> bool {
        match self {
            Self::Nil => true,
            Self::Bool(flag) => flag.is_blank(),
            Self::String(text) => text.is_blank(),
            Self::Array(items) => items.is_blank(),
            Self::Map(entries) => entries.is_blank(),
            Self::Integer(_)
            | Self::Float(_)
            | Self::Symbol(_)
            | Self::Arbitrary
            | Self::Option(_)
            | Self::Result(_) => false,
        }
    }

    fn blank_type_name(&self) -> &'static str {
        self.type_name()
    }
}

impl Value {
    /// Returns `self` if present, otherwise `fallback`.
    ///
    /// A blank `Nil` accepts any fallback. Any other blank value only
    /// accepts a fallback of its own type.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatchError`] if the receiver is blank, not `Nil`,
    /// and `fallback` has a different type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::dynamic::Value;
    ///
    /// assert_eq!(Value::from("").presence_or(Value::from("guest")), Ok(Value::from("guest")));
    /// assert_eq!(Value::Nil.presence_or(Value::from(0)), Ok(Value::from(0)));
    /// assert!(Value::from("").presence_or(Value::from(0)).is_err());
    /// ```
    pub fn presence_or(self, fallback: Self) -> Result<Self, TypeMismatchError> {
        if self.is_present() {
            return Ok(self);
        }
        if self.is_nil() || self.type_name() == fallback.type_name() {
            Ok(fallback)
        } else {
            Err(TypeMismatchError {
                expected: self.type_name(),
                found: fallback.type_name(),
            })
        }
    }
}
