//! The `Value` type: a value of a dynamically typed host.

use std::collections::BTreeMap;
use std::fmt;

use crate::control::{Arbitrary, Maybe, Outcome};
use crate::error::ResultRequiredError;

/// A dynamically typed value crossing the interop boundary.
///
/// Options and results are ordinary values here, which is what makes the
/// runtime checks of the [`Policy`](crate::policy::Policy) meaningful: a
/// block handed to [`Maybe::and_then_value`] can return anything.
///
/// The derived `PartialEq` is plain structural equality and never fails.
/// Use [`Value::try_eq`] for the checked comparison that refuses to compare
/// an Option or Result with an unrelated value.
///
/// # Examples
///
/// ```rust
/// use explicit::control::{Maybe, some};
/// use explicit::dynamic::Value;
///
/// let user = Value::from(some(Value::from("alice")));
/// assert_eq!(user.type_name(), "Option");
/// assert_eq!(user.to_string(), "Some(\"alice\")");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// The host's null.
    #[default]
    Nil,
    /// A boolean.
    Bool(bool),
    /// An integer.
    Integer(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    String(String),
    /// An interned name, such as `:not_a_result`.
    Symbol(String),
    /// An ordered sequence.
    Array(Vec<Value>),
    /// A string-keyed map.
    Map(BTreeMap<String, Value>),
    /// The placeholder payload of an `Err` without detail.
    Arbitrary,
    /// A wrapped `Maybe`.
    Option(Box<Maybe<Value>>),
    /// A wrapped `Outcome`.
    Result(Box<Outcome<Value, Value>>),
}

impl Value {
    /// Creates a symbol.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Creates an Option value holding `value`.
    pub fn some(value: impl Into<Self>) -> Self {
        Self::from(Maybe::Some(value.into()))
    }

    /// Creates an empty Option value.
    pub fn none() -> Self {
        Self::from(Maybe::None)
    }

    /// Creates a successful Result value.
    pub fn ok(value: impl Into<Self>) -> Self {
        Self::from(Outcome::Ok(value.into()))
    }

    /// Creates a failed Result value.
    pub fn err(error: impl Into<Self>) -> Self {
        Self::from(Outcome::Err(error.into()))
    }

    /// Creates a failed Result value without detail.
    pub fn err_arbitrary() -> Self {
        Self::err(Self::Arbitrary)
    }

    /// Name of the value's type, as used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "Nil",
            Self::Bool(_) => "Boolean",
            Self::Integer(_) => "Integer",
            Self::Float(_) => "Float",
            Self::String(_) => "String",
            Self::Symbol(_) => "Symbol",
            Self::Array(_) => "Array",
            Self::Map(_) => "Map",
            Self::Arbitrary => "Arbitrary",
            Self::Option(_) => "Option",
            Self::Result(_) => "Result",
        }
    }

    /// Host truthiness: everything except `Nil` and `false` is truthy.
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Bool(false))
    }

    /// Returns `true` for `Nil`.
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns `true` for an Option value.
    pub const fn is_option(&self) -> bool {
        matches!(self, Self::Option(_))
    }

    /// Returns `true` for a Result value.
    pub const fn is_result(&self) -> bool {
        matches!(self, Self::Result(_))
    }

    /// Returns `true` for an Option or Result value.
    pub const fn is_algebra(&self) -> bool {
        self.is_option() || self.is_result()
    }

    /// Unwraps an Option value, handing anything else back unchanged.
    ///
    /// # Errors
    ///
    /// Returns the original value if it is not an Option.
    pub fn into_option(self) -> Result<Maybe<Self>, Self> {
        match self {
            Self::Option(maybe) => Ok(*maybe),
            other => Err(other),
        }
    }

    /// Unwraps a Result value, handing anything else back unchanged.
    ///
    /// # Errors
    ///
    /// Returns the original value if it is not a Result.
    pub fn into_result(self) -> Result<Outcome<Self, Self>, Self> {
        match self {
            Self::Result(outcome) => Ok(*outcome),
            other => Err(other),
        }
    }

    /// Asserts that this value is a Result.
    ///
    /// # Errors
    ///
    /// Returns [`ResultRequiredError`] naming the type that was found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::dynamic::Value;
    ///
    /// assert!(Value::ok(1).assert_result().is_ok());
    /// let error = Value::from(1).assert_result().unwrap_err();
    /// assert_eq!(error.to_string(), "expected a Result, got Integer");
    /// ```
    pub fn assert_result(self) -> Result<Outcome<Self, Self>, ResultRequiredError> {
        self.into_result().map_err(|other| ResultRequiredError {
            found: other.type_name(),
        })
    }
}

// =============================================================================
// Display
// =============================================================================

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => formatter.write_str("nil"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Integer(number) => write!(formatter, "{number}"),
            Self::Float(number) => write!(formatter, "{number:?}"),
            Self::String(text) => write!(formatter, "{text:?}"),
            Self::Symbol(name) => write!(formatter, ":{name}"),
            Self::Array(elements) => {
                formatter.write_str("[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{element}")?;
                }
                formatter.write_str("]")
            }
            Self::Map(entries) => {
                formatter.write_str("{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{key}: {value}")?;
                }
                formatter.write_str("}")
            }
            Self::Arbitrary => fmt::Display::fmt(&Arbitrary, formatter),
            Self::Option(maybe) => write!(formatter, "{maybe}"),
            Self::Result(outcome) => write!(formatter, "{outcome}"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Integer(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Integer(i64::from(number))
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<Vec<Self>> for Value {
    fn from(elements: Vec<Self>) -> Self {
        Self::Array(elements)
    }
}

impl From<BTreeMap<String, Self>> for Value {
    fn from(entries: BTreeMap<String, Self>) -> Self {
        Self::Map(entries)
    }
}

impl From<Arbitrary> for Value {
    fn from(_: Arbitrary) -> Self {
        Self::Arbitrary
    }
}

impl From<Maybe<Self>> for Value {
    fn from(maybe: Maybe<Self>) -> Self {
        Self::Option(Box::new(maybe))
    }
}

impl From<Outcome<Self, Self>> for Value {
    fn from(outcome: Outcome<Self, Self>) -> Self {
        Self::Result(Box::new(outcome))
    }
}

/// A host null becomes `Nil`; it is not turned into an Option.
impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Nil, Into::into)
    }
}
