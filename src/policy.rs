//! Type-enforcement policy for combinator blocks at the dynamic boundary.
//!
//! Statically typed combinators cannot receive a block that returns the
//! wrong algebra; the compiler rejects it. The [`dynamic`](crate::dynamic)
//! layer works with host values whose algebra is only known at run time,
//! and there the [`Policy`] decides what happens when a block returns
//! something other than the expected `Option` or `Result`:
//!
//! - `strict_block_return_type` (default `true`): reject the value with an
//!   [`ArgumentError`](crate::error::ArgumentError).
//! - `lenient_equality` (default `false`): allow an `Ok` to be compared
//!   against a bare value.
//!
//! A policy can be passed around explicitly, or installed as the ambient
//! policy of the current thread for the extent of a closure:
//!
//! ```rust
//! use explicit::policy::{self, Policy};
//!
//! assert!(Policy::current().strict_block_return_type());
//!
//! let relaxed = policy::lenient(|| Policy::current().strict_block_return_type());
//! assert!(!relaxed);
//!
//! // Restored once the closure returns, even if it panicked.
//! assert!(Policy::current().strict_block_return_type());
//! ```
//!
//! # Threads
//!
//! The ambient policy is tracked per thread. A thread that never installed
//! a policy observes the process-wide default, which can be changed with
//! [`set_global_default`]. The default is replaced as a whole, so a
//! concurrent reader sees either the old policy or the new one, never a
//! mix of their flags.

use std::cell::Cell;
use std::env;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU8, Ordering};

/// Environment variable read by [`Policy::from_env`] for
/// `strict_block_return_type`.
pub const STRICT_BLOCK_RETURN_TYPE_VAR: &str = "EXPLICIT_STRICT_BLOCK_RETURN_TYPE";

/// Environment variable read by [`Policy::from_env`] for `lenient_equality`.
pub const LENIENT_EQUALITY_VAR: &str = "EXPLICIT_LENIENT_EQUALITY";

const STRICT_BLOCK_RETURN_TYPE_BIT: u8 = 0b01;
const LENIENT_EQUALITY_BIT: u8 = 0b10;

// Both flags share one word: a load always observes a complete policy.
static GLOBAL_DEFAULT: AtomicU8 = AtomicU8::new(Policy::new().to_bits());

thread_local! {
    static CURRENT: Cell<Option<Policy>> = const { Cell::new(None) };
}

/// Errors raised while loading a [`Policy`] from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable has a value that is not a boolean.
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: &'static str,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Configuration of the runtime checks performed by dynamic combinators.
///
/// # Examples
///
/// ```rust
/// use explicit::policy::Policy;
///
/// let policy = Policy::default()
///     .with_strict_block_return_type(false)
///     .with_lenient_equality(true);
/// assert!(!policy.strict_block_return_type());
/// assert!(policy.lenient_equality());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Policy {
    strict_block_return_type: bool,
    lenient_equality: bool,
}

impl Default for Policy {
    fn default() -> Self {
        Self::new()
    }
}

impl Policy {
    /// The strict policy: block results are checked, equality is tag-only.
    pub const fn new() -> Self {
        Self {
            strict_block_return_type: true,
            lenient_equality: false,
        }
    }

    /// Whether block results of `and_then`/`or_else` must be of the
    /// expected algebra.
    pub const fn strict_block_return_type(&self) -> bool {
        self.strict_block_return_type
    }

    /// Whether an `Ok` may be compared against a bare value.
    pub const fn lenient_equality(&self) -> bool {
        self.lenient_equality
    }

    /// Returns a copy with `strict_block_return_type` set to `strict`.
    #[must_use]
    pub const fn with_strict_block_return_type(self, strict: bool) -> Self {
        Self {
            strict_block_return_type: strict,
            ..self
        }
    }

    /// Returns a copy with `lenient_equality` set to `lenient`.
    #[must_use]
    pub const fn with_lenient_equality(self, lenient: bool) -> Self {
        Self {
            lenient_equality: lenient,
            ..self
        }
    }

    const fn to_bits(self) -> u8 {
        let mut bits = 0;
        if self.strict_block_return_type {
            bits |= STRICT_BLOCK_RETURN_TYPE_BIT;
        }
        if self.lenient_equality {
            bits |= LENIENT_EQUALITY_BIT;
        }
        bits
    }

    const fn from_bits(bits: u8) -> Self {
        Self {
            strict_block_return_type: bits & STRICT_BLOCK_RETURN_TYPE_BIT != 0,
            lenient_equality: bits & LENIENT_EQUALITY_BIT != 0,
        }
    }

    /// The policy in effect on the current thread.
    pub fn current() -> Self {
        CURRENT.with(Cell::get).unwrap_or_else(global_default)
    }

    /// Loads a policy from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `EXPLICIT_STRICT_BLOCK_RETURN_TYPE` (optional, default: `true`)
    /// - `EXPLICIT_LENIENT_EQUALITY` (optional, default: `false`)
    ///
    /// Accepted values are `true`, `false`, `1`, `0`, `yes`, `no`, `on` and
    /// `off`, in any case.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set to
    /// anything else.
    pub fn from_env() -> Result<Self, ConfigError> {
        let policy = Self::from_lookup(|key| {
            env::var_os(key).map(|value| value.to_string_lossy().into_owned())
        })?;
        tracing::debug!(
            strict_block_return_type = policy.strict_block_return_type,
            lenient_equality = policy.lenient_equality,
            "loaded policy from environment"
        );
        Ok(policy)
    }

    /// Loads a policy through `lookup`, which maps a variable name to its
    /// value if set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a value is not a boolean.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use explicit::policy::{LENIENT_EQUALITY_VAR, Policy};
    ///
    /// let policy = Policy::from_lookup(|key| {
    ///     (key == LENIENT_EQUALITY_VAR).then(|| "yes".to_string())
    /// })
    /// .unwrap();
    /// assert!(policy.lenient_equality());
    /// assert!(policy.strict_block_return_type());
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::new();
        let strict = lookup(STRICT_BLOCK_RETURN_TYPE_VAR)
            .map(|raw| parse_flag(STRICT_BLOCK_RETURN_TYPE_VAR, &raw))
            .transpose()?
            .unwrap_or(defaults.strict_block_return_type);
        let lenient = lookup(LENIENT_EQUALITY_VAR)
            .map(|raw| parse_flag(LENIENT_EQUALITY_VAR, &raw))
            .transpose()?
            .unwrap_or(defaults.lenient_equality);

        Ok(defaults
            .with_strict_block_return_type(strict)
            .with_lenient_equality(lenient))
    }
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            message: format!("expected a boolean, got {raw:?}"),
        }),
    }
}

// =============================================================================
// Process-wide Default
// =============================================================================

/// The policy observed by threads that have not installed their own.
pub fn global_default() -> Policy {
    Policy::from_bits(GLOBAL_DEFAULT.load(Ordering::Acquire))
}

/// Replaces the process-wide default policy.
///
/// Threads that currently have a policy installed through [`enter`],
/// [`scoped`] or [`lenient`] keep it until their scope ends.
pub fn set_global_default(policy: Policy) {
    tracing::warn!(
        strict_block_return_type = policy.strict_block_return_type,
        lenient_equality = policy.lenient_equality,
        "replacing process-wide policy"
    );
    GLOBAL_DEFAULT.store(policy.to_bits(), Ordering::Release);
}

// =============================================================================
// Scoped Overrides
// =============================================================================

/// Restores the previously installed policy of this thread when dropped.
///
/// Returned by [`enter`]. Because restoration happens in `Drop`, it also
/// runs while a panic unwinds through the scope. Guards must be dropped in
/// reverse order of creation; each one restores the value that was in
/// effect when it was created.
#[must_use = "the policy is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct PolicyGuard {
    previous: Option<Policy>,
    // Restoring touches a thread-local, so the guard must stay on its thread.
    marker: PhantomData<*const ()>,
}

impl Drop for PolicyGuard {
    fn drop(&mut self) {
        tracing::trace!(previous = ?self.previous, "restoring policy");
        CURRENT.with(|current| current.set(self.previous));
    }
}

/// Installs `policy` on the current thread until the returned guard is
/// dropped.
///
/// # Examples
///
/// ```rust
/// use explicit::policy::{self, Policy};
///
/// {
///     let _guard = policy::enter(Policy::new().with_lenient_equality(true));
///     assert!(Policy::current().lenient_equality());
/// }
/// assert!(!Policy::current().lenient_equality());
/// ```
pub fn enter(policy: Policy) -> PolicyGuard {
    let previous = CURRENT.with(|current| current.replace(Some(policy)));
    tracing::trace!(?policy, ?previous, "entering policy scope");
    PolicyGuard {
        previous,
        marker: PhantomData,
    }
}

/// Runs `function` with `policy` installed on the current thread.
pub fn scoped<R, F>(policy: Policy, function: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = enter(policy);
    function()
}

/// Runs `function` with block return types unchecked.
///
/// The rest of the current policy is kept as is.
///
/// # Examples
///
/// ```rust
/// use explicit::control::ok;
/// use explicit::dynamic::Value;
/// use explicit::policy;
///
/// let raw = policy::lenient(|| {
///     ok::<Value, Value>(Value::from(1)).and_then_value(|_| Value::symbol("not_a_result"))
/// });
/// assert_eq!(raw, Ok(Value::symbol("not_a_result")));
/// ```
pub fn lenient<R, F>(function: F) -> R
where
    F: FnOnce() -> R,
{
    scoped(
        Policy::current().with_strict_block_return_type(false),
        function,
    )
}
