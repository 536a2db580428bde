//! `Selector` — Type/capability key for describer lookup
//!
//! A selector names either a concrete value type (`string`, `int`, a custom
//! type name such as `web_element`) or a capability shared by many types
//! (`object`, `number`, `self_describing`). Which selectors a value satisfies
//! is decided by [`Value::satisfies`](crate::Value::satisfies).

use std::borrow::Cow;
use std::fmt;

/// Key under which a describer is registered.
///
/// Equality and hashing go by name, so a selector built with
/// [`Selector::custom`] from an owned string equals the `const` one with the
/// same name.
///
/// # Example
///
/// ```
/// use sniff::Selector;
///
/// assert_eq!(Selector::STRING.name(), "string");
/// assert_eq!(Selector::custom("web_element"), Selector::new("web_element"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Selector(Cow<'static, str>);

impl Selector {
    /// Satisfied by every non-null value.
    pub const OBJECT: Self = Self::new("object");
    /// Satisfied by custom values that render themselves.
    pub const SELF_DESCRIBING: Self = Self::new("self_describing");
    /// [`Value::String`](crate::Value::String).
    pub const STRING: Self = Self::new("string");
    /// [`Value::Int`](crate::Value::Int).
    pub const INT: Self = Self::new("int");
    /// [`Value::Float`](crate::Value::Float).
    pub const FLOAT: Self = Self::new("float");
    /// Both `Int` and `Float`.
    pub const NUMBER: Self = Self::new("number");
    /// [`Value::Bool`](crate::Value::Bool).
    pub const BOOL: Self = Self::new("bool");
    /// [`Value::Bytes`](crate::Value::Bytes).
    pub const BYTES: Self = Self::new("bytes");
    /// [`Value::Collection`](crate::Value::Collection). Only empty collections
    /// reach selector lookup; non-empty ones resolve through their first element.
    pub const COLLECTION: Self = Self::new("collection");

    /// Create a selector from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Create a selector from a runtime name.
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Returns the selector name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Selector {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Selector {
    fn from(name: String) -> Self {
        Self::custom(name)
    }
}
