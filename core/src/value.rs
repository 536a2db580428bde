//! `Value` — Type-erased runtime value handed to describers
//!
//! Anything that ends up in a mismatch message is first turned into a
//! [`Value`]. Primitives stay inline; the two container shapes the registry
//! treats specially ([`Value::Item`] and [`Value::Collection`]) are explicit
//! variants; everything else goes through [`CustomValue`].
//!
//! # Extensibility via `Custom`
//!
//! Domain types (page elements, locators, table rows) implement
//! [`CustomValue`] and are wrapped with [`Value::custom`]. A custom value
//! advertises the capabilities it has through
//! [`capabilities`](CustomValue::capabilities), which is how an ancestor
//! selector (say `element`) can match a more specific type (say
//! `input_element`).

use std::any::Any;
use std::fmt::{self, Debug};
use std::sync::Arc;

use crate::{Description, Selector};

/// A value that knows how to render itself.
///
/// Values with this capability satisfy [`Selector::SELF_DESCRIBING`], which
/// every [`DescriberRegistry`](crate::DescriberRegistry) registers first.
pub trait SelfDescribing: Send + Sync {
    /// Append a description of `self` to `description`.
    fn describe_to(&self, description: &mut Description);
}

/// Extension trait for domain-specific values.
///
/// # Example
///
/// ```
/// use std::any::Any;
/// use sniff::{CustomValue, Selector, Value};
///
/// #[derive(Debug)]
/// struct Checkbox {
///     checked: bool,
/// }
///
/// impl CustomValue for Checkbox {
///     fn custom_type_name(&self) -> &'static str {
///         "checkbox"
///     }
///
///     fn capabilities(&self) -> &[&'static str] {
///         &["input_element", "element"]
///     }
///
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
/// }
///
/// let value = Value::custom(Checkbox { checked: true });
/// assert!(value.satisfies(&Selector::new("checkbox")));
/// assert!(value.satisfies(&Selector::new("element")));
/// assert!(!value.satisfies(&Selector::SELF_DESCRIBING));
/// ```
pub trait CustomValue: Send + Sync + Debug {
    /// Returns the concrete type name, also usable as a selector.
    ///
    /// Convention: `snake_case`, e.g. `"web_element"`.
    fn custom_type_name(&self) -> &'static str;

    /// Additional selectors this value satisfies, most specific first.
    fn capabilities(&self) -> &[&'static str] {
        &[]
    }

    /// Returns the self-rendering view of this value, if it has one.
    fn as_self_describing(&self) -> Option<&dyn SelfDescribing> {
        None
    }

    /// Returns a reference to `self` as `&dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// The erased value type that flows into describers.
///
/// # Example
///
/// ```
/// use sniff::Value;
///
/// let value = Value::from(vec![3, 4, 5]);
/// assert!(value.is_collection());
/// assert_eq!(value.to_string(), "[3, 4, 5]");
///
/// let wrapped = Value::item("hello");
/// assert_eq!(wrapped.unwrap_item(), Some(&Value::from("hello")));
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// Absent value.
    Null,

    /// String data.
    String(String),

    /// Integer data.
    Int(i64),

    /// Floating point data.
    Float(f64),

    /// Boolean data.
    Bool(bool),

    /// Raw bytes.
    Bytes(Vec<u8>),

    /// Single-value holder; described by delegating to its content.
    Item(Box<Value>),

    /// Ordered multi-value container.
    Collection(Vec<Value>),

    /// Domain value implementing [`CustomValue`].
    Custom(Arc<dyn CustomValue>),
}

// Custom values compare by allocation, like `Arc::ptr_eq`.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::Item(a), Self::Item(b)) => a == b,
            (Self::Collection(a), Self::Collection(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Value {
    /// Wrap `inner` in a single-value holder.
    #[must_use]
    pub fn item(inner: impl Into<Value>) -> Self {
        Self::Item(Box::new(inner.into()))
    }

    /// Build a collection from anything convertible to values.
    #[must_use]
    pub fn collection<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::Collection(items.into_iter().map(Into::into).collect())
    }

    /// Wrap raw bytes.
    #[must_use]
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(bytes.into())
    }

    /// Wrap a domain value.
    #[must_use]
    pub fn custom(value: impl CustomValue + 'static) -> Self {
        Self::Custom(Arc::new(value))
    }

    /// Returns `true` if this is the `Null` variant.
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if this is the `Item` variant.
    #[inline]
    #[must_use]
    pub fn is_item(&self) -> bool {
        matches!(self, Self::Item(_))
    }

    /// Returns `true` if this is the `Collection` variant (empty or not).
    #[inline]
    #[must_use]
    pub fn is_collection(&self) -> bool {
        matches!(self, Self::Collection(_))
    }

    /// Returns `true` if this is the `Custom` variant.
    #[inline]
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Try to get the value as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Try to get the value as an integer.
    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get the value as a float. Integers widen.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get the value as a boolean.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the content of an `Item` wrapper.
    #[inline]
    #[must_use]
    pub fn unwrap_item(&self) -> Option<&Value> {
        match self {
            Self::Item(inner) => Some(inner),
            _ => None,
        }
    }

    /// Returns the elements of a `Collection`.
    #[inline]
    #[must_use]
    pub fn as_collection(&self) -> Option<&[Value]> {
        match self {
            Self::Collection(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Returns the custom value trait object.
    ///
    /// Use [`CustomValue::as_any`] to downcast to the concrete type.
    #[inline]
    #[must_use]
    pub fn as_custom(&self) -> Option<&dyn CustomValue> {
        match self {
            Self::Custom(c) => Some(c.as_ref()),
            _ => None,
        }
    }

    /// Returns the self-rendering view of a custom value.
    #[must_use]
    pub fn as_self_describing(&self) -> Option<&dyn SelfDescribing> {
        self.as_custom().and_then(CustomValue::as_self_describing)
    }

    /// Returns a name for the runtime type of this value.
    ///
    /// For `Custom` this delegates to [`CustomValue::custom_type_name`].
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::String(_) => "string",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Bytes(_) => "bytes",
            Self::Item(_) => "item",
            Self::Collection(_) => "collection",
            Self::Custom(c) => c.custom_type_name(),
        }
    }

    /// Returns `true` if this value's runtime type is compatible with
    /// `selector`: either the type itself or one of its capabilities.
    ///
    /// `Null` satisfies nothing, not even [`Selector::OBJECT`].
    #[must_use]
    pub fn satisfies(&self, selector: &Selector) -> bool {
        if self.is_null() {
            return false;
        }
        let name = selector.name();
        if name == Selector::OBJECT.name() || name == self.type_name() {
            return true;
        }
        match self {
            Self::Int(_) | Self::Float(_) => name == Selector::NUMBER.name(),
            Self::Custom(c) => {
                (name == Selector::SELF_DESCRIBING.name() && c.as_self_describing().is_some())
                    || c.capabilities().iter().any(|cap| *cap == name)
            }
            _ => false,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

/// Default textual form, used by the Object describer.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::String(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Bytes(bytes) => {
                f.write_str("0x")?;
                for b in bytes {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
            Self::Item(inner) => write!(f, "Item({inner})"),
            Self::Collection(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Custom(c) => write!(f, "{c:?}"),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(items: Vec<T>) -> Self {
        Self::collection(items)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// serde interop (feature = "serde")
// ═══════════════════════════════════════════════════════════════════════════════

/// Map key that turns a single-key object into an [`Value::Item`].
#[cfg(feature = "serde")]
pub const ITEM_KEY: &str = "item";

#[cfg(feature = "serde")]
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or_else(|| Self::String(n.to_string())),
            Json::String(s) => Self::String(s),
            Json::Array(items) => Self::collection(items),
            Json::Object(mut map) => {
                if map.len() == 1 {
                    if let Some(inner) = map.remove(ITEM_KEY) {
                        return Self::item(inner);
                    }
                }
                Self::String(Json::Object(map).to_string())
            }
        }
    }
}

#[cfg(feature = "serde")]
impl Value {
    /// Parse a JSON document into a value.
    ///
    /// # Errors
    ///
    /// Returns [`SniffError::InvalidValue`](crate::SniffError::InvalidValue)
    /// if the text is not valid JSON.
    pub fn from_json(text: &str) -> Result<Self, crate::SniffError> {
        serde_json::from_str::<serde_json::Value>(text)
            .map(Self::from)
            .map_err(|e| crate::SniffError::InvalidValue {
                source: e.to_string(),
            })
    }
}
