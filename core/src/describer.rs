//! `Describer` — Renders a [`Value`] as diagnostic text
//!
//! Describers are a closed set of built-in variants plus an open
//! [`Describe`] extension point:
//!
//! - [`Describer::SelfDescribing`] — the value renders itself
//! - [`Describer::Object`] — generic fallback, the value's default text
//! - [`Describer::Item`] — delegates to an inner describer for a wrapped value
//! - [`Describer::Collection`] — applies one inner describer to every element
//! - [`Describer::Null`] — fixed rendering for absent values
//! - [`Describer::Custom`] — caller-supplied [`Describe`] implementation
//!
//! `Item` and `Collection` each own exactly one inner describer. They are built
//! by [`DescriberRegistry::describer_for`](crate::DescriberRegistry::describer_for)
//! while walking down the value, so nesting never exceeds the value's own depth.

use std::fmt::{self, Debug};
use std::sync::Arc;

use crate::{Description, Value};

/// Separator between elements rendered by [`Describer::Collection`].
pub const COLLECTION_SEPARATOR: &str = ", ";

/// Text rendered by [`Describer::Null`].
pub const NULL_TEXT: &str = "null";

/// Extension point for caller-supplied describers.
///
/// # Example
///
/// ```
/// use sniff::{Describe, Describer, Description, Value};
///
/// #[derive(Debug)]
/// struct Hex;
///
/// impl Describe for Hex {
///     fn describe_to(&self, value: &Value, description: &mut Description) {
///         match value.as_int() {
///             Some(i) => description.append_text(&format!("{i:#x}")),
///             None => description.append_text(&value.to_string()),
///         };
///     }
/// }
///
/// let describer = Describer::custom(Hex);
/// assert_eq!(describer.describe(&Value::from(255)), "0xff");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `Describe`",
    label = "this type cannot render values",
    note = "implement `describe_to(&self, &Value, &mut Description)` or use `Describer::from_fn`"
)]
pub trait Describe: Send + Sync + Debug {
    /// Append a description of `value` to `description`.
    fn describe_to(&self, value: &Value, description: &mut Description);
}

/// Selects how a value is turned into text.
#[derive(Debug, Clone)]
pub enum Describer {
    /// The value renders itself via [`SelfDescribing`](crate::SelfDescribing).
    SelfDescribing,

    /// Generic fallback: the value's [`Display`](fmt::Display) form.
    Object,

    /// Renders the content of a single-value wrapper with the inner describer.
    Item(Box<Describer>),

    /// Renders every element with the inner describer, joined by
    /// [`COLLECTION_SEPARATOR`].
    Collection(Box<Describer>),

    /// Renders [`NULL_TEXT`] for absent values.
    Null,

    /// Caller-supplied describer.
    Custom(Arc<dyn Describe>),
}

// Custom describers compare by allocation so lookups can be checked against
// the registered instance.
impl PartialEq for Describer {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::SelfDescribing, Self::SelfDescribing)
            | (Self::Object, Self::Object)
            | (Self::Null, Self::Null) => true,
            (Self::Item(a), Self::Item(b)) | (Self::Collection(a), Self::Collection(b)) => a == b,
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Describer {
    /// Wrap a [`Describe`] implementation.
    #[must_use]
    pub fn custom(describer: impl Describe + 'static) -> Self {
        Self::Custom(Arc::new(describer))
    }

    /// Build a custom describer from a closure.
    ///
    /// `name` shows up in `Debug` output only.
    ///
    /// ```
    /// use sniff::{Describer, Value};
    ///
    /// let quoted = Describer::from_fn("quoted", |value, description| {
    ///     description.append_text("'").append_text(&value.to_string()).append_text("'");
    /// });
    /// assert_eq!(quoted.describe(&Value::from("x")), "'x'");
    /// ```
    #[must_use]
    pub fn from_fn<F>(name: &'static str, f: F) -> Self
    where
        F: Fn(&Value, &mut Description) + Send + Sync + 'static,
    {
        Self::custom(FnDescriber { name, f })
    }

    /// Wrap `inner` in an Item describer.
    #[must_use]
    pub fn item(inner: Describer) -> Self {
        Self::Item(Box::new(inner))
    }

    /// Wrap `inner` in a Collection describer.
    #[must_use]
    pub fn collection(inner: Describer) -> Self {
        Self::Collection(Box::new(inner))
    }

    /// Returns the variant name: `"self_describing"`, `"object"`, `"item"`,
    /// `"collection"`, `"null"` or `"custom"`.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SelfDescribing => "self_describing",
            Self::Object => "object",
            Self::Item(_) => "item",
            Self::Collection(_) => "collection",
            Self::Null => "null",
            Self::Custom(_) => "custom",
        }
    }

    /// Returns the wrapped describer of `Item` and `Collection`.
    #[must_use]
    pub fn inner(&self) -> Option<&Describer> {
        match self {
            Self::Item(inner) | Self::Collection(inner) => Some(inner),
            _ => None,
        }
    }

    /// Append a description of `value`.
    ///
    /// Applied to a value of a shape it was not resolved for, a wrapper
    /// describer hands the value itself to its inner describer, and
    /// `SelfDescribing` falls back to the `Object` rendering.
    pub fn describe_to(&self, value: &Value, description: &mut Description) {
        match self {
            Self::SelfDescribing => match value.as_self_describing() {
                Some(sd) => sd.describe_to(description),
                None => {
                    description.append_text(&value.to_string());
                }
            },
            Self::Object => {
                description.append_text(&value.to_string());
            }
            Self::Item(inner) => {
                inner.describe_to(value.unwrap_item().unwrap_or(value), description);
            }
            Self::Collection(inner) => match value.as_collection() {
                Some(items) => {
                    description.append_list("", COLLECTION_SEPARATOR, "", items, inner);
                }
                None => inner.describe_to(value, description),
            },
            Self::Null => {
                description.append_text(NULL_TEXT);
            }
            Self::Custom(custom) => custom.describe_to(value, description),
        }
    }

    /// Render `value` to a new string.
    #[must_use]
    pub fn describe(&self, value: &Value) -> String {
        let mut description = Description::new();
        self.describe_to(value, &mut description);
        description.into_string()
    }
}

/// Closure-backed [`Describe`], see [`Describer::from_fn`].
struct FnDescriber<F> {
    name: &'static str,
    f: F,
}

impl<F> Debug for FnDescriber<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FnDescriber").field(&self.name).finish()
    }
}

impl<F> Describe for FnDescriber<F>
where
    F: Fn(&Value, &mut Description) + Send + Sync,
{
    fn describe_to(&self, value: &Value, description: &mut Description) {
        (self.f)(value, description);
    }
}
