//! Describer registry: picks a [`Describer`] for an arbitrary [`Value`].
//!
//! # Resolution order
//!
//! [`DescriberRegistry::describer_for`] evaluates, first match wins:
//!
//! | Step | Value shape | Result |
//! |------|-------------|--------|
//! | 0 | `Null` | [`Describer::Null`] |
//! | 1 | `Item(inner)` | [`Describer::Item`] around the describer for `inner` |
//! | 2 | non-empty `Collection` | [`Describer::Collection`] around the describer for the **first** element |
//! | 3 | anything else | describer of the first registered selector the value satisfies |
//! | 4 | no selector matches | [`Describer::Object`] |
//!
//! Step 2 inspects only the first element. A mixed collection is rendered as
//! if every element had the first element's type.
//!
//! # Priority
//!
//! Entries keep insertion order. Re-registering a selector swaps the
//! describer but keeps the original position, so a narrow selector must be
//! registered before a broader one it overlaps with.
//!
//! # Example
//!
//! ```
//! use sniff::{Describer, DescriberRegistry, Selector, Value};
//!
//! let registry = DescriberRegistry::new().with(
//!     Selector::INT,
//!     Describer::from_fn("int", |value, d| {
//!         d.append_text("#").append_text(&value.to_string());
//!     }),
//! );
//!
//! assert_eq!(registry.describe(&Value::from(vec![3, 4, 5])), "#3, #4, #5");
//! assert_eq!(registry.describe(&Value::from("hello")), "hello");
//! ```

use indexmap::IndexMap;

use crate::{Describer, Description, Selector, Value};

/// Ordered mapping from [`Selector`] to [`Describer`].
///
/// Always holds at least the `(self_describing, SelfDescribing)` entry.
///
/// The registry is `Send + Sync`; share it behind `Arc` once setup is done,
/// or behind a lock if `register` must keep running concurrently with lookups.
#[derive(Debug, Clone)]
pub struct DescriberRegistry {
    entries: IndexMap<Selector, Describer>,
}

impl DescriberRegistry {
    /// Create a registry holding only the default self-describing entry.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            entries: IndexMap::new(),
        };
        registry.register(Selector::SELF_DESCRIBING, Describer::SelfDescribing);
        registry
    }

    /// Register `describer` for `selector`.
    ///
    /// A new selector is appended after every existing entry. An existing
    /// selector gets the new describer at its current position.
    pub fn register(&mut self, selector: impl Into<Selector>, describer: Describer) {
        let selector = selector.into();
        match self.entries.get_mut(&selector) {
            Some(slot) => {
                tracing::debug!(%selector, kind = describer.kind(), "replacing describer");
                *slot = describer;
            }
            None => {
                tracing::trace!(%selector, kind = describer.kind(), "registering describer");
                self.entries.insert(selector, describer);
            }
        }
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, selector: impl Into<Selector>, describer: Describer) -> Self {
        self.register(selector, describer);
        self
    }

    /// Resolve the describer for `value`. Never fails.
    #[must_use]
    pub fn describer_for(&self, value: &Value) -> Describer {
        match value {
            Value::Null => Describer::Null,
            Value::Item(inner) => Describer::item(self.describer_for(inner)),
            Value::Collection(items) if !items.is_empty() => {
                Describer::collection(self.describer_for(&items[0]))
            }
            _ => self.lookup(value).cloned().unwrap_or_else(|| {
                tracing::trace!(type_name = value.type_name(), "no selector matched, using object describer");
                Describer::Object
            }),
        }
    }

    /// Render `value` with the describer resolved for it.
    #[must_use]
    pub fn describe(&self, value: &Value) -> String {
        self.describer_for(value).describe(value)
    }

    /// Append `value`, rendered with the describer resolved for it.
    pub fn describe_to(&self, value: &Value, description: &mut Description) {
        self.describer_for(value).describe_to(value, description);
    }

    /// Returns the number of registered selectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: the default entry cannot be removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `selector` is registered.
    #[must_use]
    pub fn contains(&self, selector: &Selector) -> bool {
        self.entries.contains_key(selector)
    }

    /// Returns the registered selectors in priority order.
    #[must_use]
    pub fn selectors(&self) -> Vec<&Selector> {
        self.entries.keys().collect()
    }

    /// Returns the describer registered for exactly `selector`.
    #[must_use]
    pub fn get(&self, selector: &Selector) -> Option<&Describer> {
        self.entries.get(selector)
    }

    fn lookup(&self, value: &Value) -> Option<&Describer> {
        self.entries
            .iter()
            .find(|(selector, _)| value.satisfies(selector))
            .map(|(_, describer)| describer)
    }
}

impl Default for DescriberRegistry {
    fn default() -> Self {
        Self::new()
    }
}
