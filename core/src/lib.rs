//! sniff - describer registry for matcher diagnostics
//!
//! When a matcher fails, the mismatch message has to say what the actual
//! value was. `sniff` picks a human-readable rendering for an arbitrary
//! runtime value.
//!
//! # Architecture
//!
//! - [`Value`] — Erased runtime value (primitives, `Item`, `Collection`, extensible `Custom`)
//! - [`Selector`] — Type/capability key a value may satisfy
//! - [`Describer`] — How a value becomes text (tagged variants + [`Describe`] extension)
//! - [`Description`] — Text buffer the diagnostic message is assembled in
//! - [`DescriberRegistry`] — Ordered `Selector -> Describer` table with first-match-wins lookup
//!
//! # Key Design Insights
//!
//! 1. **Lookup is total**: [`DescriberRegistry::describer_for`] always returns a
//!    describer. Unmatched values get [`Describer::Object`], absent values get
//!    [`Describer::Null`].
//!
//! 2. **Wrappers resolve before the table**: `Item` and non-empty `Collection`
//!    values are unwrapped recursively and their describers composed, before
//!    any registered selector is consulted.
//!
//! 3. **Insertion order is priority**: re-registering a selector never moves it.
//!
//! # Example
//!
//! ```
//! use sniff::prelude::*;
//!
//! let registry = DescriberRegistry::new().with(
//!     Selector::STRING,
//!     Describer::from_fn("quoted", |value, d| {
//!         d.append_value(value);
//!     }),
//! );
//!
//! let actual = Value::item(vec!["Home", "About"]);
//!
//! let mut mismatch = Description::new();
//! mismatch.append_text("found ");
//! registry.describe_to(&actual, &mut mismatch);
//! assert_eq!(mismatch.as_str(), r#"found "Home", "About""#);
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod describer;
mod description;
mod registry;
mod selector;
mod value;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use describer::{Describe, Describer, COLLECTION_SEPARATOR, NULL_TEXT};
pub use description::Description;
pub use registry::DescriberRegistry;
pub use selector::Selector;
pub use value::{CustomValue, SelfDescribing, Value};

#[cfg(feature = "serde")]
pub use value::ITEM_KEY;

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use sniff::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Traits
        CustomValue,
        Describe,
        // Core types
        Describer,
        DescriberRegistry,
        Description,
        SelfDescribing,
        Selector,
        // Errors
        SniffError,
        Value,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from building values out of external data.
///
/// Describer lookup itself cannot fail; these only come from decoding input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SniffError {
    /// Serialized value could not be decoded.
    InvalidValue {
        /// The underlying error message.
        source: String,
    },
}

impl std::fmt::Display for SniffError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { source } => write!(f, "invalid value: {source}"),
        }
    }
}

impl std::error::Error for SniffError {}
