//! sniff-test: Test domain for conformance testing
//!
//! Provides fake page values and a domain describer so registry behaviour can
//! be tested against something shaped like a browser-testing domain.
//!
//! - [`TestElement`] — a page element that renders itself (self-describing)
//! - [`TestLocator`] — an element query with no rendering of its own
//! - [`LocatorDescriber`] — renders locators, installed by [`register`]
//!
//! # Example
//!
//! ```
//! use sniff_test::prelude::*;
//!
//! let registry = sniff_test::register(DescriberRegistry::new());
//!
//! let link = TestElement::new("a", "Home").with_attribute("href", "/");
//! assert_eq!(registry.describe(&link.into_value()), r#"<a href="/">Home</a>"#);
//!
//! let locator = TestLocator::css("nav > a");
//! assert_eq!(registry.describe(&locator.into_value()), r#"by css "nav > a""#);
//! ```

use std::any::Any;
use std::collections::BTreeMap;

use sniff::prelude::*;

#[cfg(feature = "fixtures")]
pub mod fixture;

/// Selector satisfied by every [`TestElement`].
pub const ELEMENT: Selector = Selector::new("element");

/// Selector satisfied by every [`TestLocator`].
pub const LOCATOR: Selector = Selector::new("locator");

/// Fake page element: tag, visible text, attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestElement {
    tag: String,
    text: String,
    attributes: BTreeMap<String, String>,
}

impl TestElement {
    /// Create an element with the given tag and text.
    #[must_use]
    pub fn new(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: text.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Add an attribute (builder pattern).
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Returns the tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the visible text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Wrap as a [`Value`].
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::custom(self)
    }
}

impl SelfDescribing for TestElement {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("<").append_text(&self.tag);
        for (name, value) in &self.attributes {
            description
                .append_text(" ")
                .append_text(name)
                .append_text("=\"")
                .append_text(value)
                .append_text("\"");
        }
        description
            .append_text(">")
            .append_text(&self.text)
            .append_text("</")
            .append_text(&self.tag)
            .append_text(">");
    }
}

impl CustomValue for TestElement {
    fn custom_type_name(&self) -> &'static str {
        "test_element"
    }

    fn capabilities(&self) -> &[&'static str] {
        &["element"]
    }

    fn as_self_describing(&self) -> Option<&dyn SelfDescribing> {
        Some(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Fake element query, e.g. `css("nav > a")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestLocator {
    strategy: String,
    query: String,
}

impl TestLocator {
    /// Create a locator for `query` using `strategy`.
    #[must_use]
    pub fn new(strategy: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            strategy: strategy.into(),
            query: query.into(),
        }
    }

    /// CSS selector locator.
    #[must_use]
    pub fn css(query: impl Into<String>) -> Self {
        Self::new("css", query)
    }

    /// Wrap as a [`Value`].
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::custom(self)
    }
}

impl CustomValue for TestLocator {
    fn custom_type_name(&self) -> &'static str {
        "test_locator"
    }

    fn capabilities(&self) -> &[&'static str] {
        &["locator"]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Renders [`TestLocator`] values as `by <strategy> "<query>"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocatorDescriber;

impl Describe for LocatorDescriber {
    fn describe_to(&self, value: &Value, description: &mut Description) {
        match value
            .as_custom()
            .and_then(|c| c.as_any().downcast_ref::<TestLocator>())
        {
            Some(locator) => {
                description
                    .append_text("by ")
                    .append_text(&locator.strategy)
                    .append_text(" ")
                    .append_value(&Value::from(locator.query.as_str()));
            }
            None => {
                description.append_text(&value.to_string());
            }
        }
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::{LocatorDescriber, TestElement, TestLocator, ELEMENT, LOCATOR};
    pub use sniff::prelude::*;
}

/// Register the test-domain describers on top of `registry`.
///
/// - `locator` → [`LocatorDescriber`]
#[must_use]
pub fn register(registry: DescriberRegistry) -> DescriberRegistry {
    registry.with(LOCATOR, Describer::custom(LocatorDescriber))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_describes_itself() {
        let registry = DescriberRegistry::new();
        let input = TestElement::new("input", "")
            .with_attribute("type", "email")
            .with_attribute("name", "login");
        assert_eq!(
            registry.describe(&input.into_value()),
            r#"<input name="login" type="email"></input>"#
        );
    }

    #[test]
    fn element_accessors() {
        let button = TestElement::new("button", "Save").with_attribute("type", "submit");
        assert_eq!(button.tag(), "button");
        assert_eq!(button.text(), "Save");
    }

    #[test]
    fn element_satisfies_element_selector() {
        let value = TestElement::new("p", "x").into_value();
        assert!(value.satisfies(&ELEMENT));
        assert!(value.satisfies(&Selector::SELF_DESCRIBING));
        assert!(!value.satisfies(&LOCATOR));
    }

    #[test]
    fn locator_needs_domain_registration() {
        let value = TestLocator::css("#main").into_value();

        let bare = DescriberRegistry::new();
        assert_eq!(bare.describer_for(&value), Describer::Object);

        let registry = register(DescriberRegistry::new());
        assert_eq!(registry.describer_for(&value).kind(), "custom");
        assert_eq!(registry.describe(&value), r##"by css "#main""##);
    }

    #[test]
    fn element_list() {
        let registry = register(DescriberRegistry::new());
        let links = Value::collection(vec![
            TestElement::new("a", "Home").into_value(),
            TestElement::new("a", "About").into_value(),
        ]);
        assert_eq!(registry.describe(&links), "<a>Home</a>, <a>About</a>");
    }

    #[test]
    fn locator_describer_on_other_values() {
        let describer = Describer::custom(LocatorDescriber);
        assert_eq!(describer.describe(&Value::from(3)), "3");
    }
}
