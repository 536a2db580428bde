//! Conformance test fixture runner
//!
//! Loads YAML fixtures and runs them against a [`DescriberRegistry`].
//!
//! ```yaml
//! name: tagged_int
//! description: Registered selectors render matching values
//! registry:
//!   - selector: int
//!     describer: { tagged: D_int }
//! cases:
//!   - name: collection of ints
//!     value: [1, 2, 3]
//!     kind: collection
//!     expect: "D_int(1), D_int(2), D_int(3)"
//! ```
//!
//! Values are plain YAML with three object forms:
//!
//! - `{ item: v }` — an `Item` wrapping `v`
//! - `{ element: { tag, text, attributes } }` — a [`TestElement`]
//! - `{ locator: { strategy, query } }` — a [`TestLocator`]

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::{TestElement, TestLocator};
use sniff::prelude::*;

/// A complete test fixture
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub name: String,
    pub description: String,
    /// Entries registered after the default, in order.
    #[serde(default)]
    pub registry: Vec<EntryConfig>,
    /// Also install the test-domain describers via [`crate::register`].
    #[serde(default)]
    pub domain: bool,
    pub cases: Vec<TestCase>,
}

/// One `selector -> describer` registration
#[derive(Debug, Deserialize)]
pub struct EntryConfig {
    pub selector: String,
    pub describer: DescriberConfig,
}

/// Describer configuration
/// Uses untagged deserialization - order matters!
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DescriberConfig {
    /// `{ tagged: T }` renders `T(<object text>)`
    Tagged { tagged: String },
    /// `object`, `self_describing`, `quoted` or `null`
    Named(String),
}

impl DescriberConfig {
    /// Build the describer this config names.
    ///
    /// # Errors
    ///
    /// Returns the unknown name if a named describer is not recognised.
    pub fn build(&self) -> Result<Describer, String> {
        match self {
            Self::Tagged { tagged } => {
                let tag = tagged.clone();
                Ok(Describer::from_fn("tagged", move |value, d| {
                    d.append_text(&tag)
                        .append_text("(")
                        .append_text(&value.to_string())
                        .append_text(")");
                }))
            }
            Self::Named(name) => match name.as_str() {
                "object" => Ok(Describer::Object),
                "self_describing" => Ok(Describer::SelfDescribing),
                "null" => Ok(Describer::Null),
                "quoted" => Ok(Describer::from_fn("quoted", |value, d| {
                    d.append_value(value);
                })),
                other => Err(format!("unknown describer: {other}")),
            },
        }
    }
}

/// A single test case
#[derive(Debug, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub value: serde_json::Value,
    pub expect: String,
    /// Expected [`Describer::kind`] of the resolved describer.
    #[serde(default)]
    pub kind: Option<String>,
}

/// Result of running a test case
#[derive(Debug)]
pub struct CaseResult {
    pub case_name: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
}

impl Fixture {
    /// Parse a fixture from YAML
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or doesn't match the fixture schema.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Parse multiple fixtures from a YAML file (separated by ---)
    ///
    /// # Errors
    ///
    /// Returns an error if any YAML document is invalid or doesn't match the fixture schema.
    pub fn from_yaml_multi(yaml: &str) -> Result<Vec<Self>, serde_yaml::Error> {
        let mut fixtures = Vec::new();
        for doc in serde_yaml::Deserializer::from_str(yaml) {
            let fixture = Self::deserialize(doc)?;
            fixtures.push(fixture);
        }
        Ok(fixtures)
    }

    /// Build the registry this fixture describes.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first unusable describer.
    pub fn build_registry(&self) -> Result<DescriberRegistry, String> {
        let mut registry = DescriberRegistry::new();
        if self.domain {
            registry = crate::register(registry);
        }
        for entry in &self.registry {
            let describer = entry
                .describer
                .build()
                .map_err(|e| format!("selector '{}': {e}", entry.selector))?;
            registry.register(entry.selector.clone(), describer);
        }
        Ok(registry)
    }

    /// Run all test cases and return results
    ///
    /// # Panics
    ///
    /// Panics if the fixture's registry cannot be built.
    #[must_use]
    pub fn run(&self) -> Vec<CaseResult> {
        let registry = self
            .build_registry()
            .unwrap_or_else(|e| panic!("Fixture '{}': {e}", self.name));

        self.cases
            .iter()
            .map(|case| {
                let value = to_value(&case.value);
                let describer = registry.describer_for(&value);
                let actual = describer.describe(&value);

                let kind_ok = case
                    .kind
                    .as_deref()
                    .map_or(true, |kind| kind == describer.kind());

                CaseResult {
                    case_name: case.name.clone(),
                    passed: kind_ok && actual == case.expect,
                    expected: match &case.kind {
                        Some(kind) => format!("{kind}: {}", case.expect),
                        None => case.expect.clone(),
                    },
                    actual: match &case.kind {
                        Some(_) => format!("{}: {actual}", describer.kind()),
                        None => actual,
                    },
                }
            })
            .collect()
    }

    /// Run and assert all cases pass
    ///
    /// # Panics
    ///
    /// Panics if any test case fails.
    pub fn run_and_assert(&self) {
        for result in self.run() {
            assert!(
                result.passed,
                "Fixture '{}' case '{}' failed: expected {:?}, got {:?}",
                self.name, result.case_name, result.expected, result.actual
            );
        }
    }
}

/// Convert fixture data into a [`Value`], recognising the test-domain forms.
#[must_use]
pub fn to_value(json: &serde_json::Value) -> Value {
    use serde_json::Value as Json;

    match json {
        Json::Array(items) => Value::Collection(items.iter().map(to_value).collect()),
        Json::Object(map) if map.len() == 1 => {
            if let Some(inner) = map.get(sniff::ITEM_KEY) {
                return Value::item(to_value(inner));
            }
            if let Some(element) = map.get("element").and_then(element_from) {
                return element.into_value();
            }
            if let Some(locator) = map.get("locator").and_then(locator_from) {
                return locator.into_value();
            }
            Value::from(json.clone())
        }
        other => Value::from(other.clone()),
    }
}

#[derive(Deserialize)]
struct ElementConfig {
    tag: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    attributes: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct LocatorConfig {
    #[serde(default = "default_strategy")]
    strategy: String,
    query: String,
}

fn default_strategy() -> String {
    "css".to_owned()
}

fn element_from(json: &serde_json::Value) -> Option<TestElement> {
    let config: ElementConfig = serde_json::from_value(json.clone()).ok()?;
    Some(
        config
            .attributes
            .into_iter()
            .fold(TestElement::new(config.tag, config.text), |el, (k, v)| {
                el.with_attribute(k, v)
            }),
    )
}

fn locator_from(json: &serde_json::Value) -> Option<TestLocator> {
    let config: LocatorConfig = serde_json::from_value(json.clone()).ok()?;
    Some(TestLocator::new(config.strategy, config.query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixture() {
        let yaml = r#"
name: basic
description: Tagged describer on int
registry:
  - selector: int
    describer: { tagged: D_int }
cases:
  - name: int
    value: 7
    kind: custom
    expect: "D_int(7)"
  - name: string falls back
    value: abc
    kind: object
    expect: "abc"
"#;
        let fixture = Fixture::from_yaml(yaml).unwrap();
        assert_eq!(fixture.name, "basic");
        assert_eq!(fixture.cases.len(), 2);
        fixture.run_and_assert();
    }

    #[test]
    fn test_multi_document() {
        let yaml = r#"
name: one
description: first
cases:
  - { name: absent, value: null, expect: "null" }
---
name: two
description: second
registry:
  - { selector: string, describer: quoted }
cases:
  - { name: quoted, value: hi, expect: "\"hi\"" }
"#;
        let fixtures = Fixture::from_yaml_multi(yaml).unwrap();
        assert_eq!(fixtures.len(), 2);
        for fixture in fixtures {
            fixture.run_and_assert();
        }
    }

    #[test]
    fn test_failing_case_reported() {
        let yaml = r#"
name: wrong
description: expectation is off
cases:
  - { name: int, value: 1, kind: "null", expect: "1" }
"#;
        let results = Fixture::from_yaml(yaml).unwrap().run();
        assert!(!results[0].passed);
        assert_eq!(results[0].actual, "object: 1");
    }

    #[test]
    fn test_unknown_describer() {
        let config = DescriberConfig::Named("fancy".into());
        assert_eq!(config.build().unwrap_err(), "unknown describer: fancy");
    }

    #[test]
    fn test_to_value_forms() {
        let json: serde_json::Value = serde_json::from_str(
            r#"[{"item": 1}, {"element": {"tag": "a", "text": "x"}}, {"locator": {"query": "p"}}, {"a": 1}]"#,
        )
        .unwrap();
        let value = to_value(&json);
        let items = value.as_collection().unwrap();
        assert_eq!(items[0], Value::item(1));
        assert_eq!(items[1].type_name(), "test_element");
        assert_eq!(items[2].type_name(), "test_locator");
        assert_eq!(items[3], Value::from(r#"{"a":1}"#));
    }
}
