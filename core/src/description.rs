//! `Description` — Text buffer for diagnostic messages
//!
//! Describers append to a [`Description`] rather than returning strings, so a
//! mismatch message can be assembled from several pieces (expected text,
//! described actual value, nested diagnostics) without intermediate
//! allocations.

use std::fmt;

use crate::{Describer, Value};

/// Accumulates the text of a diagnostic message.
///
/// # Example
///
/// ```
/// use sniff::{Describer, Description, Value};
///
/// let mut description = Description::new();
/// description
///     .append_text("expected ")
///     .append_value(&Value::from("ok"))
///     .append_text(" but was ")
///     .append_described(&Describer::Object, &Value::from(404));
///
/// assert_eq!(description.as_str(), r#"expected "ok" but was 404"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    text: String,
}

impl Description {
    /// Create an empty description.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append literal text.
    pub fn append_text(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self
    }

    /// Append a value in literal form: strings are quoted, containers are
    /// bracketed, and custom values without their own rendering are wrapped
    /// in angle brackets.
    pub fn append_value(&mut self, value: &Value) -> &mut Self {
        match value {
            Value::String(s) => {
                self.text.push_str(&format!("{s:?}"));
            }
            Value::Item(inner) => {
                self.text.push_str("Item(");
                self.append_value(inner);
                self.text.push(')');
            }
            Value::Collection(items) => {
                self.text.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.text.push_str(", ");
                    }
                    self.append_value(item);
                }
                self.text.push(']');
            }
            Value::Custom(c) => match c.as_self_describing() {
                Some(sd) => sd.describe_to(self),
                None => self.text.push_str(&format!("<{c:?}>")),
            },
            other => self.text.push_str(&other.to_string()),
        }
        self
    }

    /// Append `value` as rendered by `describer`.
    pub fn append_described(&mut self, describer: &Describer, value: &Value) -> &mut Self {
        describer.describe_to(value, self);
        self
    }

    /// Append every value rendered by `describer`, between `start` and `end`
    /// and separated by `separator`.
    pub fn append_list(
        &mut self,
        start: &str,
        separator: &str,
        end: &str,
        values: &[Value],
        describer: &Describer,
    ) -> &mut Self {
        self.text.push_str(start);
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.text.push_str(separator);
            }
            describer.describe_to(value, self);
        }
        self.text.push_str(end);
        self
    }

    /// Returns the accumulated text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` if nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume the description and return its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Write for Description {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text.push_str(s);
        Ok(())
    }
}

impl From<Description> for String {
    fn from(description: Description) -> Self {
        description.text
    }
}
