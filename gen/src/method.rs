//! Factory-method metadata and generator configuration.
//!
//! ```yaml
//! module_name: matchers
//! module_path: crate::sugar
//! methods:
//!   - delegate: crate::text::TextMatcher
//!     name: containing
//!     return_type: TextMatcher
//!     parameters:
//!       - { name: needle, type: "&str" }
//!   - delegate: crate::count::CountMatcher
//!     name: at_least
//!     generated_name: at_least_count
//!     return_type: CountMatcher
//!     generified_types: [T]
//!     generic_type_parameters: ["T: Into<u64>"]
//!     parameters:
//!       - { name: n, type: T }
//! ```

use serde::{Deserialize, Serialize};

use crate::GenError;

/// Indentation unit used when a config does not set one.
pub const DEFAULT_INDENT: &str = "    ";

/// One parameter of a factory method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name, also passed through to the delegate call.
    pub name: String,
    /// Parameter type as written in source.
    #[serde(rename = "type")]
    pub ty: String,
}

/// Metadata for one generated function and the constructor it delegates to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoryMethod {
    /// Path of the type or module owning the delegate, e.g. `crate::text::TextMatcher`.
    pub delegate: String,

    /// Name of the delegate function.
    pub name: String,

    /// Return type, without generic arguments.
    pub return_type: String,

    /// Generic arguments of the return type (`TextMatcher<T>` -> `["T"]`).
    #[serde(default)]
    pub generified_types: Vec<String>,

    /// Generic parameters of the function, bounds included (`"T: Display"`).
    #[serde(default)]
    pub generic_type_parameters: Vec<String>,

    /// Function parameters in call order.
    #[serde(default)]
    pub parameters: Vec<Parameter>,

    /// Error type; when set the function returns `Result<return_type, error>`.
    #[serde(default)]
    pub error: Option<String>,

    /// Doc text, one `///` line per line.
    #[serde(default)]
    pub doc: Option<String>,

    /// Name of the emitted function. Defaults to [`name`](Self::name).
    #[serde(default)]
    pub generated_name: Option<String>,
}

impl FactoryMethod {
    /// Create metadata for `delegate::name() -> return_type`.
    pub fn new(
        delegate: impl Into<String>,
        name: impl Into<String>,
        return_type: impl Into<String>,
    ) -> Self {
        Self {
            delegate: delegate.into(),
            name: name.into(),
            return_type: return_type.into(),
            generified_types: Vec::new(),
            generic_type_parameters: Vec::new(),
            parameters: Vec::new(),
            error: None,
            doc: None,
            generated_name: None,
        }
    }

    /// Add a parameter (builder pattern).
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.parameters.push(Parameter {
            name: name.into(),
            ty: ty.into(),
        });
        self
    }

    /// Add a generic parameter, bounds included.
    #[must_use]
    pub fn with_generic(mut self, parameter: impl Into<String>) -> Self {
        self.generic_type_parameters.push(parameter.into());
        self
    }

    /// Add a generic argument of the return type.
    #[must_use]
    pub fn with_generified(mut self, ty: impl Into<String>) -> Self {
        self.generified_types.push(ty.into());
        self
    }

    /// Make the function return `Result<_, error>`.
    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Set the doc text.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Emit the function under a different name.
    #[must_use]
    pub fn with_generated_name(mut self, name: impl Into<String>) -> Self {
        self.generated_name = Some(name.into());
        self
    }

    /// Name of the emitted function.
    #[must_use]
    pub fn function_name(&self) -> &str {
        self.generated_name.as_deref().unwrap_or(&self.name)
    }
}

fn default_indent() -> String {
    DEFAULT_INDENT.to_owned()
}

/// Everything needed to emit one factory module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Name of the emitted `pub mod`.
    pub module_name: String,

    /// Where the module lives, recorded in the header comment.
    #[serde(default)]
    pub module_path: Option<String>,

    /// One indentation level.
    #[serde(default = "default_indent")]
    pub indent: String,

    /// Methods to emit, in order.
    #[serde(default)]
    pub methods: Vec<FactoryMethod>,
}

impl GeneratorConfig {
    /// Create an empty config for module `module_name`.
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            module_path: None,
            indent: default_indent(),
            methods: Vec::new(),
        }
    }

    /// Set the module path recorded in the header.
    #[must_use]
    pub fn with_module_path(mut self, path: impl Into<String>) -> Self {
        self.module_path = Some(path.into());
        self
    }

    /// Set the indentation unit.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Append a method.
    #[must_use]
    pub fn with_method(mut self, method: FactoryMethod) -> Self {
        self.methods.push(method);
        self
    }

    /// Parse a YAML config.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::InvalidConfig`] if the YAML does not describe a config.
    pub fn from_yaml(text: &str) -> Result<Self, GenError> {
        serde_yaml::from_str(text).map_err(|e| GenError::InvalidConfig {
            source: e.to_string(),
        })
    }

    /// Parse a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::InvalidConfig`] if the JSON does not describe a config.
    pub fn from_json(text: &str) -> Result<Self, GenError> {
        serde_json::from_str(text).map_err(|e| GenError::InvalidConfig {
            source: e.to_string(),
        })
    }
}
