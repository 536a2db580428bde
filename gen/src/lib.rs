//! sniff-gen - factory-function generator for matcher libraries
//!
//! Matcher libraries tend to expose their matchers through associated
//! constructors spread over many types (`TextMatcher::containing`,
//! `CountMatcher::at_least`, ...). This crate emits one flat module of free
//! functions that delegate to those constructors, so test code can import a
//! single module.
//!
//! # Pipeline
//!
//! - [`FactoryMethod`] — metadata for one delegate (deserializable from YAML/JSON)
//! - [`GeneratorConfig`] — module name, path, indentation and the method list
//! - [`FactoryWriter`] — header / method / footer emission seam
//! - [`ModuleFactoryWriter`] — writes Rust source to any [`std::io::Write`]
//! - [`SugarGenerator`] — drives a writer over a method list
//!
//! # Example
//!
//! ```
//! use sniff_gen::{FactoryMethod, GeneratorConfig};
//!
//! let config = GeneratorConfig::new("matchers").with_method(
//!     FactoryMethod::new("crate::text::TextMatcher", "containing", "TextMatcher")
//!         .with_parameter("needle", "&str"),
//! );
//!
//! let source = sniff_gen::render_module(&config).unwrap();
//! assert!(source.contains("pub fn containing(needle: &str) -> TextMatcher {"));
//! assert!(source.contains("crate::text::TextMatcher::containing(needle)"));
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod generator;
mod ident;
mod method;
mod writer;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use generator::{render_module, SugarGenerator};
pub use ident::{is_valid_identifier, is_valid_path};
pub use method::{FactoryMethod, GeneratorConfig, Parameter, DEFAULT_INDENT};
pub use writer::{FactoryWriter, ModuleFactoryWriter};

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from loading generator config or emitting source.
#[derive(Debug)]
pub enum GenError {
    /// Writing to the output failed.
    Io(std::io::Error),
    /// A name that must become a Rust identifier or path is not one.
    InvalidIdentifier {
        /// What the name is used as (`"module"`, `"function"`, `"parameter"`, `"delegate"`).
        kind: &'static str,
        /// The rejected name.
        name: String,
    },
    /// Two methods would generate functions with the same name.
    DuplicateFunction {
        /// The generated function name.
        name: String,
    },
    /// Configuration deserialization failed.
    InvalidConfig {
        /// The underlying error message.
        source: String,
    },
}

impl std::fmt::Display for GenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "write failed: {e}"),
            Self::InvalidIdentifier { kind, name } => {
                write!(f, "invalid {kind} name \"{name}\": not a Rust identifier")
            }
            Self::DuplicateFunction { name } => {
                write!(
                    f,
                    "function \"{name}\" is generated more than once; set `generated_name` on one of them"
                )
            }
            Self::InvalidConfig { source } => write!(f, "invalid config: {source}"),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GenError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
