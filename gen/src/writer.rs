//! Source emission for factory modules.
//!
//! A [`FactoryWriter`] receives the module in three phases: header, one call
//! per method, footer. [`ModuleFactoryWriter`] turns them into Rust source:
//!
//! ```text
//! // Generated source.
//! // Module path: crate::sugar
//!
//! pub mod matchers {
//!
//!     /// Text contains `needle`.
//!     pub fn containing(needle: &str) -> TextMatcher {
//!         crate::text::TextMatcher::containing(needle)
//!     }
//!
//! }
//! ```

use std::io::Write;

use crate::{is_valid_identifier, is_valid_path, FactoryMethod, GenError, DEFAULT_INDENT};

/// Receives a factory module piece by piece.
pub trait FactoryWriter {
    /// Write everything that precedes the first method.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Io`] on write failure, or
    /// [`GenError::InvalidIdentifier`] if the module name is unusable.
    fn write_header(&mut self) -> Result<(), GenError>;

    /// Write one function named `generated_name` delegating to `method`.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Io`] on write failure, or
    /// [`GenError::InvalidIdentifier`] if a name in `method` is unusable.
    fn write_method(&mut self, generated_name: &str, method: &FactoryMethod)
        -> Result<(), GenError>;

    /// Write everything that follows the last method.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Io`] on write failure.
    fn write_footer(&mut self) -> Result<(), GenError>;

    /// Flush buffered output.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::Io`] on flush failure.
    fn flush(&mut self) -> Result<(), GenError>;
}

/// Writes a `pub mod` of delegating functions as Rust source.
#[derive(Debug)]
pub struct ModuleFactoryWriter<W> {
    output: W,
    module_name: String,
    module_path: Option<String>,
    indent_unit: String,
    newline: &'static str,
    indentation: usize,
}

impl<W: Write> ModuleFactoryWriter<W> {
    /// Create a writer emitting module `module_name` into `output`.
    pub fn new(module_name: impl Into<String>, output: W) -> Self {
        Self {
            output,
            module_name: module_name.into(),
            module_path: None,
            indent_unit: DEFAULT_INDENT.to_owned(),
            newline: "\n",
            indentation: 1,
        }
    }

    /// Record where the module lives in the header comment.
    #[must_use]
    pub fn with_module_path(mut self, path: impl Into<String>) -> Self {
        self.module_path = Some(path.into());
        self
    }

    /// Set the indentation unit (default four spaces).
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent_unit = indent.into();
        self
    }

    /// Returns the underlying output.
    pub fn into_inner(self) -> W {
        self.output
    }

    fn indent(&mut self) -> Result<(), GenError> {
        for _ in 0..self.indentation {
            self.output.write_all(self.indent_unit.as_bytes())?;
        }
        Ok(())
    }

    fn write_doc(&mut self, method: &FactoryMethod) -> Result<(), GenError> {
        let Some(doc) = method.doc.as_deref().filter(|d| !d.trim().is_empty()) else {
            return Ok(());
        };
        for line in doc.lines() {
            self.indent()?;
            if line.is_empty() {
                write!(self.output, "///{}", self.newline)?;
            } else {
                write!(self.output, "/// {line}{}", self.newline)?;
            }
        }
        Ok(())
    }

    fn write_signature(&mut self, generated_name: &str, method: &FactoryMethod) -> Result<(), GenError> {
        self.indent()?;
        write!(self.output, "pub fn {generated_name}")?;
        if !method.generic_type_parameters.is_empty() {
            // Lifetimes must precede type parameters.
            let (lifetimes, types): (Vec<&String>, Vec<&String>) = method
                .generic_type_parameters
                .iter()
                .partition(|p| p.trim_start().starts_with('\''));
            let generics = lifetimes
                .into_iter()
                .chain(types)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            write!(self.output, "<{generics}>")?;
        }

        let parameters = method
            .parameters
            .iter()
            .map(|p| format!("{}: {}", p.name, p.ty))
            .collect::<Vec<_>>()
            .join(", ");
        write!(self.output, "({parameters}) -> ")?;

        let mut return_type = method.return_type.clone();
        if !method.generified_types.is_empty() {
            return_type = format!("{return_type}<{}>", method.generified_types.join(", "));
        }
        match &method.error {
            Some(error) => write!(self.output, "Result<{return_type}, {error}>")?,
            None => write!(self.output, "{return_type}")?,
        }
        write!(self.output, " {{{}", self.newline)?;
        Ok(())
    }

    fn write_body(&mut self, method: &FactoryMethod) -> Result<(), GenError> {
        self.indent()?;
        write!(self.output, "{}::{}", method.delegate, method.name)?;

        let turbofish = turbofish_arguments(&method.generic_type_parameters);
        if !turbofish.is_empty() {
            write!(self.output, "::<{}>", turbofish.join(", "))?;
        }

        let arguments = method
            .parameters
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        write!(self.output, "({arguments}){}", self.newline)?;
        Ok(())
    }
}

impl<W: Write> FactoryWriter for ModuleFactoryWriter<W> {
    fn write_header(&mut self) -> Result<(), GenError> {
        if !is_valid_identifier(&self.module_name) {
            return Err(GenError::InvalidIdentifier {
                kind: "module",
                name: self.module_name.clone(),
            });
        }
        let nl = self.newline;
        write!(self.output, "// Generated source.{nl}")?;
        if let Some(path) = &self.module_path {
            write!(self.output, "// Module path: {path}{nl}")?;
        }
        write!(self.output, "{nl}pub mod {} {{{nl}{nl}", self.module_name)?;
        Ok(())
    }

    fn write_method(&mut self, generated_name: &str, method: &FactoryMethod) -> Result<(), GenError> {
        validate(method, generated_name)?;
        tracing::debug!(function = generated_name, delegate = %method.delegate, "writing factory method");

        self.write_doc(method)?;
        self.write_signature(generated_name, method)?;
        self.indentation += 1;
        let body = self.write_body(method);
        self.indentation -= 1;
        body?;
        self.indent()?;
        write!(self.output, "}}{nl}{nl}", nl = self.newline)?;
        Ok(())
    }

    fn write_footer(&mut self) -> Result<(), GenError> {
        write!(self.output, "}}{}", self.newline)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), GenError> {
        self.output.flush()?;
        Ok(())
    }
}

/// Leading type name of each generic parameter: `"T: Display"` -> `"T"`.
/// Lifetimes are dropped since they cannot always be passed explicitly.
fn turbofish_arguments(parameters: &[String]) -> Vec<&str> {
    parameters
        .iter()
        .filter_map(|p| {
            p.split(|c: char| c == ':' || c.is_whitespace())
                .find(|token| !token.is_empty())
        })
        .filter(|token| !token.starts_with('\''))
        .collect()
}

fn validate(method: &FactoryMethod, generated_name: &str) -> Result<(), GenError> {
    let invalid = |kind, name: &str| GenError::InvalidIdentifier {
        kind,
        name: name.to_owned(),
    };
    if !is_valid_identifier(generated_name) {
        return Err(invalid("function", generated_name));
    }
    if !is_valid_identifier(&method.name) {
        return Err(invalid("function", &method.name));
    }
    if !is_valid_path(&method.delegate) {
        return Err(invalid("delegate", &method.delegate));
    }
    if let Some(p) = method.parameters.iter().find(|p| !is_valid_identifier(&p.name)) {
        return Err(invalid("parameter", &p.name));
    }
    Ok(())
}
