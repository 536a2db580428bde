//! Drives a [`FactoryWriter`] over a list of factory methods.

use std::collections::HashSet;

use crate::{FactoryMethod, FactoryWriter, GenError, GeneratorConfig, ModuleFactoryWriter};

/// Collects factory methods and writes them as one module.
///
/// # Example
///
/// ```
/// use sniff_gen::{FactoryMethod, ModuleFactoryWriter, SugarGenerator};
///
/// let mut generator = SugarGenerator::new();
/// generator.add_method(FactoryMethod::new("Text", "empty", "Text"));
///
/// let mut writer = ModuleFactoryWriter::new("sugar", Vec::new());
/// assert_eq!(generator.generate(&mut writer).unwrap(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SugarGenerator {
    methods: Vec<FactoryMethod>,
}

impl SugarGenerator {
    /// Create a generator with no methods.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator holding the methods of `config`.
    #[must_use]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            methods: config.methods.clone(),
        }
    }

    /// Queue one method.
    pub fn add_method(&mut self, method: FactoryMethod) {
        self.methods.push(method);
    }

    /// Queue several methods.
    pub fn add_methods(&mut self, methods: impl IntoIterator<Item = FactoryMethod>) {
        self.methods.extend(methods);
    }

    /// Returns the queued methods.
    #[must_use]
    pub fn methods(&self) -> &[FactoryMethod] {
        &self.methods
    }

    /// Write header, every method, and footer to `writer`, then flush.
    ///
    /// Returns the number of methods written.
    ///
    /// # Errors
    ///
    /// - [`GenError::DuplicateFunction`] — two methods map to the same function name
    /// - [`GenError::InvalidIdentifier`] — a module, function, parameter or delegate name is unusable
    /// - [`GenError::Io`] — the writer failed
    pub fn generate(&self, writer: &mut dyn FactoryWriter) -> Result<usize, GenError> {
        let mut seen = HashSet::new();
        if let Some(dup) = self
            .methods
            .iter()
            .map(FactoryMethod::function_name)
            .find(|name| !seen.insert(*name))
        {
            return Err(GenError::DuplicateFunction {
                name: dup.to_owned(),
            });
        }

        writer.write_header()?;
        for method in &self.methods {
            writer.write_method(method.function_name(), method)?;
        }
        writer.write_footer()?;
        writer.flush()?;

        tracing::debug!(count = self.methods.len(), "generated factory module");
        Ok(self.methods.len())
    }
}

/// Render the module described by `config` to a string.
///
/// # Errors
///
/// Same as [`SugarGenerator::generate`].
pub fn render_module(config: &GeneratorConfig) -> Result<String, GenError> {
    let mut writer = ModuleFactoryWriter::new(config.module_name.as_str(), Vec::new())
        .with_indent(config.indent.as_str());
    if let Some(path) = &config.module_path {
        writer = writer.with_module_path(path.as_str());
    }

    SugarGenerator::from_config(config).generate(&mut writer)?;
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}
