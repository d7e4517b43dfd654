//! Format registry for format discovery and selection
//!
//! Renderings are registered and retrieved by name.

use super::{Format, JsonFormat, YamlFormat};
use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::HashMap;

/// Registry of textual renderings
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let tree = registry.parse(source, "yaml")?;
/// let json = registry.serialize(&tree, "json")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| Error::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Parse source text into the generic tree using the specified format
    pub fn parse(&self, source: &str, format: &str) -> Result<Value> {
        self.get(format)?.parse_tree(source)
    }

    /// Render the generic tree using the specified format
    pub fn serialize(&self, tree: &Value, format: &str) -> Result<String> {
        self.get(format)?.write_tree(tree)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(JsonFormat::default());
        registry.register(YamlFormat);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
