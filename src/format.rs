//! Textual renderings of the interchange tree
//!
//! A [`Format`] turns source text into the generic tree and back; it knows nothing about
//! attributes. [`FormatRegistry`] finds renderings by name, and [`DocumentCodec`] pairs a
//! rendering with the decoder so callers can go straight from text to
//! [`AnnotatedText`](crate::AnnotatedText).

pub mod document_codec;
pub mod json;
pub mod registry;
pub mod yaml;

pub use document_codec::DocumentCodec;
pub use json::JsonFormat;
pub use registry::FormatRegistry;
pub use yaml::YamlFormat;

use crate::error::Result;
use serde_json::Value;

/// Trait for textual renderings
///
/// Implementors provide bidirectional conversion between a string and the generic tree.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn parse_tree(&self, source: &str) -> Result<Value> {
///         // Parse source into the tree
///         todo!()
///     }
///
///     fn write_tree(&self, tree: &Value) -> Result<String> {
///         // Render the tree
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "json", "yaml")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Parse source text into the generic tree
    fn parse_tree(&self, source: &str) -> Result<Value>;

    /// Render the generic tree as text
    fn write_tree(&self, tree: &Value) -> Result<String>;
}
