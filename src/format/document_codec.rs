//! String to document and back
//!
//! [`DocumentCodec`] is what most callers want: it holds the renderings, the name of the one
//! to use by default, and a [`Decoder`] bound to a type registry.

use super::{FormatRegistry, JsonFormat};
use crate::codec::{encode, registry, Decoder, TypeRegistry};
use crate::config::AnnotextConfig;
use crate::error::{Error, Result};
use crate::model::AnnotatedText;

pub struct DocumentCodec<'r> {
    formats: FormatRegistry,
    output: String,
    decoder: Decoder<'r>,
}

impl DocumentCodec<'static> {
    /// Pretty JSON over the process-wide type registry
    pub fn new() -> Self {
        Self {
            formats: FormatRegistry::with_defaults(),
            output: "json".to_string(),
            decoder: Decoder::new(registry::global()),
        }
    }

    /// Set up from configuration, over the process-wide type registry.
    ///
    /// Fails with `FormatNotFound` if `output.format` names no known rendering.
    pub fn from_config(config: &AnnotextConfig) -> Result<Self> {
        let mut formats = FormatRegistry::with_defaults();
        formats.register(JsonFormat {
            pretty: config.json.pretty,
        });
        if !formats.has(&config.output.format) {
            return Err(Error::FormatNotFound(config.output.format.clone()));
        }
        Ok(Self {
            formats,
            output: config.output.format.clone(),
            decoder: Decoder::new(registry::global())
                .warn_on_ambiguous_nodes(config.decode.warn_on_ambiguous_nodes),
        })
    }
}

impl<'r> DocumentCodec<'r> {
    /// Decode against `types` instead of the process-wide registry
    pub fn with_type_registry<'a>(self, types: &'a TypeRegistry) -> DocumentCodec<'a> {
        let warn = self.decoder.warns_on_ambiguous_nodes();
        DocumentCodec {
            formats: self.formats,
            output: self.output,
            decoder: Decoder::new(types).warn_on_ambiguous_nodes(warn),
        }
    }

    pub fn output_format(&self) -> &str {
        &self.output
    }

    pub fn formats(&self) -> &FormatRegistry {
        &self.formats
    }

    /// Render in the configured format
    pub fn to_string(&self, text: &AnnotatedText) -> Result<String> {
        self.to_string_as(text, &self.output)
    }

    pub fn to_string_as(&self, text: &AnnotatedText, format: &str) -> Result<String> {
        self.formats.serialize(&encode(text), format)
    }

    /// Parse in the configured format
    pub fn from_str(&self, source: &str) -> Result<AnnotatedText> {
        self.from_str_as(source, &self.output)
    }

    pub fn from_str_as(&self, source: &str, format: &str) -> Result<AnnotatedText> {
        let tree = self.formats.parse(source, format)?;
        self.decoder.decode_value(tree)
    }
}

impl Default for DocumentCodec<'static> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Loader;
    use crate::model::kinds::Sentence;

    fn boston() -> AnnotatedText {
        AnnotatedText::builder()
            .data("This is the terrier shot to Boston.")
            .push(Sentence::builder(0, 35).build().unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_json_round_trip() {
        let codec = DocumentCodec::new();
        let rendered = codec.to_string(&boston()).unwrap();
        assert_eq!(codec.from_str(&rendered).unwrap(), boston());
    }

    #[test]
    fn test_yaml_from_config() {
        let config = Loader::new()
            .set_override("output.format", "yaml")
            .unwrap()
            .build()
            .unwrap();
        let codec = DocumentCodec::from_config(&config).unwrap();
        assert_eq!(codec.output_format(), "yaml");
        let rendered = codec.to_string(&boston()).unwrap();
        assert!(rendered.starts_with("data: "));
        assert_eq!(codec.from_str(&rendered).unwrap(), boston());
    }

    #[test]
    fn test_compact_json_from_config() {
        let config = Loader::new()
            .set_override("json.pretty", false)
            .unwrap()
            .build()
            .unwrap();
        let codec = DocumentCodec::from_config(&config).unwrap();
        let rendered = codec.to_string(&boston()).unwrap();
        assert!(!rendered.contains('\n'));
    }

    #[test]
    fn test_unknown_output_format() {
        let config = Loader::new()
            .set_override("output.format", "xml")
            .unwrap()
            .build()
            .unwrap();
        let err = DocumentCodec::from_config(&config).err().unwrap();
        assert_eq!(err, Error::FormatNotFound("xml".to_string()));
    }

    #[test]
    fn test_cross_format() {
        let codec = DocumentCodec::new();
        let yaml = codec.to_string_as(&boston(), "yaml").unwrap();
        let decoded = codec.from_str_as(&yaml, "yaml").unwrap();
        let json = codec.to_string_as(&decoded, "json").unwrap();
        assert_eq!(codec.from_str(&json).unwrap(), boston());
    }
}
