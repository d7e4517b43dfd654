//! Settings for the document codec
//!
//! Three things are configurable: the rendering used when a caller names none, whether JSON is
//! pretty printed, and the log level for ambiguous generic nodes. The shipped values live in
//! `defaults/annotext.default.toml`, which is compiled in. A [`Loader`] stacks TOML files and
//! single-key overrides on top of it, later layers winning, and produces an [`AnnotextConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/annotext.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotextConfig {
    pub output: OutputConfig,
    pub json: JsonConfig,
    pub decode: DecodeConfig,
}

/// Which rendering `DocumentCodec` uses when none is named.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonConfig {
    pub pretty: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecodeConfig {
    pub warn_on_ambiguous_nodes: bool,
}

/// Builds an [`AnnotextConfig`] from the compiled-in settings plus any number of layers
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Add a TOML file; `build` fails if it cannot be read.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_file(path.as_ref(), true)
    }

    /// Add a TOML file that may not exist, such as a per-user settings file.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer_file(path.as_ref(), false)
    }

    fn layer_file(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(file);
        self
    }

    /// Pin one dotted key, e.g. `json.pretty`, above every file layer.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<AnnotextConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The compiled-in settings with nothing layered over them
pub fn load_defaults() -> Result<AnnotextConfig, ConfigError> {
    Loader::new().build()
}
