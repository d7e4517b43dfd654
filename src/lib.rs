//! # annotext
//!
//! A body of text plus independently produced layers of annotation (tokens, sentences,
//! entity mentions, resolved entities, script and language regions, morphology,
//! translations), and the interchange format those layers travel in.
//!
//! Producers and consumers of the format release on their own schedules. A consumer built
//! against an older schema has to read documents written by a newer producer without losing
//! anything, and write them back out unchanged. That requirement drives the design.
//!
//! Architecture
//!
//!     - model: Span, ExtendedProperties, the closed set of attribute kinds, Container and
//!       AnnotatedText. Everything is built through builders and immutable afterwards.
//!     - codec: the Type Registry and the encode/decode engine over a generic
//!       `serde_json::Value` tree. Unknown types become generic placeholders, unknown
//!       fields on known types land in extended properties.
//!     - format: textual renderings (JSON, YAML) of the generic tree, a registry to pick
//!       them by name, and `DocumentCodec` which ties a rendering to the decoder.
//!     - config: layered configuration (embedded defaults, user files, overrides).
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── config.rs
//!     ├── model
//!     │   ├── span.rs, properties.rs, attribute.rs, container.rs, text.rs, codes.rs
//!     │   └── kinds/<kind>.rs      # one file per attribute kind, plus generic.rs
//!     ├── codec
//!     │   ├── fields.rs            # FieldReader / FieldWriter over the generic tree
//!     │   ├── registry.rs          # TypeRegistry and the process-wide instance
//!     │   ├── encode.rs
//!     │   └── decode.rs
//!     └── format
//!         ├── json.rs, yaml.rs
//!         ├── registry.rs
//!         └── document_codec.rs
//!
//! Interchange Shape
//!
//!     {
//!       "data": "This is the terrier shot to Boston.",
//!       "metadata": { "source": ["wire"] },
//!       "attributes": {
//!         "languageDetection": { "type": "languageDetection", "startOffset": 0, ... },
//!         "token": { "type": "list", "itemType": "token", "items": [ { ... }, ... ] }
//!       }
//!     }
//!
//!     Single containers merge the attribute's fields into the node next to `type`. List
//!     containers use `type: "list"` with `itemType` and `items`. Extended properties are
//!     merged in at the level of whatever owns them.

pub mod codec;
pub mod config;
pub mod error;
pub mod format;
pub mod model;

pub use codec::{decode, decode_with, encode, Decoder, RegistryEntry, TypeRegistry};
pub use error::{Error, Result};
pub use format::{DocumentCodec, Format, FormatRegistry};
pub use model::{
    keys, AnnotatedText, AnnotatedTextBuilder, Attribute, AttributeKind, Cardinality, Container,
    ExtendedProperties, ListBuilder, Span, Text,
};
