//! Annotated text model
//!
//! Spans, extended properties, the attribute kinds, containers, and the document that holds
//! them. All values are immutable once built; builders are the only way in.

pub mod attribute;
pub mod codes;
pub mod container;
pub mod kinds;
pub mod properties;
pub mod span;
pub mod text;

pub use attribute::{Attribute, AttributeKind, Cardinality};
pub use codes::{LanguageCode, ScriptCode, TextDomain, TransliterationScheme};
pub use container::{Container, ListBuilder};
pub use kinds::*;
pub use properties::ExtendedProperties;
pub use span::Span;
pub use text::{keys, AnnotatedText, AnnotatedTextBuilder, Attributes, Text};
