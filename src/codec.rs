//! Interchange codec
//!
//! Converts between [`AnnotatedText`](crate::AnnotatedText) and the generic tree of mappings,
//! sequences and scalars that every textual rendering shares (`serde_json::Value` with
//! insertion-ordered objects).
//!
//! Decoding never fails because of an unknown attribute type. Each node is first classified
//! into a [`decode::DecodePlan`] by looking its discriminator up in the [`TypeRegistry`]; known
//! kinds decode through the function the registry holds for them, everything else becomes a
//! generic placeholder that keeps every field it was given.

pub mod decode;
pub mod encode;
pub mod fields;
pub mod registry;

pub use decode::{decode, decode_with, Decoder};
pub use encode::encode;
pub use registry::{RegistryEntry, TypeRegistry};

/// Character data
pub const DATA: &str = "data";
/// Raw bytes, base64
pub const RAW_DATA: &str = "rawData";
pub const METADATA: &str = "metadata";
pub const ATTRIBUTES: &str = "attributes";
