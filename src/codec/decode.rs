//! Decoding
//!
//! Each attribute node is classified once into a [`DecodePlan`]:
//!
//!     type == "list", itemType known      -> KnownList
//!     type == "list", itemType unknown    -> GenericList
//!     type known                          -> KnownSingle
//!     type unknown or absent              -> GenericSingle
//!
//! When `itemType` (or, for a single node, `type`) is absent, the attribute key stands in as
//! the kind name. Known kinds consume the fields they know and leave the rest in their
//! extended properties. Generic placeholders keep every field, offsets included.
//!
//! Only `type: "list"` makes a node a list. A non-list node that happens to carry `items` or
//! `itemType` is decoded as a single placeholder and logged, since a newer producer may have
//! meant something by it.

use super::fields::{kind_of, FieldReader};
use super::registry::{self, RegistryEntry, TypeRegistry};
use super::{ATTRIBUTES, DATA, METADATA, RAW_DATA};
use crate::error::{Error, Result};
use crate::model::attribute::{Attribute, LIST_TYPE, TYPE_KEY};
use crate::model::container::{Container, ITEMS_KEY, ITEM_TYPE_KEY};
use crate::model::kinds::GenericAttribute;
use crate::model::{AnnotatedText, AnnotatedTextBuilder};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

/// Decode with the process-wide registry
pub fn decode(value: &Value) -> Result<AnnotatedText> {
    Decoder::new(registry::global()).decode(value)
}

/// Decode with an explicit registry
pub fn decode_with(value: &Value, registry: &TypeRegistry) -> Result<AnnotatedText> {
    Decoder::new(registry).decode(value)
}

/// How one attribute node is going to be decoded
#[derive(Debug, Clone, Copy)]
pub enum DecodePlan<'r> {
    KnownSingle(&'r RegistryEntry),
    KnownList(&'r RegistryEntry),
    GenericSingle,
    GenericList,
}

const AMBIGUOUS_NODE: &str =
    "generic node has items/itemType but is not typed as a list; decoding it as one placeholder";

/// Kind name a node is filed under. `implicit` when the node did not name it and the attribute
/// key stands in.
#[derive(Debug, Clone)]
struct NodeKind {
    name: String,
    implicit: bool,
}

impl NodeKind {
    fn new(discriminator: Option<String>, key: &str) -> Self {
        match discriminator {
            Some(name) => Self {
                name,
                implicit: false,
            },
            None => Self {
                name: key.to_string(),
                implicit: true,
            },
        }
    }
}

/// Generic tree to [`AnnotatedText`] against one registry
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'r> {
    registry: &'r TypeRegistry,
    warn_on_ambiguous_nodes: bool,
}

impl<'r> Decoder<'r> {
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self {
            registry,
            warn_on_ambiguous_nodes: true,
        }
    }

    /// Log ambiguous generic nodes at warn level instead of debug
    #[must_use]
    pub fn warn_on_ambiguous_nodes(mut self, warn: bool) -> Self {
        self.warn_on_ambiguous_nodes = warn;
        self
    }

    pub fn warns_on_ambiguous_nodes(&self) -> bool {
        self.warn_on_ambiguous_nodes
    }

    pub fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    pub fn decode(&self, value: &Value) -> Result<AnnotatedText> {
        self.decode_value(value.clone())
    }

    /// Decode, consuming the tree
    pub fn decode_value(&self, value: Value) -> Result<AnnotatedText> {
        let fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(Error::malformed(
                    "<document>",
                    format!("expected an object, found {}", kind_of(&other)),
                ))
            }
        };
        let mut doc = FieldReader::new("", fields);
        let mut builder = AnnotatedText::builder();

        builder = match (doc.opt_string(DATA)?, doc.opt_string(RAW_DATA)?) {
            (Some(data), None) => builder.data(data),
            (None, Some(encoded)) => {
                let bytes = BASE64
                    .decode(encoded.as_bytes())
                    .map_err(|e| Error::malformed(RAW_DATA, format!("invalid base64: {}", e)))?;
                builder.raw_data(bytes)
            }
            (None, None) => {
                return Err(Error::malformed(DATA, "missing required text field"));
            }
            (Some(_), Some(_)) => {
                return Err(Error::malformed(
                    RAW_DATA,
                    "data and rawData are mutually exclusive",
                ));
            }
        };

        builder = read_metadata(builder, object_field(&mut doc, METADATA)?)?;

        let attributes = object_field(&mut doc, ATTRIBUTES)?;
        trace!(attributes = attributes.len(), "decoding annotated text");
        for (key, node) in attributes {
            let container = self.decode_node(&key, node)?;
            builder = builder.attribute(key, container);
        }

        for (key, value) in doc.rest().into_map() {
            builder = builder.extended_property(key, value);
        }
        builder.build()
    }

    /// Decode the node stored under `key` in the attributes object
    pub fn decode_node(&self, key: &str, node: Value) -> Result<Container> {
        let mut reader = FieldReader::from_value(format!("{}.{}", ATTRIBUTES, key), node)?;
        let (plan, kind) = self.plan(key, &mut reader)?;
        match plan {
            DecodePlan::KnownSingle(entry) => {
                let item = (entry.decode)(&mut reader)?;
                Ok(Container::decoded_single(kind.name, kind.implicit, item))
            }
            DecodePlan::GenericSingle => {
                debug!(
                    key,
                    type_name = %kind.name,
                    "unknown attribute type, keeping a generic placeholder"
                );
                if reader.has(ITEMS_KEY) || reader.has(ITEM_TYPE_KEY) {
                    self.report_ambiguous(key, &kind.name);
                }
                let item = GenericAttribute::read_fields(&mut reader).into();
                Ok(Container::decoded_single(kind.name, kind.implicit, item))
            }
            DecodePlan::KnownList(_) | DecodePlan::GenericList => {
                self.decode_list(key, kind, plan, reader)
            }
        }
    }

    /// Consume the discriminators and pick a plan, along with the kind name to file it under
    fn plan(&self, key: &str, reader: &mut FieldReader) -> Result<(DecodePlan<'r>, NodeKind)> {
        let discriminator = reader.opt_string(TYPE_KEY)?;
        if discriminator.as_deref() == Some(LIST_TYPE) {
            let kind = NodeKind::new(reader.opt_string(ITEM_TYPE_KEY)?, key);
            let plan = match self.registry.lookup(&kind.name) {
                Some(entry) => DecodePlan::KnownList(entry),
                None => DecodePlan::GenericList,
            };
            return Ok((plan, kind));
        }

        let kind = NodeKind::new(discriminator, key);
        let plan = match self.registry.lookup(&kind.name) {
            Some(entry) => DecodePlan::KnownSingle(entry),
            None => DecodePlan::GenericSingle,
        };
        Ok((plan, kind))
    }

    fn decode_list(
        &self,
        key: &str,
        kind: NodeKind,
        plan: DecodePlan<'r>,
        mut reader: FieldReader,
    ) -> Result<Container> {
        let items_path = reader.field_path(ITEMS_KEY);
        let raw_items = match reader.take(ITEMS_KEY) {
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(Error::malformed(
                    items_path,
                    format!("expected a sequence, found {}", kind_of(&other)),
                ))
            }
            None => return Err(Error::malformed(items_path, "missing list items")),
        };
        if matches!(plan, DecodePlan::GenericList) {
            debug!(
                key,
                item_type = %kind.name,
                items = raw_items.len(),
                "unknown list item type, keeping generic placeholders"
            );
        }

        let mut items = Vec::with_capacity(raw_items.len());
        for (i, raw) in raw_items.into_iter().enumerate() {
            let mut item_reader = FieldReader::from_value(format!("{}[{}]", items_path, i), raw)?;
            let item: Attribute = match plan {
                DecodePlan::KnownList(entry) => (entry.decode)(&mut item_reader)?,
                _ => GenericAttribute::read_fields(&mut item_reader).into(),
            };
            items.push(item);
        }
        Ok(Container::decoded_list(
            kind.name,
            kind.implicit,
            items,
            reader.rest(),
        ))
    }

    fn report_ambiguous(&self, key: &str, type_name: &str) {
        if self.warn_on_ambiguous_nodes {
            warn!(key, type_name, "{}", AMBIGUOUS_NODE);
        } else {
            debug!(key, type_name, "{}", AMBIGUOUS_NODE);
        }
    }
}

/// Optional top-level object, empty when absent or null
fn object_field(doc: &mut FieldReader, key: &str) -> Result<Map<String, Value>> {
    match doc.take(key) {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(fields)) => Ok(fields),
        Some(other) => Err(Error::malformed(
            key,
            format!("expected an object, found {}", kind_of(&other)),
        )),
    }
}

fn read_metadata(
    mut builder: AnnotatedTextBuilder,
    metadata: Map<String, Value>,
) -> Result<AnnotatedTextBuilder> {
    for (key, value) in metadata {
        let path = format!("{}.{}", METADATA, key);
        let values = match value {
            Value::Array(values) => values,
            other => {
                return Err(Error::malformed(
                    path,
                    format!("expected a sequence of strings, found {}", kind_of(&other)),
                ))
            }
        };
        let values = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| match value {
                Value::String(s) => Ok(s),
                other => Err(Error::malformed(
                    format!("{}[{}]", path, i),
                    format!("expected a string, found {}", kind_of(&other)),
                )),
            })
            .collect::<Result<Vec<_>>>()?;
        builder = builder.metadata(key, values);
    }
    Ok(builder)
}
