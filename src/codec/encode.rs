//! Encoding
//!
//! Writes top-level fields in a fixed order: the text (`data` or `rawData`), `metadata`,
//! `attributes`, then document extended properties. Attribute keys keep the document's
//! insertion order and fields inside a node follow the kind's field order, so the output is
//! fully determined by the input.
//!
//! A discriminator the decoder had to infer from the attribute key is not written back.

use super::fields::FieldWriter;
use super::{ATTRIBUTES, DATA, METADATA, RAW_DATA};
use crate::model::attribute::{Cardinality, LIST_TYPE, TYPE_KEY};
use crate::model::container::{Container, ITEMS_KEY, ITEM_TYPE_KEY};
use crate::model::{AnnotatedText, Attribute, Text};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::{Map, Value};
use tracing::trace;

/// Encode a document into the generic tree
pub fn encode(text: &AnnotatedText) -> Value {
    trace!(
        attributes = text.attributes().len(),
        metadata = text.metadata().len(),
        "encoding annotated text"
    );
    let mut out = FieldWriter::new();
    match text.text() {
        Text::Chars(data) => out.string(DATA, data),
        Text::Raw(bytes) => out.string(RAW_DATA, &BASE64.encode(bytes)),
    }

    let metadata: Map<String, Value> = text
        .metadata()
        .iter()
        .map(|(key, values)| (key.clone(), Value::from(values.clone())))
        .collect();
    out.value(METADATA, Value::Object(metadata));

    let attributes: Map<String, Value> = text
        .attributes()
        .iter()
        .map(|(key, container)| (key.to_string(), encode_container(container)))
        .collect();
    out.value(ATTRIBUTES, Value::Object(attributes));

    out.extended(text.extended_properties());
    Value::Object(out.finish())
}

/// Encode one container as an attribute node
pub fn encode_container(container: &Container) -> Value {
    let mut out = FieldWriter::new();
    match container.kind() {
        Cardinality::Single => {
            if !container.has_implicit_type() {
                out.string(TYPE_KEY, container.item_type_name());
            }
            if let Some(item) = container.single_item() {
                item.write_fields(&mut out);
            }
        }
        Cardinality::List => {
            out.string(TYPE_KEY, LIST_TYPE);
            if !container.has_implicit_type() {
                out.string(ITEM_TYPE_KEY, container.item_type_name());
            }
            let items = container.iter().map(encode_item).collect();
            out.value(ITEMS_KEY, Value::Array(items));
            out.extended(container.extended_properties());
        }
    }
    Value::Object(out.finish())
}

/// List items carry no discriminator of their own
fn encode_item(item: &Attribute) -> Value {
    let mut out = FieldWriter::new();
    item.write_fields(&mut out);
    Value::Object(out.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::kinds::{GenericAttribute, Sentence, Token};
    use crate::model::ExtendedProperties;
    use serde_json::json;

    #[test]
    fn test_encode_single_merges_fields() {
        let sentence = Sentence::builder(0, 8).build().unwrap();
        assert_eq!(
            encode_container(&Container::single(sentence)),
            json!({"type": "sentence", "startOffset": 0, "endOffset": 8})
        );
    }

    #[test]
    fn test_encode_list_shape() {
        let tokens = vec![
            Token::builder(0, 4, "This").build().unwrap(),
            Token::builder(5, 7, "is").build().unwrap(),
        ];
        assert_eq!(
            encode_container(&Container::list(tokens)),
            json!({
                "type": "list",
                "itemType": "token",
                "items": [
                    {"startOffset": 0, "endOffset": 4, "text": "This"},
                    {"startOffset": 5, "endOffset": 7, "text": "is"}
                ]
            })
        );
    }

    #[test]
    fn test_encode_empty_list_keeps_items() {
        let container = Container::list(Vec::<Sentence>::new());
        assert_eq!(
            encode_container(&container),
            json!({"type": "list", "itemType": "sentence", "items": []})
        );
    }

    #[test]
    fn test_encode_generic_single_writes_fields_back() {
        let fields: ExtendedProperties = [("startOffset", json!(4)), ("color", json!("pari"))]
            .into_iter()
            .collect();
        let container =
            Container::wrap_single("novelty", GenericAttribute::new(fields).into()).unwrap();
        assert_eq!(
            encode_container(&container),
            json!({"type": "novelty", "startOffset": 4, "color": "pari"})
        );
    }

    #[test]
    fn test_encode_document_field_order() {
        let text = AnnotatedText::builder()
            .raw_data(b"hi".to_vec())
            .add_metadata("source", "wire")
            .extended_property("revision", 3)
            .build()
            .unwrap();
        let encoded = encode(&text);
        let keys: Vec<_> = encoded.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["rawData", "metadata", "attributes", "revision"]);
        assert_eq!(encoded["rawData"], json!("aGk="));
        assert_eq!(encoded["metadata"], json!({"source": ["wire"]}));
    }
}
