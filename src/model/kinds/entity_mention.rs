//! Entity mentions
//!
//! A span of text recognized as naming an entity of some type, with the optional bookkeeping
//! an extractor attaches: confidence, coreference chain, normalized form, and which component
//! produced it.

use crate::codec::fields::{FieldReader, FieldWriter, END_OFFSET, START_OFFSET};
use crate::error::Result;
use crate::model::attribute::{
    validate_confidence, validate_extended, Attribute, AttributeKind, Cardinality,
};
use crate::model::{ExtendedProperties, Span};
use serde_json::Value;

/// A mention of a named entity
#[derive(Debug, Clone, PartialEq)]
pub struct EntityMention {
    span: Span,
    entity_type: String,
    coreference_chain_id: Option<i64>,
    confidence: Option<f64>,
    flags: Option<i64>,
    normalized: Option<String>,
    source: Option<String>,
    subsource: Option<String>,
    extended: ExtendedProperties,
}

impl EntityMention {
    pub fn builder(
        start: usize,
        end: usize,
        entity_type: impl Into<String>,
    ) -> EntityMentionBuilder {
        EntityMentionBuilder {
            start,
            end,
            entity_type: entity_type.into(),
            coreference_chain_id: None,
            confidence: None,
            flags: None,
            normalized: None,
            source: None,
            subsource: None,
            extended: ExtendedProperties::new(),
        }
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    pub fn coreference_chain_id(&self) -> Option<i64> {
        self.coreference_chain_id
    }

    pub fn confidence(&self) -> Option<f64> {
        self.confidence
    }

    pub fn flags(&self) -> Option<i64> {
        self.flags
    }

    pub fn normalized(&self) -> Option<&str> {
        self.normalized.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn subsource(&self) -> Option<&str> {
        self.subsource.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct EntityMentionBuilder {
    start: usize,
    end: usize,
    entity_type: String,
    coreference_chain_id: Option<i64>,
    confidence: Option<f64>,
    flags: Option<i64>,
    normalized: Option<String>,
    source: Option<String>,
    subsource: Option<String>,
    extended: ExtendedProperties,
}

impl EntityMentionBuilder {
    #[must_use]
    pub fn coreference_chain_id(mut self, id: i64) -> Self {
        self.coreference_chain_id = Some(id);
        self
    }

    #[must_use]
    pub fn confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    #[must_use]
    pub fn flags(mut self, flags: i64) -> Self {
        self.flags = Some(flags);
        self
    }

    #[must_use]
    pub fn normalized(mut self, normalized: impl Into<String>) -> Self {
        self.normalized = Some(normalized.into());
        self
    }

    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn subsource(mut self, subsource: impl Into<String>) -> Self {
        self.subsource = Some(subsource.into());
        self
    }

    #[must_use]
    pub fn extended_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extended.set(key, value);
        self
    }

    pub fn build(self) -> Result<EntityMention> {
        let span = Span::new(self.start, self.end)?;
        validate_extended(EntityMention::TYPE_NAME, EntityMention::FIELDS, &self.extended)?;
        validate_confidence(EntityMention::TYPE_NAME, self.confidence)?;
        Ok(EntityMention {
            span,
            entity_type: self.entity_type,
            coreference_chain_id: self.coreference_chain_id,
            confidence: self.confidence,
            flags: self.flags,
            normalized: self.normalized,
            source: self.source,
            subsource: self.subsource,
            extended: self.extended,
        })
    }
}

impl AttributeKind for EntityMention {
    const TYPE_NAME: &'static str = "entityMention";
    const CARDINALITY: Cardinality = Cardinality::List;
    const FIELDS: &'static [&'static str] = &[
        START_OFFSET,
        END_OFFSET,
        "entityType",
        "coreferenceChainId",
        "confidence",
        "flags",
        "normalized",
        "source",
        "subsource",
    ];

    fn span(&self) -> Option<Span> {
        Some(self.span)
    }

    fn extended_properties(&self) -> &ExtendedProperties {
        &self.extended
    }

    fn from_attribute(attribute: &Attribute) -> Option<&Self> {
        match attribute {
            Attribute::EntityMention(m) => Some(m),
            _ => None,
        }
    }

    fn write_fields(&self, out: &mut FieldWriter) {
        out.span(self.span);
        out.string("entityType", &self.entity_type);
        out.opt_i64("coreferenceChainId", self.coreference_chain_id);
        out.opt_f64("confidence", self.confidence);
        out.opt_i64("flags", self.flags);
        out.opt_string("normalized", self.normalized.as_deref());
        out.opt_string("source", self.source.as_deref());
        out.opt_string("subsource", self.subsource.as_deref());
        out.extended(&self.extended);
    }

    fn read_fields(reader: &mut FieldReader) -> Result<Self> {
        Ok(Self {
            span: reader.span()?,
            entity_type: reader.string("entityType")?,
            coreference_chain_id: reader.opt_i64("coreferenceChainId")?,
            confidence: reader.opt_f64("confidence")?,
            flags: reader.opt_i64("flags")?,
            normalized: reader.opt_string("normalized")?,
            source: reader.opt_string("source")?,
            subsource: reader.opt_string("subsource")?,
            extended: reader.rest(),
        })
    }
}

impl From<EntityMention> for Attribute {
    fn from(mention: EntityMention) -> Self {
        Attribute::EntityMention(mention)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    fn boston() -> EntityMention {
        EntityMention::builder(27, 33, "place")
            .flags(42)
            .normalized("bahston")
            .source("testsource")
            .subsource("testsubsource")
            .confidence(1.0)
            .coreference_chain_id(43)
            .extended_property("em-ex", "em-ex-val")
            .build()
            .unwrap()
    }

    #[test]
    fn test_entity_mention_getters() {
        let mention = boston();
        assert_eq!(mention.entity_type(), "place");
        assert_eq!(mention.flags(), Some(42));
        assert_eq!(mention.normalized(), Some("bahston"));
        assert_eq!(mention.coreference_chain_id(), Some(43));
        assert_eq!(mention.subsource(), Some("testsubsource"));
    }

    #[test]
    fn test_entity_mention_fields_round_trip() {
        let mention = boston();
        let mut writer = FieldWriter::new();
        mention.write_fields(&mut writer);
        let mut reader = FieldReader::new("mention", writer.finish());
        assert_eq!(EntityMention::read_fields(&mut reader).unwrap(), mention);
    }

    #[test]
    fn test_entity_mention_optional_fields_absent() {
        let mut reader = FieldReader::from_value(
            "mention",
            json!({"startOffset": 0, "endOffset": 4, "entityType": "person"}),
        )
        .unwrap();
        let mention = EntityMention::read_fields(&mut reader).unwrap();
        assert_eq!(mention.confidence(), None);
        assert_eq!(mention.source(), None);
        assert!(mention.extended_properties().is_empty());
    }

    #[test]
    fn test_entity_mention_wrong_field_type() {
        let mut reader = FieldReader::from_value(
            "mention",
            json!({"startOffset": 0, "endOffset": 4, "entityType": "person", "confidence": "high"}),
        )
        .unwrap();
        assert!(EntityMention::read_fields(&mut reader).is_err());
    }

    #[test]
    fn test_entity_mention_rejects_non_finite_confidence() {
        for confidence in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = EntityMention::builder(0, 4, "person")
                .confidence(confidence)
                .build()
                .unwrap_err();
            assert!(matches!(err, Error::InvalidAttribute { .. }), "{:?}", err);
        }
    }
}
