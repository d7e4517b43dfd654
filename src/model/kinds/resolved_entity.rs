//! Resolved entities

use crate::codec::fields::{FieldReader, FieldWriter, END_OFFSET, START_OFFSET};
use crate::error::Result;
use crate::model::attribute::{
    validate_confidence, validate_extended, Attribute, AttributeKind, Cardinality,
};
use crate::model::{ExtendedProperties, Span};
use serde_json::Value;

/// A span linked to an entity in some knowledge base
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEntity {
    span: Span,
    entity_id: String,
    coreference_chain_id: Option<i64>,
    confidence: Option<f64>,
    extended: ExtendedProperties,
}

impl ResolvedEntity {
    pub fn builder(
        start: usize,
        end: usize,
        entity_id: impl Into<String>,
    ) -> ResolvedEntityBuilder {
        ResolvedEntityBuilder {
            start,
            end,
            entity_id: entity_id.into(),
            coreference_chain_id: None,
            confidence: None,
            extended: ExtendedProperties::new(),
        }
    }

    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    pub fn coreference_chain_id(&self) -> Option<i64> {
        self.coreference_chain_id
    }

    pub fn confidence(&self) -> Option<f64> {
        self.confidence
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedEntityBuilder {
    start: usize,
    end: usize,
    entity_id: String,
    coreference_chain_id: Option<i64>,
    confidence: Option<f64>,
    extended: ExtendedProperties,
}

impl ResolvedEntityBuilder {
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
    pub fn extended_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extended.set(key, value);
        self
    }

    pub fn build(self) -> Result<ResolvedEntity> {
        let span = Span::new(self.start, self.end)?;
        validate_extended(ResolvedEntity::TYPE_NAME, ResolvedEntity::FIELDS, &self.extended)?;
        validate_confidence(ResolvedEntity::TYPE_NAME, self.confidence)?;
        Ok(ResolvedEntity {
            span,
            entity_id: self.entity_id,
            coreference_chain_id: self.coreference_chain_id,
            confidence: self.confidence,
            extended: self.extended,
        })
    }
}

impl AttributeKind for ResolvedEntity {
    const TYPE_NAME: &'static str = "resolvedEntity";
    const CARDINALITY: Cardinality = Cardinality::List;
    const FIELDS: &'static [&'static str] = &[
        START_OFFSET,
        END_OFFSET,
        "entityId",
        "coreferenceChainId",
        "confidence",
    ];

    fn span(&self) -> Option<Span> {
        Some(self.span)
    }

    fn extended_properties(&self) -> &ExtendedProperties {
        &self.extended
    }

    fn from_attribute(attribute: &Attribute) -> Option<&Self> {
        match attribute {
            Attribute::ResolvedEntity(e) => Some(e),
            _ => None,
        }
    }

    fn write_fields(&self, out: &mut FieldWriter) {
        out.span(self.span);
        out.string("entityId", &self.entity_id);
        out.opt_i64("coreferenceChainId", self.coreference_chain_id);
        out.opt_f64("confidence", self.confidence);
        out.extended(&self.extended);
    }

    fn read_fields(reader: &mut FieldReader) -> Result<Self> {
        Ok(Self {
            span: reader.span()?,
            entity_id: reader.string("entityId")?,
            coreference_chain_id: reader.opt_i64("coreferenceChainId")?,
            confidence: reader.opt_f64("confidence")?,
            extended: reader.rest(),
        })
    }
}

impl From<ResolvedEntity> for Attribute {
    fn from(entity: ResolvedEntity) -> Self {
        Attribute::ResolvedEntity(entity)
    }
}
