//! Sentence boundaries

use crate::codec::fields::{FieldReader, FieldWriter, END_OFFSET, START_OFFSET};
use crate::error::Result;
use crate::model::attribute::{validate_extended, Attribute, AttributeKind, Cardinality};
use crate::model::{ExtendedProperties, Span};
use serde_json::Value;

/// One sentence of the text
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    span: Span,
    extended: ExtendedProperties,
}

impl Sentence {
    pub fn builder(start: usize, end: usize) -> SentenceBuilder {
        SentenceBuilder {
            start,
            end,
            extended: ExtendedProperties::new(),
        }
    }

    pub fn to_builder(&self) -> SentenceBuilder {
        SentenceBuilder {
            start: self.span.start(),
            end: self.span.end(),
            extended: self.extended.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SentenceBuilder {
    start: usize,
    end: usize,
    extended: ExtendedProperties,
}

impl SentenceBuilder {
    #[must_use]
    pub fn extended_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extended.set(key, value);
        self
    }

    pub fn build(self) -> Result<Sentence> {
        let span = Span::new(self.start, self.end)?;
        validate_extended(Sentence::TYPE_NAME, Sentence::FIELDS, &self.extended)?;
        Ok(Sentence {
            span,
            extended: self.extended,
        })
    }
}

impl AttributeKind for Sentence {
    const TYPE_NAME: &'static str = "sentence";
    const CARDINALITY: Cardinality = Cardinality::List;
    const FIELDS: &'static [&'static str] = &[START_OFFSET, END_OFFSET];

    fn span(&self) -> Option<Span> {
        Some(self.span)
    }

    fn extended_properties(&self) -> &ExtendedProperties {
        &self.extended
    }

    fn from_attribute(attribute: &Attribute) -> Option<&Self> {
        match attribute {
            Attribute::Sentence(s) => Some(s),
            _ => None,
        }
    }

    fn write_fields(&self, out: &mut FieldWriter) {
        out.span(self.span);
        out.extended(&self.extended);
    }

    fn read_fields(reader: &mut FieldReader) -> Result<Self> {
        Ok(Self {
            span: reader.span()?,
            extended: reader.rest(),
        })
    }
}

impl From<Sentence> for Attribute {
    fn from(sentence: Sentence) -> Self {
        Attribute::Sentence(sentence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_sentence_builder() {
        let sentence = Sentence::builder(0, 8)
            .extended_property("sb-ex", "sb-ex-val")
            .build()
            .unwrap();
        assert_eq!(sentence.span(), Some(Span::new(0, 8).unwrap()));
        assert_eq!(sentence.extended_properties().len(), 1);
    }

    #[test]
    fn test_sentence_builder_fails_fast_on_bad_span() {
        assert_eq!(
            Sentence::builder(8, 0).build().unwrap_err(),
            Error::InvalidSpan { start: 8, end: 0 }
        );
    }

    #[test]
    fn test_sentence_rejects_offset_as_extended_property() {
        let result = Sentence::builder(0, 8)
            .extended_property("startOffset", 3)
            .build();
        assert!(matches!(result, Err(Error::InvalidAttribute { .. })));
    }

    #[test]
    fn test_to_builder_copies() {
        let sentence = Sentence::builder(0, 8)
            .extended_property("a", 1)
            .build()
            .unwrap();
        let copy = sentence.to_builder().extended_property("b", 2).build().unwrap();
        assert_ne!(sentence, copy);
        assert_eq!(copy.extended_properties().len(), 2);
    }
}
