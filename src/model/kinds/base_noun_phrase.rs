//! Base noun phrases

use crate::codec::fields::{FieldReader, FieldWriter, END_OFFSET, START_OFFSET};
use crate::error::Result;
use crate::model::attribute::{validate_extended, Attribute, AttributeKind, Cardinality};
use crate::model::{ExtendedProperties, Span};
use serde_json::Value;

/// A base (non-recursive) noun phrase
#[derive(Debug, Clone, PartialEq)]
pub struct BaseNounPhrase {
    span: Span,
    extended: ExtendedProperties,
}

impl BaseNounPhrase {
    pub fn builder(start: usize, end: usize) -> BaseNounPhraseBuilder {
        BaseNounPhraseBuilder {
            start,
            end,
            extended: ExtendedProperties::new(),
        }
    }

    pub fn to_builder(&self) -> BaseNounPhraseBuilder {
        BaseNounPhraseBuilder {
            start: self.span.start(),
            end: self.span.end(),
            extended: self.extended.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BaseNounPhraseBuilder {
    start: usize,
    end: usize,
    extended: ExtendedProperties,
}

impl BaseNounPhraseBuilder {
    #[must_use]
    pub fn extended_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extended.set(key, value);
        self
    }

    pub fn build(self) -> Result<BaseNounPhrase> {
        let span = Span::new(self.start, self.end)?;
        validate_extended(BaseNounPhrase::TYPE_NAME, BaseNounPhrase::FIELDS, &self.extended)?;
        Ok(BaseNounPhrase {
            span,
            extended: self.extended,
        })
    }
}

impl AttributeKind for BaseNounPhrase {
    const TYPE_NAME: &'static str = "baseNounPhrase";
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
            Attribute::BaseNounPhrase(s) => Some(s),
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

impl From<BaseNounPhrase> for Attribute {
    fn from(phrase: BaseNounPhrase) -> Self {
        Attribute::BaseNounPhrase(phrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_phrase_round_trips_through_fields() {
        let phrase = BaseNounPhrase::builder(8, 19)
            .extended_property("bnp-ex", "bnp-ex-val")
            .build()
            .unwrap();

        let mut writer = FieldWriter::new();
        phrase.write_fields(&mut writer);
        let fields = writer.finish();
        assert_eq!(
            Value::Object(fields.clone()),
            json!({"startOffset": 8, "endOffset": 19, "bnp-ex": "bnp-ex-val"})
        );

        let mut reader = FieldReader::new("phrase", fields);
        assert_eq!(BaseNounPhrase::read_fields(&mut reader).unwrap(), phrase);
    }

    #[test]
    fn test_phrase_requires_offsets() {
        let mut reader = FieldReader::from_value("phrase", json!({"color": "red"})).unwrap();
        assert!(BaseNounPhrase::read_fields(&mut reader).is_err());
    }
}
