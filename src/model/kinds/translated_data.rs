//! Whole-text translations
//!
//! A translation of the entire text into another [`TextDomain`]. It covers the whole text, so
//! it carries no span.

use crate::codec::fields::{FieldReader, FieldWriter};
use crate::error::Result;
use crate::model::attribute::{validate_extended, Attribute, AttributeKind, Cardinality};
use crate::model::codes::TextDomain;
use crate::model::{ExtendedProperties, Span};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedData {
    domain: TextDomain,
    translation: String,
    extended: ExtendedProperties,
}

impl TranslatedData {
    pub fn builder(domain: TextDomain, translation: impl Into<String>) -> TranslatedDataBuilder {
        TranslatedDataBuilder {
            domain,
            translation: translation.into(),
            extended: ExtendedProperties::new(),
        }
    }

    pub fn domain(&self) -> &TextDomain {
        &self.domain
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }
}

#[derive(Debug, Clone)]
pub struct TranslatedDataBuilder {
    domain: TextDomain,
    translation: String,
    extended: ExtendedProperties,
}

impl TranslatedDataBuilder {
    #[must_use]
    pub fn extended_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extended.set(key, value);
        self
    }

    pub fn build(self) -> Result<TranslatedData> {
        validate_extended(TranslatedData::TYPE_NAME, TranslatedData::FIELDS, &self.extended)?;
        Ok(TranslatedData {
            domain: self.domain,
            translation: self.translation,
            extended: self.extended,
        })
    }
}

impl AttributeKind for TranslatedData {
    const TYPE_NAME: &'static str = "translatedData";
    const CARDINALITY: Cardinality = Cardinality::List;
    const FIELDS: &'static [&'static str] = &["domain", "translation"];

    fn span(&self) -> Option<Span> {
        None
    }

    fn extended_properties(&self) -> &ExtendedProperties {
        &self.extended
    }

    fn from_attribute(attribute: &Attribute) -> Option<&Self> {
        match attribute {
            Attribute::TranslatedData(t) => Some(t),
            _ => None,
        }
    }

    fn write_fields(&self, out: &mut FieldWriter) {
        out.object("domain", |w| self.domain.write_fields(w));
        out.string("translation", &self.translation);
        out.extended(&self.extended);
    }

    fn read_fields(reader: &mut FieldReader) -> Result<Self> {
        Ok(Self {
            domain: reader.object("domain", TextDomain::read_fields)?,
            translation: reader.string("translation")?,
            extended: reader.rest(),
        })
    }
}

impl From<TranslatedData> for Attribute {
    fn from(data: TranslatedData) -> Self {
        Attribute::TranslatedData(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_translated_data_fields() {
        let domain = TextDomain::new("Latn".into(), "deu".into(), "native".into());
        let data = TranslatedData::builder(domain, "Ein.  Zwei.").build().unwrap();
        assert_eq!(data.span(), None);

        let mut writer = FieldWriter::new();
        data.write_fields(&mut writer);
        let fields = writer.finish();
        assert_eq!(
            Value::Object(fields.clone()),
            json!({
                "domain": {"script": "Latn", "language": "deu", "transliterationScheme": "native"},
                "translation": "Ein.  Zwei."
            })
        );

        let mut reader = FieldReader::new("data", fields);
        assert_eq!(TranslatedData::read_fields(&mut reader).unwrap(), data);
    }

    #[test]
    fn test_domain_must_be_an_object() {
        let mut reader =
            FieldReader::from_value("data", json!({"domain": "deu", "translation": "x"})).unwrap();
        assert!(TranslatedData::read_fields(&mut reader).is_err());
    }
}
