//! Token-by-token translations

use crate::codec::fields::{FieldReader, FieldWriter};
use crate::error::Result;
use crate::model::attribute::{validate_extended, Attribute, AttributeKind, Cardinality};
use crate::model::codes::TextDomain;
use crate::model::{ExtendedProperties, Span};
use serde_json::Value;

/// Translations aligned one-to-one with the document's tokens
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatedTokens {
    domain: TextDomain,
    translations: Vec<String>,
    extended: ExtendedProperties,
}

impl TranslatedTokens {
    pub fn builder(domain: TextDomain) -> TranslatedTokensBuilder {
        TranslatedTokensBuilder {
            domain,
            translations: Vec::new(),
            extended: ExtendedProperties::new(),
        }
    }

    pub fn domain(&self) -> &TextDomain {
        &self.domain
    }

    pub fn translations(&self) -> &[String] {
        &self.translations
    }
}

#[derive(Debug, Clone)]
pub struct TranslatedTokensBuilder {
    domain: TextDomain,
    translations: Vec<String>,
    extended: ExtendedProperties,
}

impl TranslatedTokensBuilder {
    #[must_use]
    pub fn add_translated_token(mut self, translation: impl Into<String>) -> Self {
        self.translations.push(translation.into());
        self
    }

    #[must_use]
    pub fn extended_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extended.set(key, value);
        self
    }

    pub fn build(self) -> Result<TranslatedTokens> {
        validate_extended(TranslatedTokens::TYPE_NAME, TranslatedTokens::FIELDS, &self.extended)?;
        Ok(TranslatedTokens {
            domain: self.domain,
            translations: self.translations,
            extended: self.extended,
        })
    }
}

impl AttributeKind for TranslatedTokens {
    const TYPE_NAME: &'static str = "translatedTokens";
    const CARDINALITY: Cardinality = Cardinality::List;
    const FIELDS: &'static [&'static str] = &["domain", "translations"];

    fn span(&self) -> Option<Span> {
        None
    }

    fn extended_properties(&self) -> &ExtendedProperties {
        &self.extended
    }

    fn from_attribute(attribute: &Attribute) -> Option<&Self> {
        match attribute {
            Attribute::TranslatedTokens(t) => Some(t),
            _ => None,
        }
    }

    fn write_fields(&self, out: &mut FieldWriter) {
        out.object("domain", |w| self.domain.write_fields(w));
        out.strings("translations", &self.translations);
        out.extended(&self.extended);
    }

    fn read_fields(reader: &mut FieldReader) -> Result<Self> {
        Ok(Self {
            domain: reader.object("domain", TextDomain::read_fields)?,
            translations: reader.strings("translations")?,
            extended: reader.rest(),
        })
    }
}

impl From<TranslatedTokens> for Attribute {
    fn from(tokens: TranslatedTokens) -> Self {
        Attribute::TranslatedTokens(tokens)
    }
}
