//! Attributes
//!
//! An attribute is an annotation anchored on a [`Span`] of text, with typed fields that depend
//! on its kind and an [`ExtendedProperties`] bag for everything else.
//!
//! The set of kinds this crate knows about is closed: [`Attribute`] has one variant per kind
//! plus [`Attribute::Generic`], the placeholder the decoder synthesizes for types it has never
//! heard of. Code that is generic over kinds goes through the [`AttributeKind`] trait; the
//! [`Container`](super::Container) and the type registry are built on it.
//!
//! Attributes are immutable. Each kind has a builder that accumulates required fields,
//! optional fields and extended properties, and validates them in `build()`.

use super::kinds::{
    BaseNounPhrase, EntityMention, GenericAttribute, LanguageDetection, ResolvedEntity,
    ScriptRegion, Sentence, Token, TranslatedData, TranslatedTokens,
};
use super::properties::ExtendedProperties;
use super::span::Span;
use crate::codec::fields::{FieldReader, FieldWriter};
use crate::error::{Error, Result};
use std::fmt;

/// Discriminator written in place of a kind name for list containers
pub const LIST_TYPE: &str = "list";
/// Discriminator key of every attribute node
pub const TYPE_KEY: &str = "type";

/// Whether a kind is normally stored as one value or as an ordered list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    Single,
    List,
}

/// Capability shared by every concrete attribute kind
pub trait AttributeKind: Sized + Clone + PartialEq + fmt::Debug + Into<Attribute> {
    /// Discriminator used in the interchange format
    const TYPE_NAME: &'static str;

    /// How the kind is stored when nothing says otherwise
    const CARDINALITY: Cardinality;

    /// Field names the kind reads and writes itself. Extended properties may not use them.
    const FIELDS: &'static [&'static str];

    fn span(&self) -> Option<Span>;

    fn extended_properties(&self) -> &ExtendedProperties;

    /// Borrow the kind back out of the closed enum
    fn from_attribute(attribute: &Attribute) -> Option<&Self>;

    /// Write typed fields followed by extended properties
    fn write_fields(&self, out: &mut FieldWriter);

    /// Read typed fields; fields left in `reader` become extended properties
    fn read_fields(reader: &mut FieldReader) -> Result<Self>;
}

/// Any attribute value: one of the known kinds or a generic placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    BaseNounPhrase(BaseNounPhrase),
    EntityMention(EntityMention),
    ResolvedEntity(ResolvedEntity),
    LanguageDetection(LanguageDetection),
    ScriptRegion(ScriptRegion),
    Sentence(Sentence),
    Token(Token),
    TranslatedData(TranslatedData),
    TranslatedTokens(TranslatedTokens),
    Generic(GenericAttribute),
}

impl Attribute {
    /// Kind name for known kinds, `None` for placeholders
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            Attribute::BaseNounPhrase(_) => Some(BaseNounPhrase::TYPE_NAME),
            Attribute::EntityMention(_) => Some(EntityMention::TYPE_NAME),
            Attribute::ResolvedEntity(_) => Some(ResolvedEntity::TYPE_NAME),
            Attribute::LanguageDetection(_) => Some(LanguageDetection::TYPE_NAME),
            Attribute::ScriptRegion(_) => Some(ScriptRegion::TYPE_NAME),
            Attribute::Sentence(_) => Some(Sentence::TYPE_NAME),
            Attribute::Token(_) => Some(Token::TYPE_NAME),
            Attribute::TranslatedData(_) => Some(TranslatedData::TYPE_NAME),
            Attribute::TranslatedTokens(_) => Some(TranslatedTokens::TYPE_NAME),
            Attribute::Generic(_) => None,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Attribute::BaseNounPhrase(a) => a.span(),
            Attribute::EntityMention(a) => a.span(),
            Attribute::ResolvedEntity(a) => a.span(),
            Attribute::LanguageDetection(a) => a.span(),
            Attribute::ScriptRegion(a) => a.span(),
            Attribute::Sentence(a) => a.span(),
            Attribute::Token(a) => a.span(),
            Attribute::TranslatedData(a) => a.span(),
            Attribute::TranslatedTokens(a) => a.span(),
            Attribute::Generic(a) => a.span(),
        }
    }

    pub fn extended_properties(&self) -> &ExtendedProperties {
        match self {
            Attribute::BaseNounPhrase(a) => a.extended_properties(),
            Attribute::EntityMention(a) => a.extended_properties(),
            Attribute::ResolvedEntity(a) => a.extended_properties(),
            Attribute::LanguageDetection(a) => a.extended_properties(),
            Attribute::ScriptRegion(a) => a.extended_properties(),
            Attribute::Sentence(a) => a.extended_properties(),
            Attribute::Token(a) => a.extended_properties(),
            Attribute::TranslatedData(a) => a.extended_properties(),
            Attribute::TranslatedTokens(a) => a.extended_properties(),
            Attribute::Generic(a) => a.extended_properties(),
        }
    }

    pub fn is_generic(&self) -> bool {
        matches!(self, Attribute::Generic(_))
    }

    pub fn as_generic(&self) -> Option<&GenericAttribute> {
        match self {
            Attribute::Generic(a) => Some(a),
            _ => None,
        }
    }

    pub fn downcast_ref<T: AttributeKind>(&self) -> Option<&T> {
        T::from_attribute(self)
    }

    pub(crate) fn write_fields(&self, out: &mut FieldWriter) {
        match self {
            Attribute::BaseNounPhrase(a) => a.write_fields(out),
            Attribute::EntityMention(a) => a.write_fields(out),
            Attribute::ResolvedEntity(a) => a.write_fields(out),
            Attribute::LanguageDetection(a) => a.write_fields(out),
            Attribute::ScriptRegion(a) => a.write_fields(out),
            Attribute::Sentence(a) => a.write_fields(out),
            Attribute::Token(a) => a.write_fields(out),
            Attribute::TranslatedData(a) => a.write_fields(out),
            Attribute::TranslatedTokens(a) => a.write_fields(out),
            Attribute::Generic(a) => a.write_fields(out),
        }
    }

    /// True when both values are the same variant
    pub(crate) fn same_kind(&self, other: &Attribute) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.type_name().unwrap_or("generic");
        match self.span() {
            Some(span) => write!(f, "{}[{}]", name, span),
            None => write!(f, "{}", name),
        }
    }
}

/// Reject extended property keys a kind reads and writes itself.
///
/// Such a key would be shadowed by the typed field on encode and read back as the typed
/// field on decode.
pub(crate) fn validate_extended(
    type_name: &str,
    fields: &[&str],
    properties: &ExtendedProperties,
) -> Result<()> {
    for key in properties.keys() {
        if key == TYPE_KEY || fields.contains(&key) {
            return Err(Error::invalid_attribute(
                type_name,
                format!("extended property '{}' collides with a typed field", key),
            ));
        }
    }
    Ok(())
}

/// Confidences must be finite; JSON has no spelling for NaN or infinity.
pub(crate) fn validate_confidence(type_name: &str, confidence: Option<f64>) -> Result<()> {
    match confidence {
        Some(c) if !c.is_finite() => Err(Error::invalid_attribute(
            type_name,
            format!("confidence must be a finite number, found {}", c),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_names() {
        let sentence: Attribute = Sentence::builder(0, 8).build().unwrap().into();
        assert_eq!(sentence.type_name(), Some("sentence"));
        assert!(!sentence.is_generic());

        let generic: Attribute = GenericAttribute::new(ExtendedProperties::new()).into();
        assert_eq!(generic.type_name(), None);
        assert!(generic.is_generic());
    }

    #[test]
    fn test_downcast() {
        let sentence: Attribute = Sentence::builder(0, 8).build().unwrap().into();
        assert!(sentence.downcast_ref::<Sentence>().is_some());
        assert!(sentence.downcast_ref::<Token>().is_none());
    }

    #[test]
    fn test_display() {
        let sentence: Attribute = Sentence::builder(0, 8).build().unwrap().into();
        assert_eq!(sentence.to_string(), "sentence[0..8]");
    }

    #[test]
    fn test_validate_extended_rejects_typed_and_reserved_keys() {
        let ok: ExtendedProperties = vec![("color", json!("pari"))].into_iter().collect();
        assert!(validate_extended("token", &["text"], &ok).is_ok());

        let typed: ExtendedProperties = vec![("text", json!("x"))].into_iter().collect();
        assert!(validate_extended("token", &["text"], &typed).is_err());

        let reserved: ExtendedProperties = vec![("type", json!("x"))].into_iter().collect();
        assert!(validate_extended("token", &["text"], &reserved).is_err());
    }
}
