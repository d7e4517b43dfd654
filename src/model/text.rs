//! Annotated text
//!
//! The aggregate root: the text (characters or raw bytes), document metadata, and one
//! [`Container`] per attribute key. Built once through [`AnnotatedTextBuilder`] and immutable
//! afterwards; to change a document, take [`AnnotatedText::to_builder`] and build a new one.
//!
//! Attribute keys are usually the kind name (`token`, `sentence`, ...) but need not be:
//! whole-document language detection lives under `languageDetection` as a single value while
//! per-region detection lives under `languageDetectionRegions` as a list of the same kind.
//! See [`keys`] for the well-known ones.

use super::attribute::{AttributeKind, Cardinality};
use super::container::Container;
use super::kinds::{
    BaseNounPhrase, EntityMention, LanguageDetection, ResolvedEntity, ScriptRegion, Sentence,
    Token, TranslatedData, TranslatedTokens,
};
use super::properties::ExtendedProperties;
use super::span::Span;
use crate::error::{Error, Result};
use serde_json::Value;
use std::collections::BTreeMap;

/// Well-known attribute keys
pub mod keys {
    pub const BASE_NOUN_PHRASE: &str = "baseNounPhrase";
    pub const ENTITY_MENTION: &str = "entityMention";
    pub const LANGUAGE_DETECTION: &str = "languageDetection";
    pub const LANGUAGE_DETECTION_REGIONS: &str = "languageDetectionRegions";
    pub const RESOLVED_ENTITY: &str = "resolvedEntity";
    pub const SCRIPT_REGION: &str = "scriptRegion";
    pub const SENTENCE: &str = "sentence";
    pub const TOKEN: &str = "token";
    pub const TRANSLATED_DATA: &str = "translatedData";
    pub const TRANSLATED_TOKENS: &str = "translatedTokens";
}

/// Top-level document fields. Document extended properties may not use them.
pub const DOCUMENT_FIELDS: &[&str] = &["data", "rawData", "metadata", "attributes"];

/// The text being annotated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Text {
    Chars(String),
    Raw(Vec<u8>),
}

/// Attribute key to container, in insertion order. Equality ignores the order.
#[derive(Debug, Clone, Default)]
pub struct Attributes {
    entries: Vec<(String, Container)>,
}

impl Attributes {
    pub fn get(&self, key: &str) -> Option<&Container> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, container)| container)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut Container> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, container)| container)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Container)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace in place, or append a new key
    pub(crate) fn insert(&mut self, key: String, container: Container) {
        match self.get_mut(&key) {
            Some(existing) => *existing = container,
            None => self.entries.push((key, container)),
        }
    }
}

impl PartialEq for Attributes {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, container)| other.get(key) == Some(container))
    }
}

/// A text and its layers of annotation
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedText {
    text: Text,
    metadata: BTreeMap<String, Vec<String>>,
    attributes: Attributes,
    extended: ExtendedProperties,
}

impl AnnotatedText {
    pub fn builder() -> AnnotatedTextBuilder {
        AnnotatedTextBuilder::default()
    }

    /// Start a new document from this one
    pub fn to_builder(&self) -> AnnotatedTextBuilder {
        AnnotatedTextBuilder {
            text: Some(self.text.clone()),
            metadata: self.metadata.clone(),
            attributes: self.attributes.clone(),
            extended: self.extended.clone(),
            conflicts: Vec::new(),
        }
    }

    pub fn text(&self) -> &Text {
        &self.text
    }

    /// Character data, if the document holds characters
    pub fn data(&self) -> Option<&str> {
        match &self.text {
            Text::Chars(s) => Some(s),
            Text::Raw(_) => None,
        }
    }

    pub fn raw_data(&self) -> Option<&[u8]> {
        match &self.text {
            Text::Chars(_) => None,
            Text::Raw(bytes) => Some(bytes),
        }
    }

    pub fn metadata(&self) -> &BTreeMap<String, Vec<String>> {
        &self.metadata
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&Container> {
        self.attributes.get(key)
    }

    pub fn extended_properties(&self) -> &ExtendedProperties {
        &self.extended
    }

    /// Text covered by `span`, counting characters. `None` for raw data or out-of-range spans.
    pub fn covered_text(&self, span: Span) -> Option<&str> {
        let data = self.data()?;
        let mut offsets = data
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(data.len()));
        let start = offsets.nth(span.start())?;
        let end = if span.is_empty() {
            start
        } else {
            offsets.nth(span.len() - 1)?
        };
        Some(&data[start..end])
    }

    /// Items under `key` as `T`, if the key holds a container of that kind
    pub fn typed<T: AttributeKind>(&self, key: &str) -> Option<Vec<&T>> {
        self.attribute(key)?.typed::<T>()
    }

    pub fn tokens(&self) -> Option<Vec<&Token>> {
        self.typed(keys::TOKEN)
    }

    pub fn sentences(&self) -> Option<Vec<&Sentence>> {
        self.typed(keys::SENTENCE)
    }

    pub fn base_noun_phrases(&self) -> Option<Vec<&BaseNounPhrase>> {
        self.typed(keys::BASE_NOUN_PHRASE)
    }

    pub fn entity_mentions(&self) -> Option<Vec<&EntityMention>> {
        self.typed(keys::ENTITY_MENTION)
    }

    pub fn resolved_entities(&self) -> Option<Vec<&ResolvedEntity>> {
        self.typed(keys::RESOLVED_ENTITY)
    }

    pub fn script_regions(&self) -> Option<Vec<&ScriptRegion>> {
        self.typed(keys::SCRIPT_REGION)
    }

    pub fn language_detection_regions(&self) -> Option<Vec<&LanguageDetection>> {
        self.typed(keys::LANGUAGE_DETECTION_REGIONS)
    }

    pub fn whole_document_language_detection(&self) -> Option<&LanguageDetection> {
        self.attribute(keys::LANGUAGE_DETECTION)?
            .single_item()?
            .downcast_ref()
    }

    pub fn translated_data(&self) -> Option<Vec<&TranslatedData>> {
        self.typed(keys::TRANSLATED_DATA)
    }

    pub fn translated_tokens(&self) -> Option<Vec<&TranslatedTokens>> {
        self.typed(keys::TRANSLATED_TOKENS)
    }
}

/// Assembles an [`AnnotatedText`]. Confined to one owner until `build()`.
#[derive(Debug, Clone, Default)]
pub struct AnnotatedTextBuilder {
    text: Option<Text>,
    metadata: BTreeMap<String, Vec<String>>,
    attributes: Attributes,
    extended: ExtendedProperties,
    conflicts: Vec<String>,
}

impl AnnotatedTextBuilder {
    #[must_use]
    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.text = Some(Text::Chars(data.into()));
        self
    }

    #[must_use]
    pub fn raw_data(mut self, data: Vec<u8>) -> Self {
        self.text = Some(Text::Raw(data));
        self
    }

    #[must_use]
    pub fn text(mut self, text: Text) -> Self {
        self.text = Some(text);
        self
    }

    /// Set all values of one metadata key
    #[must_use]
    pub fn metadata(mut self, key: impl Into<String>, values: Vec<String>) -> Self {
        self.metadata.insert(key.into(), values);
        self
    }

    #[must_use]
    pub fn add_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.entry(key.into()).or_default().push(value.into());
        self
    }

    /// Store a container under `key`, replacing whatever was there
    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, container: Container) -> Self {
        self.attributes.insert(key.into(), container);
        self
    }

    /// File `item` under its kind's name. List kinds append to the list there, single kinds
    /// replace it.
    #[must_use]
    pub fn push<T: AttributeKind>(mut self, item: T) -> Self {
        let key = T::TYPE_NAME;
        match T::CARDINALITY {
            Cardinality::Single => self.attributes.insert(key.to_string(), Container::single(item)),
            Cardinality::List => match self.attributes.get_mut(key) {
                None => self
                    .attributes
                    .insert(key.to_string(), Container::list(vec![item])),
                Some(existing)
                    if existing.kind() == Cardinality::List
                        && existing.item_type_name() == key =>
                {
                    existing.push(item.into());
                }
                Some(_) => self.conflicts.push(key.to_string()),
            },
        }
        self
    }

    #[must_use]
    pub fn extended_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extended.set(key, value);
        self
    }

    pub fn build(self) -> Result<AnnotatedText> {
        let text = self.text.ok_or_else(|| {
            Error::invalid_attribute("annotatedText", "neither data nor raw data was set")
        })?;
        if let Some(key) = self.conflicts.first() {
            return Err(Error::invalid_attribute(
                key.as_str(),
                "pushed an item onto a key that does not hold a list of that kind",
            ));
        }
        if let Some(key) = self.extended.keys().find(|key| DOCUMENT_FIELDS.contains(key)) {
            return Err(Error::invalid_attribute(
                "annotatedText",
                format!("extended property '{}' collides with a document field", key),
            ));
        }
        Ok(AnnotatedText {
            text,
            metadata: self.metadata,
            attributes: self.attributes,
            extended: self.extended,
        })
    }
}
