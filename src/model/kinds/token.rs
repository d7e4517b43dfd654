//! Tokens
//!
//! A token is the text of one tokenizer unit plus whatever later stages hang on it:
//! normalized forms and morphological analyses. Token order inside a list container is the
//! order of the text and is kept through encode/decode.

use super::morpho::MorphoAnalysis;
use crate::codec::fields::{FieldReader, FieldWriter, END_OFFSET, START_OFFSET};
use crate::error::Result;
use crate::model::attribute::{validate_extended, Attribute, AttributeKind, Cardinality};
use crate::model::{ExtendedProperties, Span};
use serde_json::Value;

/// A single token
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    span: Span,
    text: String,
    normalized: Vec<String>,
    source: Option<String>,
    analyses: Vec<MorphoAnalysis>,
    extended: ExtendedProperties,
}

impl Token {
    pub fn builder(start: usize, end: usize, text: impl Into<String>) -> TokenBuilder {
        TokenBuilder {
            start,
            end,
            text: text.into(),
            normalized: Vec::new(),
            source: None,
            analyses: Vec::new(),
            extended: ExtendedProperties::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn normalized(&self) -> &[String] {
        &self.normalized
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn analyses(&self) -> &[MorphoAnalysis] {
        &self.analyses
    }
}

#[derive(Debug, Clone)]
pub struct TokenBuilder {
    start: usize,
    end: usize,
    text: String,
    normalized: Vec<String>,
    source: Option<String>,
    analyses: Vec<MorphoAnalysis>,
    extended: ExtendedProperties,
}

impl TokenBuilder {
    #[must_use]
    pub fn add_normalized(mut self, normalized: impl Into<String>) -> Self {
        self.normalized.push(normalized.into());
        self
    }

    #[must_use]
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    #[must_use]
    pub fn add_analysis(mut self, analysis: MorphoAnalysis) -> Self {
        self.analyses.push(analysis);
        self
    }

    #[must_use]
    pub fn extended_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extended.set(key, value);
        self
    }

    pub fn build(self) -> Result<Token> {
        let span = Span::new(self.start, self.end)?;
        validate_extended(Token::TYPE_NAME, Token::FIELDS, &self.extended)?;
        Ok(Token {
            span,
            text: self.text,
            normalized: self.normalized,
            source: self.source,
            analyses: self.analyses,
            extended: self.extended,
        })
    }
}

impl AttributeKind for Token {
    const TYPE_NAME: &'static str = "token";
    const CARDINALITY: Cardinality = Cardinality::List;
    const FIELDS: &'static [&'static str] = &[
        START_OFFSET,
        END_OFFSET,
        "text",
        "normalized",
        "source",
        "analyses",
    ];

    fn span(&self) -> Option<Span> {
        Some(self.span)
    }

    fn extended_properties(&self) -> &ExtendedProperties {
        &self.extended
    }

    fn from_attribute(attribute: &Attribute) -> Option<&Self> {
        match attribute {
            Attribute::Token(t) => Some(t),
            _ => None,
        }
    }

    fn write_fields(&self, out: &mut FieldWriter) {
        out.span(self.span);
        out.string("text", &self.text);
        out.strings("normalized", &self.normalized);
        out.opt_string("source", self.source.as_deref());
        out.objects("analyses", &self.analyses, |analysis, w| {
            analysis.write_fields(w)
        });
        out.extended(&self.extended);
    }

    fn read_fields(reader: &mut FieldReader) -> Result<Self> {
        Ok(Self {
            span: reader.span()?,
            text: reader.string("text")?,
            normalized: reader.strings("normalized")?,
            source: reader.opt_string("source")?,
            analyses: reader.objects("analyses", MorphoAnalysis::read_fields)?,
            extended: reader.rest(),
        })
    }
}

impl From<Token> for Attribute {
    fn from(token: Token) -> Self {
        Attribute::Token(token)
    }
}
