//! Morphological analyses
//!
//! Analyses hang off a [`Token`](super::Token); they are nested values, not attributes, and
//! never sit in a container on their own. Besides the common fields (lemma, part of speech,
//! raw analyzer output, component tokens) some languages get extra structure, selected by the
//! analysis's own `type` field:
//!
//! | `type`    | details          |
//! |-----------|------------------|
//! | absent    | [`MorphoDetails::Plain`] |
//! | `arabic`  | prefixes, stems, suffixes with tags; definite article; root; lengths |
//! | `han`     | readings |
//!
//! An analysis whose `type` is not one of these decodes as plain and keeps `type` in its
//! extended properties, so it is written back unchanged.

use super::token::Token;
use crate::codec::fields::{FieldReader, FieldWriter};
use crate::error::Result;
use crate::model::attribute::{validate_extended, AttributeKind, TYPE_KEY};
use crate::model::ExtendedProperties;
use serde_json::Value;

const ARABIC: &str = "arabic";
const HAN: &str = "han";

/// Language-specific part of an analysis
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MorphoDetails {
    #[default]
    Plain,
    Arabic(ArabicDetails),
    Han(HanDetails),
}

/// Arabic affix structure
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArabicDetails {
    prefixes: Vec<String>,
    prefix_tags: Vec<String>,
    stems: Vec<String>,
    stem_tags: Vec<String>,
    suffixes: Vec<String>,
    suffix_tags: Vec<String>,
    definite_article: bool,
    strippable_prefix: bool,
    root: Option<String>,
    prefix_length: usize,
    stem_length: usize,
}

impl ArabicDetails {
    pub fn builder() -> ArabicDetailsBuilder {
        ArabicDetailsBuilder::default()
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn prefix_tags(&self) -> &[String] {
        &self.prefix_tags
    }

    pub fn stems(&self) -> &[String] {
        &self.stems
    }

    pub fn stem_tags(&self) -> &[String] {
        &self.stem_tags
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    pub fn suffix_tags(&self) -> &[String] {
        &self.suffix_tags
    }

    pub fn definite_article(&self) -> bool {
        self.definite_article
    }

    pub fn strippable_prefix(&self) -> bool {
        self.strippable_prefix
    }

    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    pub fn prefix_length(&self) -> usize {
        self.prefix_length
    }

    pub fn stem_length(&self) -> usize {
        self.stem_length
    }

    const FIELDS: &'static [&'static str] = &[
        "prefixes",
        "prefixTags",
        "stems",
        "stemTags",
        "suffixes",
        "suffixTags",
        "definiteArticle",
        "strippablePrefix",
        "root",
        "prefixLength",
        "stemLength",
    ];

    fn write_fields(&self, out: &mut FieldWriter) {
        out.strings("prefixes", &self.prefixes);
        out.strings("prefixTags", &self.prefix_tags);
        out.strings("stems", &self.stems);
        out.strings("stemTags", &self.stem_tags);
        out.strings("suffixes", &self.suffixes);
        out.strings("suffixTags", &self.suffix_tags);
        out.bool("definiteArticle", self.definite_article);
        out.bool("strippablePrefix", self.strippable_prefix);
        out.opt_string("root", self.root.as_deref());
        out.value("prefixLength", Value::from(self.prefix_length));
        out.value("stemLength", Value::from(self.stem_length));
    }

    fn read_fields(reader: &mut FieldReader) -> Result<Self> {
        Ok(Self {
            prefixes: reader.strings("prefixes")?,
            prefix_tags: reader.strings("prefixTags")?,
            stems: reader.strings("stems")?,
            stem_tags: reader.strings("stemTags")?,
            suffixes: reader.strings("suffixes")?,
            suffix_tags: reader.strings("suffixTags")?,
            definite_article: reader.opt_bool("definiteArticle")?.unwrap_or(false),
            strippable_prefix: reader.opt_bool("strippablePrefix")?.unwrap_or(false),
            root: reader.opt_string("root")?,
            prefix_length: reader.opt_usize("prefixLength")?.unwrap_or(0),
            stem_length: reader.opt_usize("stemLength")?.unwrap_or(0),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ArabicDetailsBuilder {
    details: ArabicDetails,
}

impl ArabicDetailsBuilder {
    #[must_use]
    pub fn add_prefix(mut self, text: impl Into<String>, tag: impl Into<String>) -> Self {
        self.details.prefixes.push(text.into());
        self.details.prefix_tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn add_stem(mut self, text: impl Into<String>, tag: impl Into<String>) -> Self {
        self.details.stems.push(text.into());
        self.details.stem_tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn add_suffix(mut self, text: impl Into<String>, tag: impl Into<String>) -> Self {
        self.details.suffixes.push(text.into());
        self.details.suffix_tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn definite_article(mut self, value: bool) -> Self {
        self.details.definite_article = value;
        self
    }

    #[must_use]
    pub fn strippable_prefix(mut self, value: bool) -> Self {
        self.details.strippable_prefix = value;
        self
    }

    #[must_use]
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.details.root = Some(root.into());
        self
    }

    #[must_use]
    pub fn lengths(mut self, prefix_length: usize, stem_length: usize) -> Self {
        self.details.prefix_length = prefix_length;
        self.details.stem_length = stem_length;
        self
    }

    pub fn build(self) -> ArabicDetails {
        self.details
    }
}

/// Readings of a Han (Chinese/Japanese) token
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HanDetails {
    readings: Vec<String>,
}

impl HanDetails {
    pub fn new(readings: Vec<String>) -> Self {
        Self { readings }
    }

    pub fn readings(&self) -> &[String] {
        &self.readings
    }
}

/// A morphological analysis of one token
#[derive(Debug, Clone, PartialEq)]
pub struct MorphoAnalysis {
    lemma: Option<String>,
    part_of_speech: Option<String>,
    raw: Option<String>,
    components: Vec<Token>,
    details: MorphoDetails,
    extended: ExtendedProperties,
}

impl MorphoAnalysis {
    const TYPE_NAME: &'static str = "morphoAnalysis";
    const FIELDS: &'static [&'static str] =
        &["lemma", "partOfSpeech", "raw", "components", "readings"];

    pub fn builder() -> MorphoAnalysisBuilder {
        MorphoAnalysisBuilder::default()
    }

    pub fn lemma(&self) -> Option<&str> {
        self.lemma.as_deref()
    }

    pub fn part_of_speech(&self) -> Option<&str> {
        self.part_of_speech.as_deref()
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn components(&self) -> &[Token] {
        &self.components
    }

    pub fn details(&self) -> &MorphoDetails {
        &self.details
    }

    pub fn extended_properties(&self) -> &ExtendedProperties {
        &self.extended
    }

    pub(crate) fn write_fields(&self, out: &mut FieldWriter) {
        match &self.details {
            MorphoDetails::Plain => {}
            MorphoDetails::Arabic(_) => out.string(TYPE_KEY, ARABIC),
            MorphoDetails::Han(_) => out.string(TYPE_KEY, HAN),
        }
        out.opt_string("lemma", self.lemma.as_deref());
        out.opt_string("partOfSpeech", self.part_of_speech.as_deref());
        out.opt_string("raw", self.raw.as_deref());
        out.objects("components", &self.components, |token, w| token.write_fields(w));
        match &self.details {
            MorphoDetails::Plain => {}
            MorphoDetails::Arabic(arabic) => arabic.write_fields(out),
            MorphoDetails::Han(han) => out.strings("readings", &han.readings),
        }
        out.extended(&self.extended);
    }

    pub(crate) fn read_fields(reader: &mut FieldReader) -> Result<Self> {
        let variant = match reader.peek(TYPE_KEY).and_then(Value::as_str) {
            Some(s) if s == ARABIC || s == HAN => Some(s.to_string()),
            _ => None,
        };
        if variant.is_some() {
            reader.take(TYPE_KEY);
        }
        let lemma = reader.opt_string("lemma")?;
        let part_of_speech = reader.opt_string("partOfSpeech")?;
        let raw = reader.opt_string("raw")?;
        let components = reader.objects("components", Token::read_fields)?;
        let details = match variant.as_deref() {
            Some(ARABIC) => MorphoDetails::Arabic(ArabicDetails::read_fields(reader)?),
            Some(HAN) => MorphoDetails::Han(HanDetails::new(reader.strings("readings")?)),
            _ => MorphoDetails::Plain,
        };
        Ok(Self {
            lemma,
            part_of_speech,
            raw,
            components,
            details,
            extended: reader.rest(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct MorphoAnalysisBuilder {
    lemma: Option<String>,
    part_of_speech: Option<String>,
    raw: Option<String>,
    components: Vec<Token>,
    details: MorphoDetails,
    extended: ExtendedProperties,
}

impl MorphoAnalysisBuilder {
    #[must_use]
    pub fn lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = Some(lemma.into());
        self
    }

    #[must_use]
    pub fn part_of_speech(mut self, part_of_speech: impl Into<String>) -> Self {
        self.part_of_speech = Some(part_of_speech.into());
        self
    }

    #[must_use]
    pub fn raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    #[must_use]
    pub fn add_component(mut self, component: Token) -> Self {
        self.components.push(component);
        self
    }

    #[must_use]
    pub fn details(mut self, details: MorphoDetails) -> Self {
        self.details = details;
        self
    }

    #[must_use]
    pub fn extended_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extended.set(key, value);
        self
    }

    pub fn build(self) -> Result<MorphoAnalysis> {
        validate_extended(MorphoAnalysis::TYPE_NAME, MorphoAnalysis::FIELDS, &self.extended)?;
        validate_extended(MorphoAnalysis::TYPE_NAME, ArabicDetails::FIELDS, &self.extended)?;
        Ok(MorphoAnalysis {
            lemma: self.lemma,
            part_of_speech: self.part_of_speech,
            raw: self.raw,
            components: self.components,
            details: self.details,
            extended: self.extended,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn round_trip(analysis: &MorphoAnalysis) -> MorphoAnalysis {
        let mut writer = FieldWriter::new();
        analysis.write_fields(&mut writer);
        let mut reader = FieldReader::new("analysis", writer.finish());
        MorphoAnalysis::read_fields(&mut reader).unwrap()
    }

    #[test]
    fn test_arabic_analysis() {
        let details = ArabicDetails::builder()
            .add_prefix("pre", "PRE")
            .add_stem("stem", "STEM")
            .add_suffix("suff", "SUFF")
            .definite_article(true)
            .strippable_prefix(true)
            .root("root")
            .lengths(2, 3)
            .build();
        let analysis = MorphoAnalysis::builder()
            .lemma("lemma")
            .part_of_speech("pos")
            .raw("raw")
            .details(MorphoDetails::Arabic(details))
            .build()
            .unwrap();

        let read = round_trip(&analysis);
        assert_eq!(read, analysis);
        match read.details() {
            MorphoDetails::Arabic(arabic) => {
                assert_eq!(arabic.prefixes(), &["pre".to_string()]);
                assert_eq!(arabic.stem_tags(), &["STEM".to_string()]);
                assert_eq!(arabic.prefix_length(), 2);
                assert!(arabic.definite_article());
            }
            other => panic!("Expected arabic details, got {:?}", other),
        }
    }

    #[test]
    fn test_han_analysis() {
        let analysis = MorphoAnalysis::builder()
            .details(MorphoDetails::Han(HanDetails::new(vec!["proust".to_string()])))
            .build()
            .unwrap();

        let mut writer = FieldWriter::new();
        analysis.write_fields(&mut writer);
        assert_eq!(
            Value::Object(writer.finish()),
            json!({"type": "han", "readings": ["proust"]})
        );
        assert_eq!(round_trip(&analysis), analysis);
    }

    #[test]
    fn test_unknown_analysis_type_is_kept() {
        let mut reader = FieldReader::from_value(
            "analysis",
            json!({"type": "korean", "lemma": "x", "jamo": ["a"]}),
        )
        .unwrap();
        let analysis = MorphoAnalysis::read_fields(&mut reader).unwrap();
        assert_eq!(analysis.details(), &MorphoDetails::Plain);
        assert_eq!(analysis.lemma(), Some("x"));
        assert_eq!(
            analysis.extended_properties().keys().collect::<Vec<_>>(),
            vec!["type", "jamo"]
        );
        assert_eq!(round_trip(&analysis), analysis);
    }

    #[test]
    fn test_builder_rejects_reserved_keys() {
        assert!(MorphoAnalysis::builder()
            .extended_property("type", "arabic")
            .build()
            .is_err());
        assert!(MorphoAnalysis::builder()
            .extended_property("stemLength", 3)
            .build()
            .is_err());
    }
}
