//! Language detection results
//!
//! A detector usually returns several candidate answers for a region, so a
//! [`LanguageDetection`] carries an ordered list of [`DetectionResult`]s, best first. The same
//! kind serves both whole-document detection (a single container) and per-region detection
//! (a list container).

use crate::codec::fields::{FieldReader, FieldWriter, END_OFFSET, START_OFFSET};
use crate::error::Result;
use crate::model::attribute::{
    validate_confidence, validate_extended, Attribute, AttributeKind, Cardinality,
};
use crate::model::codes::{LanguageCode, ScriptCode};
use crate::model::{ExtendedProperties, Span};
use serde_json::Value;

/// One candidate answer of a language detector
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionResult {
    language: LanguageCode,
    encoding: Option<String>,
    script: Option<ScriptCode>,
    confidence: f64,
    extended: ExtendedProperties,
}

impl DetectionResult {
    const TYPE_NAME: &'static str = "detectionResult";
    const FIELDS: &'static [&'static str] = &["language", "encoding", "script", "confidence"];

    pub fn builder(language: LanguageCode) -> DetectionResultBuilder {
        DetectionResultBuilder {
            language,
            encoding: None,
            script: None,
            confidence: 0.0,
            extended: ExtendedProperties::new(),
        }
    }

    pub fn language(&self) -> &LanguageCode {
        &self.language
    }

    pub fn encoding(&self) -> Option<&str> {
        self.encoding.as_deref()
    }

    pub fn script(&self) -> Option<&ScriptCode> {
        self.script.as_ref()
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn extended_properties(&self) -> &ExtendedProperties {
        &self.extended
    }

    fn write_fields(&self, out: &mut FieldWriter) {
        out.string("language", self.language.as_str());
        out.opt_string("encoding", self.encoding.as_deref());
        out.opt_string("script", self.script.as_ref().map(ScriptCode::as_str));
        out.f64("confidence", self.confidence);
        out.extended(&self.extended);
    }

    fn read_fields(reader: &mut FieldReader) -> Result<Self> {
        Ok(Self {
            language: LanguageCode::new(reader.string("language")?),
            encoding: reader.opt_string("encoding")?,
            script: reader.opt_string("script")?.map(ScriptCode::new),
            confidence: reader.opt_f64("confidence")?.unwrap_or(0.0),
            extended: reader.rest(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct DetectionResultBuilder {
    language: LanguageCode,
    encoding: Option<String>,
    script: Option<ScriptCode>,
    confidence: f64,
    extended: ExtendedProperties,
}

impl DetectionResultBuilder {
    #[must_use]
    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    #[must_use]
    pub fn script(mut self, script: ScriptCode) -> Self {
        self.script = Some(script);
        self
    }

    #[must_use]
    pub fn confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    #[must_use]
    pub fn extended_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extended.set(key, value);
        self
    }

    pub fn build(self) -> Result<DetectionResult> {
        validate_extended(DetectionResult::TYPE_NAME, DetectionResult::FIELDS, &self.extended)?;
        validate_confidence(DetectionResult::TYPE_NAME, Some(self.confidence))?;
        Ok(DetectionResult {
            language: self.language,
            encoding: self.encoding,
            script: self.script,
            confidence: self.confidence,
            extended: self.extended,
        })
    }
}

/// Language detection over a region of text
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageDetection {
    span: Span,
    detection_results: Vec<DetectionResult>,
    extended: ExtendedProperties,
}

impl LanguageDetection {
    pub fn builder(
        start: usize,
        end: usize,
        detection_results: Vec<DetectionResult>,
    ) -> LanguageDetectionBuilder {
        LanguageDetectionBuilder {
            start,
            end,
            detection_results,
            extended: ExtendedProperties::new(),
        }
    }

    pub fn detection_results(&self) -> &[DetectionResult] {
        &self.detection_results
    }

    /// Best candidate, if the detector returned any
    pub fn best(&self) -> Option<&DetectionResult> {
        self.detection_results.first()
    }
}

#[derive(Debug, Clone)]
pub struct LanguageDetectionBuilder {
    start: usize,
    end: usize,
    detection_results: Vec<DetectionResult>,
    extended: ExtendedProperties,
}

impl LanguageDetectionBuilder {
    #[must_use]
    pub fn add_result(mut self, result: DetectionResult) -> Self {
        self.detection_results.push(result);
        self
    }

    #[must_use]
    pub fn extended_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extended.set(key, value);
        self
    }

    pub fn build(self) -> Result<LanguageDetection> {
        let span = Span::new(self.start, self.end)?;
        validate_extended(LanguageDetection::TYPE_NAME, LanguageDetection::FIELDS, &self.extended)?;
        Ok(LanguageDetection {
            span,
            detection_results: self.detection_results,
            extended: self.extended,
        })
    }
}

impl AttributeKind for LanguageDetection {
    const TYPE_NAME: &'static str = "languageDetection";
    const CARDINALITY: Cardinality = Cardinality::Single;
    const FIELDS: &'static [&'static str] = &[START_OFFSET, END_OFFSET, "detectionResults"];

    fn span(&self) -> Option<Span> {
        Some(self.span)
    }

    fn extended_properties(&self) -> &ExtendedProperties {
        &self.extended
    }

    fn from_attribute(attribute: &Attribute) -> Option<&Self> {
        match attribute {
            Attribute::LanguageDetection(d) => Some(d),
            _ => None,
        }
    }

    fn write_fields(&self, out: &mut FieldWriter) {
        out.span(self.span);
        out.objects("detectionResults", &self.detection_results, |result, w| {
            result.write_fields(w)
        });
        out.extended(&self.extended);
    }

    fn read_fields(reader: &mut FieldReader) -> Result<Self> {
        Ok(Self {
            span: reader.span()?,
            detection_results: reader.objects("detectionResults", DetectionResult::read_fields)?,
            extended: reader.rest(),
        })
    }
}

impl From<LanguageDetection> for Attribute {
    fn from(detection: LanguageDetection) -> Self {
        Attribute::LanguageDetection(detection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    fn english() -> DetectionResult {
        DetectionResult::builder("eng".into())
            .encoding("utf-8")
            .script("Latn".into())
            .confidence(1.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_detection_fields() {
        let detection = LanguageDetection::builder(0, 35, vec![english()])
            .extended_property("ld-ex", "ld-ex-val")
            .build()
            .unwrap();

        let mut writer = FieldWriter::new();
        detection.write_fields(&mut writer);
        let fields = writer.finish();
        assert_eq!(
            Value::Object(fields.clone()),
            json!({
                "startOffset": 0,
                "endOffset": 35,
                "detectionResults": [
                    {"language": "eng", "encoding": "utf-8", "script": "Latn", "confidence": 1.0}
                ],
                "ld-ex": "ld-ex-val"
            })
        );

        let mut reader = FieldReader::new("detection", fields);
        assert_eq!(LanguageDetection::read_fields(&mut reader).unwrap(), detection);
    }

    #[test]
    fn test_result_keeps_unknown_fields() {
        let mut reader = FieldReader::from_value(
            "detection",
            json!({
                "startOffset": 0,
                "endOffset": 4,
                "detectionResults": [{"language": "fra", "confidence": 0.5, "dialect": "qc"}]
            }),
        )
        .unwrap();
        let detection = LanguageDetection::read_fields(&mut reader).unwrap();
        let best = detection.best().unwrap();
        assert_eq!(best.language().as_str(), "fra");
        assert_eq!(best.script(), None);
        assert_eq!(best.extended_properties().get("dialect"), Some(&json!("qc")));
    }

    #[test]
    fn test_empty_results() {
        let detection = LanguageDetection::builder(0, 0, Vec::new()).build().unwrap();
        assert!(detection.best().is_none());
    }

    #[test]
    fn test_result_rejects_non_finite_confidence() {
        let err = DetectionResult::builder("eng".into())
            .confidence(f64::NAN)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::invalid_attribute(
                DetectionResult::TYPE_NAME,
                "confidence must be a finite number, found NaN"
            )
        );
        assert!(DetectionResult::builder("eng".into())
            .confidence(f64::INFINITY)
            .build()
            .is_err());
    }
}
