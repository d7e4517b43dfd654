//! Script regions

use crate::codec::fields::{FieldReader, FieldWriter, END_OFFSET, START_OFFSET};
use crate::error::Result;
use crate::model::attribute::{validate_extended, Attribute, AttributeKind, Cardinality};
use crate::model::codes::ScriptCode;
use crate::model::{ExtendedProperties, Span};
use serde_json::Value;

/// A region of text written in a single script
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptRegion {
    span: Span,
    script: ScriptCode,
    extended: ExtendedProperties,
}

impl ScriptRegion {
    pub fn builder(start: usize, end: usize, script: ScriptCode) -> ScriptRegionBuilder {
        ScriptRegionBuilder {
            start,
            end,
            script,
            extended: ExtendedProperties::new(),
        }
    }

    pub fn script(&self) -> &ScriptCode {
        &self.script
    }
}

#[derive(Debug, Clone)]
pub struct ScriptRegionBuilder {
    start: usize,
    end: usize,
    script: ScriptCode,
    extended: ExtendedProperties,
}

impl ScriptRegionBuilder {
    #[must_use]
    pub fn extended_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extended.set(key, value);
        self
    }

    pub fn build(self) -> Result<ScriptRegion> {
        let span = Span::new(self.start, self.end)?;
        validate_extended(ScriptRegion::TYPE_NAME, ScriptRegion::FIELDS, &self.extended)?;
        Ok(ScriptRegion {
            span,
            script: self.script,
            extended: self.extended,
        })
    }
}

impl AttributeKind for ScriptRegion {
    const TYPE_NAME: &'static str = "scriptRegion";
    const CARDINALITY: Cardinality = Cardinality::List;
    const FIELDS: &'static [&'static str] = &[START_OFFSET, END_OFFSET, "script"];

    fn span(&self) -> Option<Span> {
        Some(self.span)
    }

    fn extended_properties(&self) -> &ExtendedProperties {
        &self.extended
    }

    fn from_attribute(attribute: &Attribute) -> Option<&Self> {
        match attribute {
            Attribute::ScriptRegion(r) => Some(r),
            _ => None,
        }
    }

    fn write_fields(&self, out: &mut FieldWriter) {
        out.span(self.span);
        out.string("script", self.script.as_str());
        out.extended(&self.extended);
    }

    fn read_fields(reader: &mut FieldReader) -> Result<Self> {
        Ok(Self {
            span: reader.span()?,
            script: ScriptCode::new(reader.string("script")?),
            extended: reader.rest(),
        })
    }
}

impl From<ScriptRegion> for Attribute {
    fn from(region: ScriptRegion) -> Self {
        Attribute::ScriptRegion(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn test_script_region_requires_script() {
        let mut reader =
            FieldReader::from_value("region", json!({"startOffset": 0, "endOffset": 4})).unwrap();
        assert_eq!(
            ScriptRegion::read_fields(&mut reader).unwrap_err(),
            Error::malformed("region.script", "missing required field")
        );
    }

    #[test]
    fn test_script_region_fields() {
        let region = ScriptRegion::builder(0, 35, "Latn".into())
            .extended_property("sr-ex", "sr-ex-val")
            .build()
            .unwrap();
        assert_eq!(region.script().as_str(), "Latn");

        let mut writer = FieldWriter::new();
        region.write_fields(&mut writer);
        assert_eq!(
            Value::Object(writer.finish()),
            json!({"startOffset": 0, "endOffset": 35, "script": "Latn", "sr-ex": "sr-ex-val"})
        );
    }
}
