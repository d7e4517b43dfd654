//! Opaque code values
//!
//! Language codes, script codes and transliteration schemes are supplied by the caller and
//! passed through verbatim. Nothing here validates them against ISO 639 or ISO 15924.

use super::attribute::validate_extended;
use super::properties::ExtendedProperties;
use crate::codec::fields::{FieldReader, FieldWriter};
use crate::error::Result;
use std::fmt;

macro_rules! opaque_code {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            pub fn new(code: impl Into<String>) -> Self {
                Self(code.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(code: &str) -> Self {
                Self::new(code)
            }
        }
    };
}

opaque_code!(
    /// Language code, e.g. `eng`
    LanguageCode
);
opaque_code!(
    /// Script code, e.g. `Latn`
    ScriptCode
);
opaque_code!(
    /// Transliteration scheme, e.g. `native`
    TransliterationScheme
);

/// Script, language and transliteration scheme of a piece of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextDomain {
    script: ScriptCode,
    language: LanguageCode,
    transliteration_scheme: TransliterationScheme,
    extended: ExtendedProperties,
}

impl TextDomain {
    pub const TYPE_NAME: &'static str = "textDomain";
    pub const FIELDS: &'static [&'static str] = &["script", "language", "transliterationScheme"];

    pub fn new(
        script: ScriptCode,
        language: LanguageCode,
        transliteration_scheme: TransliterationScheme,
    ) -> Self {
        Self {
            script,
            language,
            transliteration_scheme,
            extended: ExtendedProperties::new(),
        }
    }

    /// Attach extended properties
    pub fn with_extended(mut self, extended: ExtendedProperties) -> Result<Self> {
        validate_extended(Self::TYPE_NAME, Self::FIELDS, &extended)?;
        self.extended = extended;
        Ok(self)
    }

    pub fn script(&self) -> &ScriptCode {
        &self.script
    }

    pub fn language(&self) -> &LanguageCode {
        &self.language
    }

    pub fn transliteration_scheme(&self) -> &TransliterationScheme {
        &self.transliteration_scheme
    }

    pub fn extended_properties(&self) -> &ExtendedProperties {
        &self.extended
    }

    pub(crate) fn write_fields(&self, out: &mut FieldWriter) {
        out.string("script", self.script.as_str());
        out.string("language", self.language.as_str());
        out.string("transliterationScheme", self.transliteration_scheme.as_str());
        out.extended(&self.extended);
    }

    pub(crate) fn read_fields(reader: &mut FieldReader) -> Result<Self> {
        let script = ScriptCode::new(reader.string("script")?);
        let language = LanguageCode::new(reader.string("language")?);
        let transliteration_scheme =
            TransliterationScheme::new(reader.string("transliterationScheme")?);
        Ok(Self {
            script,
            language,
            transliteration_scheme,
            extended: reader.rest(),
        })
    }
}

impl fmt::Display for TextDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}",
            self.language, self.script, self.transliteration_scheme
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn german() -> TextDomain {
        TextDomain::new("Latn".into(), "deu".into(), "native".into())
    }

    #[test]
    fn test_codes_are_opaque() {
        let code = LanguageCode::new("not-a-real-code");
        assert_eq!(code.as_str(), "not-a-real-code");
        assert_eq!(code.to_string(), "not-a-real-code");
    }

    #[test]
    fn test_text_domain_fields() {
        let mut writer = FieldWriter::new();
        german().write_fields(&mut writer);
        assert_eq!(
            Value::Object(writer.finish()),
            json!({"script": "Latn", "language": "deu", "transliterationScheme": "native"})
        );
    }

    #[test]
    fn test_text_domain_keeps_unknown_fields() {
        let mut reader = FieldReader::from_value(
            "domain",
            json!({
                "script": "Latn",
                "language": "deu",
                "transliterationScheme": "native",
                "region": "AT"
            }),
        )
        .unwrap();
        let domain = TextDomain::read_fields(&mut reader).unwrap();
        assert_eq!(domain.language().as_str(), "deu");
        assert_eq!(domain.extended_properties().get("region"), Some(&json!("AT")));
    }

    #[test]
    fn test_text_domain_display() {
        assert_eq!(german().to_string(), "deu/Latn/native");
    }
}
