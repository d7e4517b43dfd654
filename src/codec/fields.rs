//! Field-level access to the generic tree
//!
//! Attribute kinds read and write themselves through these two helpers rather than through
//! serde derives: the decoder has to know which fields a kind consumed so that whatever is
//! left over can be moved into the kind's [`ExtendedProperties`].
//!
//! [`FieldReader`] owns the object it reads from and removes fields as they are taken. Its
//! path (e.g. `attributes.token.items[3]`) is threaded into every `MalformedDocument` error.
//! [`FieldWriter`] builds an object in field order, typed fields first, extended fields last.

use crate::error::{Error, Result};
use crate::model::{ExtendedProperties, Span};
use serde_json::{Map, Value};

pub const START_OFFSET: &str = "startOffset";
pub const END_OFFSET: &str = "endOffset";

/// Consumes fields from one object of the generic tree
#[derive(Debug, Clone)]
pub struct FieldReader {
    path: String,
    fields: Map<String, Value>,
}

impl FieldReader {
    pub fn new(path: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            path: path.into(),
            fields,
        }
    }

    /// Start reading `value`, which must be an object.
    pub fn from_value(path: impl Into<String>, value: Value) -> Result<Self> {
        let path = path.into();
        match value {
            Value::Object(fields) => Ok(Self { path, fields }),
            other => Err(Error::malformed(
                path,
                format!("expected an object, found {}", kind_of(&other)),
            )),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn has(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Peek at a field without consuming it
    pub fn peek(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Remove a field, keeping the order of the remaining ones.
    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.fields.shift_remove(key)
    }

    pub fn field_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    pub fn malformed(&self, key: &str, reason: impl Into<String>) -> Error {
        Error::malformed(self.field_path(key), reason)
    }

    /// Required `startOffset`/`endOffset` pair
    pub fn span(&mut self) -> Result<Span> {
        self.opt_span()?
            .ok_or_else(|| self.malformed(START_OFFSET, "missing required offsets"))
    }

    /// Both offsets or neither
    pub fn opt_span(&mut self) -> Result<Option<Span>> {
        let start = self.opt_usize(START_OFFSET)?;
        let end = self.opt_usize(END_OFFSET)?;
        match (start, end) {
            (None, None) => Ok(None),
            (Some(start), Some(end)) => Span::new(start, end)
                .map(Some)
                .map_err(|e| Error::malformed(self.path.clone(), e.to_string())),
            (Some(_), None) => Err(self.malformed(END_OFFSET, "missing required field")),
            (None, Some(_)) => Err(self.malformed(START_OFFSET, "missing required field")),
        }
    }

    pub fn string(&mut self, key: &str) -> Result<String> {
        self.opt_string(key)?
            .ok_or_else(|| self.malformed(key, "missing required field"))
    }

    pub fn opt_string(&mut self, key: &str) -> Result<Option<String>> {
        match self.take(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(self.expected(key, "a string", &other)),
        }
    }

    pub fn opt_f64(&mut self, key: &str) -> Result<Option<f64>> {
        match self.take(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n
                .as_f64()
                .map(Some)
                .ok_or_else(|| self.malformed(key, "number out of range")),
            Some(other) => Err(self.expected(key, "a number", &other)),
        }
    }

    pub fn opt_i64(&mut self, key: &str) -> Result<Option<i64>> {
        match self.take(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n
                .as_i64()
                .map(Some)
                .ok_or_else(|| self.malformed(key, format!("expected an integer, found {}", n))),
            Some(other) => Err(self.expected(key, "an integer", &other)),
        }
    }

    /// Non-negative integer, across the whole `u64` range that fits a `usize`
    pub fn opt_usize(&mut self, key: &str) -> Result<Option<usize>> {
        match self.take(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(n)) => n
                .as_u64()
                .and_then(|n| usize::try_from(n).ok())
                .map(Some)
                .ok_or_else(|| {
                    self.malformed(key, format!("expected a non-negative integer, found {}", n))
                }),
            Some(other) => Err(self.expected(key, "a non-negative integer", &other)),
        }
    }

    pub fn opt_bool(&mut self, key: &str) -> Result<Option<bool>> {
        match self.take(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(b)),
            Some(other) => Err(self.expected(key, "a boolean", &other)),
        }
    }

    /// Sequence of strings; absent reads as empty
    pub fn strings(&mut self, key: &str) -> Result<Vec<String>> {
        let items = self.sequence(key)?;
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::String(s) => Ok(s),
                other => Err(Error::malformed(
                    format!("{}[{}]", self.field_path(key), i),
                    format!("expected a string, found {}", kind_of(&other)),
                )),
            })
            .collect()
    }

    /// Sequence of objects, each handed to `read`; absent reads as empty
    pub fn objects<T>(
        &mut self,
        key: &str,
        mut read: impl FnMut(&mut FieldReader) -> Result<T>,
    ) -> Result<Vec<T>> {
        let items = self.sequence(key)?;
        let base = self.field_path(key);
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                let mut reader = FieldReader::from_value(format!("{}[{}]", base, i), item)?;
                read(&mut reader)
            })
            .collect()
    }

    /// Required nested object
    pub fn object<T>(
        &mut self,
        key: &str,
        read: impl FnOnce(&mut FieldReader) -> Result<T>,
    ) -> Result<T> {
        let value = self
            .take(key)
            .ok_or_else(|| self.malformed(key, "missing required field"))?;
        let mut reader = FieldReader::from_value(self.field_path(key), value)?;
        read(&mut reader)
    }

    /// Whatever has not been taken yet
    pub fn rest(&mut self) -> ExtendedProperties {
        ExtendedProperties::from_map(std::mem::take(&mut self.fields))
    }

    fn sequence(&mut self, key: &str) -> Result<Vec<Value>> {
        match self.take(key) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(self.expected(key, "a sequence", &other)),
        }
    }

    fn expected(&self, key: &str, expected: &str, found: &Value) -> Error {
        self.malformed(key, format!("expected {}, found {}", expected, kind_of(found)))
    }
}

/// Builds one object of the generic tree
#[derive(Debug, Clone, Default)]
pub struct FieldWriter {
    fields: Map<String, Value>,
}

impl FieldWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn span(&mut self, span: Span) {
        self.value(START_OFFSET, Value::from(span.start()));
        self.value(END_OFFSET, Value::from(span.end()));
    }

    pub fn opt_span(&mut self, span: Option<Span>) {
        if let Some(span) = span {
            self.span(span);
        }
    }

    pub fn string(&mut self, key: &str, value: &str) {
        self.value(key, Value::from(value));
    }

    pub fn opt_string(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.string(key, value);
        }
    }

    pub fn f64(&mut self, key: &str, value: f64) {
        self.value(key, Value::from(value));
    }

    pub fn opt_f64(&mut self, key: &str, value: Option<f64>) {
        if let Some(value) = value {
            self.f64(key, value);
        }
    }

    pub fn opt_i64(&mut self, key: &str, value: Option<i64>) {
        if let Some(value) = value {
            self.value(key, Value::from(value));
        }
    }

    pub fn bool(&mut self, key: &str, value: bool) {
        self.value(key, Value::Bool(value));
    }

    /// Skipped when empty; reads back as empty
    pub fn strings(&mut self, key: &str, values: &[String]) {
        if !values.is_empty() {
            self.value(key, Value::from(values.to_vec()));
        }
    }

    /// Skipped when empty; reads back as empty
    pub fn objects<T>(
        &mut self,
        key: &str,
        items: &[T],
        mut write: impl FnMut(&T, &mut FieldWriter),
    ) {
        if items.is_empty() {
            return;
        }
        let encoded = items
            .iter()
            .map(|item| {
                let mut writer = FieldWriter::new();
                write(item, &mut writer);
                Value::Object(writer.finish())
            })
            .collect();
        self.value(key, Value::Array(encoded));
    }

    pub fn object(&mut self, key: &str, write: impl FnOnce(&mut FieldWriter)) {
        let mut writer = FieldWriter::new();
        write(&mut writer);
        self.value(key, Value::Object(writer.finish()));
    }

    pub fn value(&mut self, key: &str, value: Value) {
        self.fields.insert(key.to_string(), value);
    }

    /// Merge extended fields after the typed ones. Typed fields win on a clash.
    pub fn extended(&mut self, properties: &ExtendedProperties) {
        for (key, value) in properties.iter() {
            self.fields
                .entry(key.to_string())
                .or_insert_with(|| value.clone());
        }
    }

    pub fn finish(self) -> Map<String, Value> {
        self.fields
    }
}

/// Short name of a value's shape for error messages
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reader(value: Value) -> FieldReader {
        FieldReader::from_value("attributes.test", value).unwrap()
    }

    #[test]
    fn test_reader_takes_span() {
        let mut r = reader(json!({"startOffset": 4, "endOffset": 8, "color": "pari"}));
        assert_eq!(r.span().unwrap(), Span::new(4, 8).unwrap());
        let rest = r.rest();
        assert_eq!(rest.keys().collect::<Vec<_>>(), vec!["color"]);
    }

    #[test]
    fn test_reader_rejects_half_span() {
        let mut r = reader(json!({"startOffset": 4}));
        let err = r.opt_span().unwrap_err();
        assert_eq!(
            err,
            Error::malformed("attributes.test.endOffset", "missing required field")
        );
    }

    #[test]
    fn test_reader_reports_inverted_span_as_malformed() {
        let mut r = reader(json!({"startOffset": 8, "endOffset": 4}));
        match r.span().unwrap_err() {
            Error::MalformedDocument { path, reason } => {
                assert_eq!(path, "attributes.test");
                assert!(reason.contains("8..4"));
            }
            other => panic!("Expected MalformedDocument, got {:?}", other),
        }
    }

    #[test]
    fn test_reader_takes_offsets_past_i64() {
        let far = usize::MAX as u64;
        let mut r = reader(json!({"startOffset": 0, "endOffset": far}));
        assert_eq!(r.span().unwrap(), Span::new(0, usize::MAX).unwrap());
    }

    #[test]
    fn test_reader_rejects_negative_offset() {
        let mut r = reader(json!({"startOffset": -1, "endOffset": 4}));
        assert_eq!(
            r.span().unwrap_err(),
            Error::malformed(
                "attributes.test.startOffset",
                "expected a non-negative integer, found -1"
            )
        );
    }

    #[test]
    fn test_reader_wrong_type() {
        let mut r = reader(json!({"text": 5}));
        let err = r.string("text").unwrap_err();
        assert_eq!(
            err,
            Error::malformed("attributes.test.text", "expected a string, found a number")
        );
    }

    #[test]
    fn test_reader_rest_keeps_order_after_takes() {
        let mut r = reader(json!({"a": 1, "text": "x", "b": 2, "c": 3}));
        r.string("text").unwrap();
        let rest = r.rest();
        assert_eq!(rest.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_reader_objects_report_index_in_path() {
        let mut r = reader(json!({"items": [{"x": 1}, 7]}));
        let err = r.objects("items", |item| Ok(item.rest())).unwrap_err();
        assert_eq!(
            err,
            Error::malformed("attributes.test.items[1]", "expected an object, found a number")
        );
    }

    #[test]
    fn test_writer_typed_fields_win_over_extended() {
        let mut w = FieldWriter::new();
        w.string("text", "This");
        let ext: ExtendedProperties = vec![("text", json!("other")), ("extra", json!(true))]
            .into_iter()
            .collect();
        w.extended(&ext);
        assert_eq!(Value::Object(w.finish()), json!({"text": "This", "extra": true}));
    }

    #[test]
    fn test_writer_skips_empty_sequences() {
        let mut w = FieldWriter::new();
        w.strings("normalized", &[]);
        w.objects::<String>("analyses", &[], |_, _| {});
        assert!(w.finish().is_empty());
    }
}
