//! Extended properties
//!
//! The escape hatch of the model. Every attribute, container and document carries an
//! [`ExtendedProperties`] bag holding fields the current schema does not know about, so that
//! data written by a newer producer survives a trip through an older consumer.
//!
//! Values are generic tree values (`serde_json::Value`): strings, numbers, booleans, null,
//! nested mappings and sequences. Keys keep their insertion order so re-encoding writes them
//! back in the order they were read. Equality ignores that order; sequence order inside a
//! value still matters.

use serde_json::{Map, Value};

/// Ordered bag of fields outside a kind's core schema
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtendedProperties {
    fields: Map<String, Value>,
}

impl ExtendedProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Set a field. An existing key keeps its position and gets the new value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Map<String, Value>> for ExtendedProperties {
    fn from(fields: Map<String, Value>) -> Self {
        Self::from_map(fields)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ExtendedProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut properties = Self::new();
        for (key, value) in iter {
            properties.set(key, value);
        }
        properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_and_get() {
        let mut props = ExtendedProperties::new();
        assert!(props.set("color", "pari").is_none());
        assert_eq!(props.get("color"), Some(&json!("pari")));
        assert_eq!(props.get("missing"), None);
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn test_keys_keep_insertion_order() {
        let mut props = ExtendedProperties::new();
        props.set("zeta", 1);
        props.set("alpha", 2);
        props.set("mid", 3);
        props.set("zeta", 4);

        assert_eq!(props.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(props.get("zeta"), Some(&json!(4)));
    }

    #[test]
    fn test_equality_ignores_top_level_order() {
        let a: ExtendedProperties = vec![("a", json!(1)), ("b", json!(2))].into_iter().collect();
        let b: ExtendedProperties = vec![("b", json!(2)), ("a", json!(1))].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sequence_order_is_significant() {
        let a: ExtendedProperties = vec![("list", json!([1, 2]))].into_iter().collect();
        let b: ExtendedProperties = vec![("list", json!([2, 1]))].into_iter().collect();
        assert_ne!(a, b);
    }
}
