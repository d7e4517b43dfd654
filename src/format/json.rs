//! JSON rendering

use super::Format;
use crate::error::{Error, Result};
use serde_json::Value;

/// JSON, compact or pretty-printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonFormat {
    pub pretty: bool,
}

impl JsonFormat {
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self::pretty()
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "JSON interchange document"
    }

    fn parse_tree(&self, source: &str) -> Result<Value> {
        serde_json::from_str(source).map_err(|e| Error::syntax(self.name(), e))
    }

    fn write_tree(&self, tree: &Value) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(tree)
        } else {
            serde_json::to_string(tree)
        };
        rendered.map_err(|e| Error::syntax(self.name(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_keeps_key_order() {
        let tree = JsonFormat::default()
            .parse_tree(r#"{"z": 1, "a": 2, "m": 3}"#)
            .unwrap();
        let keys: Vec<_> = tree.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_compact_output() {
        let out = JsonFormat::compact()
            .write_tree(&json!({"data": "x", "metadata": {}}))
            .unwrap();
        assert_eq!(out, r#"{"data":"x","metadata":{}}"#);
    }

    #[test]
    fn test_syntax_error() {
        let err = JsonFormat::default().parse_tree("{not json").unwrap_err();
        assert!(matches!(err, Error::Syntax { ref format, .. } if format == "json"));
    }
}
