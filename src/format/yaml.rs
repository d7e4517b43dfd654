//! YAML rendering
//!
//! Mapping keys must be strings; anything else is a syntax error rather than being coerced.

use super::Format;
use crate::error::{Error, Result};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct YamlFormat;

impl Format for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn description(&self) -> &str {
        "YAML interchange document"
    }

    fn parse_tree(&self, source: &str) -> Result<Value> {
        serde_yaml::from_str(source).map_err(|e| Error::syntax(self.name(), e))
    }

    fn write_tree(&self, tree: &Value) -> Result<String> {
        serde_yaml::to_string(tree).map_err(|e| Error::syntax(self.name(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_yaml_tree() {
        let source = "data: Boston.\nmetadata:\n  source: [wire]\nattributes: {}\n";
        let tree = YamlFormat.parse_tree(source).unwrap();
        assert_eq!(
            tree,
            json!({"data": "Boston.", "metadata": {"source": ["wire"]}, "attributes": {}})
        );
    }

    #[test]
    fn test_write_then_parse() {
        let tree = json!({"data": "x", "attributes": {"n": {"type": "novelty", "ratio": 0.5}}});
        let rendered = YamlFormat.write_tree(&tree).unwrap();
        assert_eq!(YamlFormat.parse_tree(&rendered).unwrap(), tree);
    }

    #[test]
    fn test_syntax_error() {
        assert!(YamlFormat.parse_tree("data: [unclosed").is_err());
    }
}
