//! Model tree parser with validation
//!
//! Parses YAML (or JSON, which YAML accepts), checks the schema version and
//! builds the validated core tree.

#![allow(clippy::result_large_err)]

use crate::errors::{io_error, tree_construction, tree_validation, unsupported_schema, Result};
use crate::tree::format_v0::ModelTreeV0;
use lmsteer_core::Node;
use std::fs;
use std::path::Path;

/// A parsed model: its name and its validated module tree
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub model_name: String,
    pub root: Node,
}

/// Parse a model tree file from a path
pub fn parse_tree_file(path: &Path) -> Result<LoadedModel> {
    let content = fs::read_to_string(path).map_err(|e| io_error("read_tree_file", e))?;
    parse_tree_str(&content)
}

/// Parse a model tree from a string
pub fn parse_tree_str(content: &str) -> Result<LoadedModel> {
    let tree: ModelTreeV0 = serde_yaml::from_str(content)
        .map_err(|e| tree_validation(&format!("YAML parse error: {}", e)))?;

    if tree.schema_version != 0 {
        return Err(unsupported_schema("tree_parse", tree.schema_version));
    }
    if tree.model.name.trim().is_empty() {
        return Err(tree_validation("model.name must not be empty"));
    }

    let root = tree.root.build().map_err(tree_construction)?;

    tracing::debug!(
        model_name = %tree.model.name,
        root_type = root.type_tag(),
        "Parsed model tree"
    );

    Ok(LoadedModel {
        model_name: tree.model.name,
        root,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lmsteer_core::errors::ExErrorKind;
    use lmsteer_core::leaf_set;

    #[test]
    fn test_parse_builds_tree() {
        let yaml = r#"
schema_version: 0
model:
  name: tiny
root:
  name: Tiny
  type: Tiny
  children:
    - name: proj
      type: Linear
    - name: norm
      type: LayerNorm
"#;

        let model = parse_tree_str(yaml).unwrap();
        assert_eq!(model.model_name, "tiny");
        assert_eq!(model.root.name(), "Tiny");
        assert_eq!(leaf_set(&model.root).len(), 2);
    }

    #[test]
    fn test_json_is_accepted() {
        let json = r#"{"schema_version": 0, "model": {"name": "m"},
                       "root": {"name": "Linear", "type": "Linear"}}"#;

        let model = parse_tree_str(json).unwrap();
        assert!(model.root.is_leaf());
    }

    #[test]
    fn test_reject_schema_version() {
        let yaml = "schema_version: 1\nmodel: {name: m}\nroot: {name: R, type: R}\n";

        let err = parse_tree_str(yaml).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::UnsupportedSchema);
    }

    #[test]
    fn test_reject_empty_model_name() {
        let yaml = "schema_version: 0\nmodel: {name: ''}\nroot: {name: R, type: R}\n";

        let err = parse_tree_str(yaml).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert!(err.message().contains("model.name"));
    }
}
