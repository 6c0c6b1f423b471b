//! Model tree format v0 schema

use lmsteer_core::ModuleSpec;
use serde::{Deserialize, Serialize};

/// Top-level model tree file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelTreeV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    pub model: ModelInfo,

    /// Root module; its name is the model class name
    pub root: ModuleSpec,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Hub-style identifier, e.g. `openai-community/gpt2`
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_tree() {
        let yaml = r#"
schema_version: 0
model:
  name: openai-community/gpt2
root:
  name: GPT2Model
  type: GPT2Model
  children:
    - name: wte
      type: Embedding
"#;

        let tree: ModelTreeV0 = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(tree.schema_version, 0);
        assert_eq!(tree.model.name, "openai-community/gpt2");
        assert_eq!(tree.root.children.len(), 1);
        assert_eq!(tree.root.children[0].type_tag, "Embedding");
        assert!(tree.root.children[0].children.is_empty());
    }
}
