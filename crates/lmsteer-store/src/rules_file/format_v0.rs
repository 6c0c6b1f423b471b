//! Rules file format v0 schema

use lmsteer_core::{Action, Rule, RuleKind};
use serde::{Deserialize, Serialize};

/// Top-level rules file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesFileV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    #[serde(default)]
    pub rules: Vec<RuleEntry>,
}

/// One rule as written in the file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleEntry {
    /// Generated when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub kind: RuleKind,
    pub specifier: String,
    pub action: Action,
}

impl From<&Rule> for RuleEntry {
    fn from(rule: &Rule) -> Self {
        Self {
            id: Some(rule.id().to_string()),
            kind: rule.kind(),
            specifier: rule.specifier().to_string(),
            action: rule.action(),
        }
    }
}
