//! Rules file parser with validation

#![allow(clippy::result_large_err)]

use crate::errors::{io_error, rules_validation, serialization_error, unsupported_schema, Result};
use crate::rules_file::format_v0::{RuleEntry, RulesFileV0};
use lmsteer_core::{Rule, RuleBook};
use std::fs;
use std::path::Path;

/// Parse a rules file from a path
pub fn parse_rules_file(path: &Path) -> Result<RuleBook> {
    let content = fs::read_to_string(path).map_err(|e| io_error("read_rules_file", e))?;
    parse_rules_str(&content)
}

/// Parse rules from a string into a rule book, in file order
pub fn parse_rules_str(content: &str) -> Result<RuleBook> {
    let file: RulesFileV0 = serde_yaml::from_str(content)
        .map_err(|e| rules_validation(&format!("YAML parse error: {}", e)))?;

    if file.schema_version != 0 {
        return Err(unsupported_schema("rules_parse", file.schema_version));
    }

    let mut book = RuleBook::new();
    for (index, entry) in file.rules.into_iter().enumerate() {
        book.push(to_rule(index, entry)?);
    }

    Ok(book)
}

fn to_rule(index: usize, entry: RuleEntry) -> Result<Rule> {
    // An empty specifier can never match a leaf of a valid tree
    if entry.specifier.is_empty() {
        let err = rules_validation(&format!("Rule #{} has an empty specifier", index + 1));
        return Err(match entry.id {
            Some(id) => err.with_rule_id(id),
            None => err,
        });
    }

    Ok(match entry.id {
        Some(id) if !id.is_empty() => Rule::with_id(id, entry.kind, entry.specifier, entry.action),
        _ => Rule::new(entry.kind, entry.specifier, entry.action),
    })
}

/// Render rules back to the v0 file format, ids included
pub fn rules_to_yaml(rules: &[Rule]) -> Result<String> {
    let file = RulesFileV0 {
        schema_version: 0,
        rules: rules.iter().map(RuleEntry::from).collect(),
    };
    serde_yaml::to_string(&file).map_err(|e| serialization_error("rules_to_yaml", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lmsteer_core::errors::ExErrorKind;
    use lmsteer_core::{Action, RuleKind};

    #[test]
    fn test_missing_ids_are_generated() {
        let yaml = r#"
schema_version: 0
rules:
  - kind: module_type
    specifier: LayerNorm
    action: skip
  - kind: module_type
    specifier: LayerNorm
    action: skip
"#;

        let book = parse_rules_str(yaml).unwrap();
        assert_eq!(book.len(), 2);
        assert_eq!(book.version(), 2);
        assert_ne!(book.rules()[0].id(), book.rules()[1].id());
        assert!(!book.rules()[0].id().as_str().is_empty());
    }

    #[test]
    fn test_empty_specifier_rejected_with_rule_id() {
        let yaml = "schema_version: 0\nrules:\n  - {id: r9, kind: instance, specifier: '', action: capture}\n";

        let err = parse_rules_str(yaml).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert_eq!(err.rule_id(), Some("r9"));
    }

    #[test]
    fn test_empty_rules_list() {
        let book = parse_rules_str("schema_version: 0\n").unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_yaml_output_parses_back() {
        let rules = vec![Rule::with_id(
            "r1",
            RuleKind::PathPattern,
            "h.*",
            Action::Capture,
        )];

        let yaml = rules_to_yaml(&rules).unwrap();
        let book = parse_rules_str(&yaml).unwrap();

        assert_eq!(book.rules(), rules.as_slice());
    }
}
