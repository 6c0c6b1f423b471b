// Integration tests for rules file parsing

use lmsteer_core::errors::ExErrorKind;
use lmsteer_core::{Action, RuleKind};
use lmsteer_store::rules_file::parse_rules_file;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

#[test]
fn test_parse_rules_in_file_order() {
    let book = parse_rules_file(&fixtures_dir().join("gpt2_rules.yaml")).unwrap();

    assert_eq!(book.len(), 3);
    let rules = book.rules();
    assert_eq!(rules[0].id().as_str(), "r-wte");
    assert_eq!(rules[1].kind(), RuleKind::PathPattern);
    assert_eq!(rules[1].specifier(), "h.*");
    assert_eq!(rules[2].action(), Action::Skip);
}

#[test]
fn test_reject_invalid_schema_version() {
    let path = fixtures_dir().join("rules_invalid_schema_version.yaml");

    let err = parse_rules_file(&path).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::UnsupportedSchema);
    assert!(err.message().contains("schema_version: 2"));
}
