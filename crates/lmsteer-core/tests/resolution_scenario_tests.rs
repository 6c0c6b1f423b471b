//! End-to-end resolution scenarios over small leaf sets
//!
//! Each test is GIVEN leaves and an ordered rule list, WHEN resolving,
//! THEN the steering config has exactly the expected entries.

mod common;

use common::{gpt2_tree, scenario_leaves};
use lmsteer_core::model::SteeringAction;
use lmsteer_core::{leaf_set, resolve, Action, Leaf, Rule, RuleKind};

fn captured(config: &lmsteer_core::SteeringConfig) -> Vec<&str> {
    config.paths().collect()
}

#[test]
fn test_scenario_mixed_tiers() {
    // GIVEN an instance capture, a block-wide pattern capture and a type skip
    let rules = vec![
        Rule::with_id("r-wte", RuleKind::Instance, "wte", Action::Capture),
        Rule::with_id("r-h", RuleKind::PathPattern, "h.*", Action::Capture),
        Rule::with_id("r-ln", RuleKind::ModuleType, "LayerNorm", Action::Skip),
    ];

    // WHEN resolving
    let config = resolve(&rules, &scenario_leaves()).unwrap();

    // THEN everything but ln_f is captured with its provenance
    assert_eq!(captured(&config), vec!["wte", "h.0.attn", "h.0.mlp"]);

    let wte = config.get("wte").unwrap();
    assert_eq!(wte.action, SteeringAction::CaptureLeafActivations);
    assert_eq!(wte.type_tag, "Embedding");
    assert_eq!(wte.source_rule_id.as_str(), "r-wte");
    assert_eq!(wte.source_rule_kind, RuleKind::Instance);
    assert_eq!(wte.source_rule_specifier, "wte");

    let mlp = config.get("h.0.mlp").unwrap();
    assert_eq!(mlp.type_tag, "MLP");
    assert_eq!(mlp.source_rule_id.as_str(), "r-h");
    assert_eq!(mlp.source_rule_kind, RuleKind::PathPattern);
}

#[test]
fn test_scenario_instance_skip_overrides_pattern_capture() {
    let rules = vec![
        Rule::path_pattern("h.*", Action::Capture),
        Rule::instance("h.0.attn", Action::Skip),
    ];
    let leaves = vec![Leaf::new("h.0.attn", "Attention")];

    let config = resolve(&rules, &leaves).unwrap();

    assert!(config.is_empty());
}

#[test]
fn test_scenario_repeated_rule_reports_later_id() {
    let rules = vec![
        Rule::with_id("first", RuleKind::ModuleType, "MLP", Action::Capture),
        Rule::with_id("second", RuleKind::ModuleType, "MLP", Action::Capture),
    ];

    let config = resolve(&rules, &scenario_leaves()).unwrap();

    assert_eq!(captured(&config), vec!["h.0.mlp"]);
    assert_eq!(
        config.get("h.0.mlp").unwrap().source_rule_id.as_str(),
        "second"
    );
}

#[test]
fn test_scenario_repeated_instance_rule_reports_later_id() {
    let rules = vec![
        Rule::with_id("first", RuleKind::Instance, "h.0.attn", Action::Capture),
        Rule::with_id("second", RuleKind::Instance, "h.0.attn", Action::Capture),
    ];

    let config = resolve(&rules, &scenario_leaves()).unwrap();

    assert_eq!(captured(&config), vec!["h.0.attn"]);
    let attn = config.get("h.0.attn").unwrap();
    assert_eq!(attn.source_rule_id.as_str(), "second");
    assert_eq!(attn.source_rule_kind, RuleKind::Instance);
}

#[test]
fn test_scenario_no_rules_captures_nothing() {
    assert!(resolve(&[], &scenario_leaves()).unwrap().is_empty());
}

#[test]
fn test_scenario_full_tree_type_capture() {
    // GIVEN a GPT-2 tree with two blocks
    let leaves = leaf_set(&gpt2_tree());

    // WHEN capturing every attention module except block 1's
    let rules = vec![
        Rule::module_type("GPT2Attention", Action::Capture),
        Rule::instance("h.1.attn", Action::Skip),
    ];
    let config = resolve(&rules, &leaves).unwrap();

    // THEN only block 0's attention is in the config
    assert_eq!(captured(&config), vec!["h.0.attn"]);
}

#[test]
fn test_scenario_output_follows_leaf_order() {
    let leaves = leaf_set(&gpt2_tree());
    let rules = vec![
        Rule::module_type("LayerNorm", Action::Capture),
        Rule::instance("wte", Action::Capture),
    ];

    let config = resolve(&rules, &leaves).unwrap();

    assert_eq!(
        captured(&config),
        vec!["wte", "h.0.ln_1", "h.0.ln_2", "h.1.ln_1", "h.1.ln_2", "ln_f"]
    );
}

#[test]
fn test_scenario_config_json_shape() {
    let rules = vec![Rule::with_id(
        "r1",
        RuleKind::Instance,
        "wte",
        Action::Capture,
    )];

    let config = resolve(&rules, &scenario_leaves()).unwrap();
    let json = serde_json::to_value(&config).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "wte": {
                "action": "capture_leaf_activations",
                "module_type": "Embedding",
                "source_rule_id": "r1",
                "source_rule_type": "instance",
                "source_rule_specifier": "wte"
            }
        })
    );
}
