//! Explain command: why a leaf is (not) captured

use clap::Args;
use lmsteer_core::model::{Leaf, RuleKind};
use lmsteer_core::traversal::require;
use lmsteer_core::{explain, ExError};
use lmsteer_store::rules_file::parse_rules_file;
use lmsteer_store::tree::parse_tree_file;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExplainArgs {
    #[arg(long)]
    pub model_tree: PathBuf,

    #[arg(long)]
    pub rules: PathBuf,

    /// Full path of the leaf to explain
    #[arg(long)]
    pub path: String,
}

pub fn execute(args: ExplainArgs) -> Result<(), Box<dyn std::error::Error>> {
    let model = parse_tree_file(&args.model_tree)?;
    let book = parse_rules_file(&args.rules)?;

    let node = require(&model.root, &args.path).map_err(ExError::from)?;
    if !node.is_leaf() {
        return Err(format!(
            "'{}' is not a leaf ({} children)",
            args.path,
            node.children().len()
        )
        .into());
    }

    let leaf = Leaf::from(node);
    let explanation = explain(book.rules(), &leaf).map_err(ExError::from)?;

    println!("{}", node.details());
    for tier in &explanation.tiers {
        println!("{}:", tier_label(tier.tier));
        if tier.matches.is_empty() {
            println!("  (no match)");
        }
        for rule in &tier.matches {
            println!("  {} {} -> {}", rule.id(), rule.specifier(), rule.action());
        }
    }

    match explanation.decision {
        Some(decision) => println!(
            "Decision: {} by {} rule {}",
            decision.action,
            decision.tier,
            decision.rule.id()
        ),
        None => println!("Decision: none (not captured)"),
    }

    Ok(())
}

fn tier_label(tier: RuleKind) -> &'static str {
    match tier {
        RuleKind::Instance => "Instance rules",
        RuleKind::PathPattern => "Path pattern rules",
        RuleKind::ModuleType => "Module type rules",
    }
}
