use std::collections::HashSet;
use std::time::Instant;

use serde::Serialize;

use super::matcher::CompiledRules;
use super::report::{ResolutionReport, ResolutionStats};
use crate::errors::{Result, SteerError};
use crate::model::{Action, CaptureRecord, Leaf, Rule, RuleKind, SteeringConfig};
use crate::{log_op_end, log_op_error, log_op_start};

/// The decision for one leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution<'r> {
    pub action: Action,
    /// Tier of the winning rule
    pub tier: RuleKind,
    pub rule: &'r Rule,
}

/// Resolve every leaf and return the steering config
///
/// Only leaves resolved to Capture appear in the result, in the order they
/// appear in `leaves`.
///
/// # Errors
///
/// Returns `MissingTypeTag` if any leaf has an empty type tag, or
/// `DuplicateLeafPath` if two leaves share a path. Nothing is resolved in
/// either case. Data-driven conditions (bad globs, empty inputs)
/// never fail.
pub fn resolve(rules: &[Rule], leaves: &[Leaf]) -> Result<SteeringConfig> {
    resolve_with_report(rules, leaves).map(|report| report.config)
}

/// Like [`resolve`], plus decision counts and diagnostics
///
/// # Errors
///
/// Same as [`resolve`].
pub fn resolve_with_report(rules: &[Rule], leaves: &[Leaf]) -> Result<ResolutionReport> {
    log_op_start!(
        "resolve",
        leaf_count = leaves.len(),
        rule_count = rules.len()
    );
    let start = Instant::now();

    let report = resolve_impl(rules, leaves).map_err(|e| {
        log_op_error!(
            "resolve",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "resolve",
        duration_ms = start.elapsed().as_millis() as u64,
        capture_count = report.stats.captured,
        undecided_count = report.stats.undecided
    );

    Ok(report)
}

fn resolve_impl(rules: &[Rule], leaves: &[Leaf]) -> Result<ResolutionReport> {
    check_leaves(leaves)?;

    let compiled = CompiledRules::compile(rules);
    let mut config = SteeringConfig::new();
    let mut stats = ResolutionStats {
        leaf_count: leaves.len(),
        rule_count: rules.len(),
        ..ResolutionStats::default()
    };

    for leaf in leaves {
        match decide(&compiled, leaf) {
            Some(resolution) => {
                stats.decided_by_tier[resolution.tier.rank()] += 1;
                match resolution.action {
                    Action::Capture => {
                        stats.captured += 1;
                        config.push(
                            leaf.path.clone(),
                            CaptureRecord::from_rule(&leaf.type_tag, resolution.rule),
                        );
                    }
                    Action::Skip => stats.skipped += 1,
                }
            }
            None => stats.undecided += 1,
        }
    }

    Ok(ResolutionReport {
        config,
        stats,
        diagnostics: compiled.diagnostics().to_vec(),
    })
}

/// Resolve a single leaf against `rules`
///
/// `Ok(None)` means no rule in any tier matched.
///
/// # Errors
///
/// Returns `MissingTypeTag` if the leaf has an empty type tag.
pub fn resolve_leaf<'r>(rules: &'r [Rule], leaf: &Leaf) -> Result<Option<Resolution<'r>>> {
    check_leaves(std::slice::from_ref(leaf))?;
    let compiled = CompiledRules::compile(rules);
    Ok(decide(&compiled, leaf))
}

/// First tier with a match decides; within it the newest rule wins
pub(crate) fn decide<'r>(compiled: &CompiledRules<'r>, leaf: &Leaf) -> Option<Resolution<'r>> {
    RuleKind::PRECEDENCE.iter().find_map(|&tier| {
        compiled.first_match(tier, leaf).map(|rule| Resolution {
            action: rule.action(),
            tier,
            rule,
        })
    })
}

/// Every leaf needs a type tag and a path no other leaf has
fn check_leaves(leaves: &[Leaf]) -> Result<()> {
    let mut seen = HashSet::with_capacity(leaves.len());
    for leaf in leaves {
        if leaf.type_tag.is_empty() {
            return Err(SteerError::MissingTypeTag {
                path: leaf.path.clone(),
            });
        }
        if !seen.insert(leaf.path.as_str()) {
            return Err(SteerError::DuplicateLeafPath {
                path: leaf.path.clone(),
            });
        }
    }
    Ok(())
}
