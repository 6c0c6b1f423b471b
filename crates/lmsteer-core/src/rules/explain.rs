use serde::Serialize;

use super::matcher::CompiledRules;
use super::resolver::{decide, Resolution};
use crate::errors::{Result, SteerError};
use crate::model::{Leaf, Rule, RuleKind};

/// Matching rules of one tier, newest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierMatches<'r> {
    pub tier: RuleKind,
    pub matches: Vec<&'r Rule>,
}

/// Why a leaf was (or was not) decided the way it was
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Explanation<'r> {
    pub leaf: Leaf,
    /// One entry per tier in precedence order, including empty tiers
    pub tiers: Vec<TierMatches<'r>>,
    pub decision: Option<Resolution<'r>>,
}

impl<'r> Explanation<'r> {
    /// Rules that matched but lost to the decision
    pub fn shadowed(&self) -> Vec<&'r Rule> {
        let winner = self.decision.map(|d| d.rule);
        self.tiers
            .iter()
            .flat_map(|t| t.matches.iter().copied())
            .filter(|rule| !winner.is_some_and(|w| std::ptr::eq(w, *rule)))
            .collect()
    }
}

/// Every rule matching `leaf`, grouped by tier, plus the final decision
///
/// # Errors
///
/// Returns `MissingTypeTag` if the leaf has an empty type tag.
pub fn explain<'r>(rules: &'r [Rule], leaf: &Leaf) -> Result<Explanation<'r>> {
    if leaf.type_tag.is_empty() {
        return Err(SteerError::MissingTypeTag {
            path: leaf.path.clone(),
        });
    }

    let compiled = CompiledRules::compile(rules);
    let tiers = RuleKind::PRECEDENCE
        .iter()
        .map(|&tier| TierMatches {
            tier,
            matches: compiled.all_matches(tier, leaf),
        })
        .collect();

    Ok(Explanation {
        leaf: leaf.clone(),
        tiers,
        decision: decide(&compiled, leaf),
    })
}
