//! Rule compilation and matching
//!
//! Rules are compiled once per resolution call: glob patterns are parsed up
//! front and rules are bucketed by tier in reverse authoring order, so each
//! leaf scan is a plain first-match search.

use glob::Pattern;

use super::report::{Diagnostic, DiagnosticKind};
use crate::model::{Leaf, Rule, RuleKind};

/// Collapse runs of `*` into one
///
/// Matching runs over dotted paths with no separator semantics, so `**` and
/// `*` are equivalent; the glob parser would otherwise reject `h.**`.
pub fn normalize_pattern(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut prev_star = false;
    for c in pattern.chars() {
        if c == '*' && prev_star {
            continue;
        }
        prev_star = c == '*';
        out.push(c);
    }
    out
}

#[derive(Debug)]
struct CompiledRule<'r> {
    rule: &'r Rule,
    /// Only set for path-pattern rules whose glob parsed
    pattern: Option<Pattern>,
}

impl CompiledRule<'_> {
    fn matches(&self, leaf: &Leaf) -> bool {
        match self.rule.kind() {
            RuleKind::Instance => self.rule.specifier() == leaf.path,
            // An unparseable glob matches nothing
            RuleKind::PathPattern => self
                .pattern
                .as_ref()
                .is_some_and(|pattern| pattern.matches(&leaf.path)),
            RuleKind::ModuleType => self.rule.specifier() == leaf.type_tag,
        }
    }
}

/// A rule list prepared for matching
#[derive(Debug)]
pub struct CompiledRules<'r> {
    /// Indexed by `RuleKind::rank()`, newest rule first
    tiers: [Vec<CompiledRule<'r>>; 3],
    diagnostics: Vec<Diagnostic>,
}

impl<'r> CompiledRules<'r> {
    pub fn compile(rules: &'r [Rule]) -> Self {
        let mut tiers: [Vec<CompiledRule<'r>>; 3] = [Vec::new(), Vec::new(), Vec::new()];
        let mut diagnostics = Vec::new();

        for rule in rules.iter().rev() {
            let pattern = match rule.kind() {
                RuleKind::PathPattern => {
                    match Pattern::new(&normalize_pattern(rule.specifier())) {
                        Ok(pattern) => Some(pattern),
                        Err(err) => {
                            tracing::warn!(
                                rule_id = %rule.id(),
                                specifier = rule.specifier(),
                                error = %err,
                                "invalid glob pattern, rule will match nothing"
                            );
                            diagnostics.push(Diagnostic {
                                kind: DiagnosticKind::InvalidPattern,
                                rule_id: rule.id().clone(),
                                message: format!(
                                    "pattern '{}' is not a valid glob: {}",
                                    rule.specifier(),
                                    err.msg
                                ),
                            });
                            None
                        }
                    }
                }
                RuleKind::Instance | RuleKind::ModuleType => None,
            };
            tiers[rule.kind().rank()].push(CompiledRule { rule, pattern });
        }

        // Diagnostics in authoring order
        diagnostics.reverse();

        Self { tiers, diagnostics }
    }

    /// Newest rule of `tier` matching `leaf`, if any
    pub fn first_match(&self, tier: RuleKind, leaf: &Leaf) -> Option<&'r Rule> {
        self.tiers[tier.rank()]
            .iter()
            .find(|compiled| compiled.matches(leaf))
            .map(|compiled| compiled.rule)
    }

    /// Every rule of `tier` matching `leaf`, newest first
    pub fn all_matches(&self, tier: RuleKind, leaf: &Leaf) -> Vec<&'r Rule> {
        self.tiers[tier.rank()]
            .iter()
            .filter(|compiled| compiled.matches(leaf))
            .map(|compiled| compiled.rule)
            .collect()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.tiers.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
