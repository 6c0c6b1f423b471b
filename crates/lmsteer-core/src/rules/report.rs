use serde::Serialize;

use crate::model::{RuleId, RuleKind, SteeringConfig};

/// Non-fatal findings surfaced alongside a resolution result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A path-pattern rule whose glob does not parse; it matches nothing
    InvalidPattern,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub rule_id: RuleId,
    pub message: String,
}

/// Decision counts for one resolution call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolutionStats {
    pub leaf_count: usize,
    pub rule_count: usize,
    pub captured: usize,
    pub skipped: usize,
    pub undecided: usize,
    /// Decided leaves per winning tier, indexed by `RuleKind::rank()`
    pub decided_by_tier: [usize; 3],
}

impl ResolutionStats {
    pub fn decided_by(&self, tier: RuleKind) -> usize {
        self.decided_by_tier[tier.rank()]
    }
}

/// Everything a resolution call produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionReport {
    pub config: SteeringConfig,
    pub stats: ResolutionStats,
    pub diagnostics: Vec<Diagnostic>,
}

impl ResolutionReport {
    /// One-line summary for status output
    pub fn summary(&self) -> String {
        format!(
            "{} leaf modules marked for capture based on {} rules ({} skipped, {} undecided)",
            self.stats.captured, self.stats.rule_count, self.stats.skipped, self.stats.undecided
        )
    }
}
