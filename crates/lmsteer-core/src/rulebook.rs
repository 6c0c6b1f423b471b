//! Append-only rule book and its immutable snapshots
//!
//! Authoring only ever appends: there is no edit, delete or undo. Every
//! append bumps the version, and resolution runs on a [`RuleSnapshot`]
//! taken at a given version, so a result can always be traced back to the
//! exact rule list that produced it.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::digest::compute_rules_digest;
use crate::errors::Result;
use crate::model::{Action, Leaf, Rule, RuleId, RuleKind, SteeringConfig};
use crate::rules::{self, ResolutionReport};

#[derive(Debug, Clone, Default)]
pub struct RuleBook {
    rules: Vec<Rule>,
    version: u64,
}

impl RuleBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Book seeded with `rules` in authoring order
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        let version = rules.len() as u64;
        Self { rules, version }
    }

    /// Append a new rule with a fresh id and return that id
    pub fn add(&mut self, kind: RuleKind, specifier: impl Into<String>, action: Action) -> RuleId {
        let rule = Rule::new(kind, specifier, action);
        let id = rule.id().clone();
        self.push(rule);
        id
    }

    /// Append an already-built rule; its id is kept as is
    pub fn push(&mut self, rule: Rule) {
        tracing::debug!(
            rule_id = %rule.id(),
            kind = rule.kind().as_str(),
            specifier = rule.specifier(),
            action = rule.action().as_str(),
            "rule appended"
        );
        self.rules.push(rule);
        self.version += 1;
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn snapshot(&self) -> RuleSnapshot {
        RuleSnapshot {
            version: self.version,
            taken_at: Utc::now(),
            rules: self.rules.clone(),
        }
    }
}

/// The rule list as of one rule book version
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleSnapshot {
    pub version: u64,
    pub taken_at: DateTime<Utc>,
    pub rules: Vec<Rule>,
}

impl RuleSnapshot {
    /// Digest of the ordered rules; `taken_at` and `version` are excluded
    ///
    /// # Errors
    ///
    /// Returns `SteerError::Serialization` if JSON encoding fails.
    pub fn digest(&self) -> Result<String> {
        compute_rules_digest(&self.rules)
    }

    /// # Errors
    ///
    /// See [`rules::resolve`].
    pub fn resolve(&self, leaves: &[Leaf]) -> Result<SteeringConfig> {
        rules::resolve(&self.rules, leaves)
    }

    /// # Errors
    ///
    /// See [`rules::resolve_with_report`].
    pub fn resolve_with_report(&self, leaves: &[Leaf]) -> Result<ResolutionReport> {
        rules::resolve_with_report(&self.rules, leaves)
    }
}
