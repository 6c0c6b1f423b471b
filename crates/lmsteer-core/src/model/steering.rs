//! The steering configuration handed to the persistence side
//!
//! Entries keep leaf document order, and they are serialized in that order
//! as a flat JSON object keyed by leaf path.

use std::collections::HashSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::rule::{Rule, RuleId, RuleKind};

/// Action recorded for every captured leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SteeringAction {
    #[serde(rename = "capture_leaf_activations")]
    CaptureLeafActivations,
}

/// Provenance-annotated record for one captured leaf
///
/// Serialized keys (`module_type`, `source_rule_type`) are kept compatible
/// with existing steering config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureRecord {
    pub action: SteeringAction,
    #[serde(rename = "module_type")]
    pub type_tag: String,
    pub source_rule_id: RuleId,
    #[serde(rename = "source_rule_type")]
    pub source_rule_kind: RuleKind,
    pub source_rule_specifier: String,
}

impl CaptureRecord {
    /// Record for a leaf of type `type_tag` captured by `rule`
    pub fn from_rule(type_tag: impl Into<String>, rule: &Rule) -> Self {
        Self {
            action: SteeringAction::CaptureLeafActivations,
            type_tag: type_tag.into(),
            source_rule_id: rule.id().clone(),
            source_rule_kind: rule.kind(),
            source_rule_specifier: rule.specifier().to_string(),
        }
    }
}

/// Mapping from captured leaf path to its record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SteeringConfig {
    entries: Vec<(String, CaptureRecord)>,
}

impl SteeringConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry; callers guarantee paths are unique
    pub(crate) fn push(&mut self, path: String, record: CaptureRecord) {
        self.entries.push((path, record));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&CaptureRecord> {
        self.entries
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, record)| record)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Entries in leaf document order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CaptureRecord)> {
        self.entries.iter().map(|(p, r)| (p.as_str(), r))
    }

    /// Captured leaf paths in leaf document order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(p, _)| p.as_str())
    }
}

impl Serialize for SteeringConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (path, record) in &self.entries {
            map.serialize_entry(path, record)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SteeringConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ConfigVisitor;

        impl<'de> Visitor<'de> for ConfigVisitor {
            type Value = SteeringConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map from leaf path to capture record")
            }

            fn visit_map<M>(self, mut map: M) -> Result<SteeringConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut seen = HashSet::new();
                let mut config = SteeringConfig::new();
                while let Some((path, record)) = map.next_entry::<String, CaptureRecord>()? {
                    if !seen.insert(path.clone()) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate leaf path '{}'",
                            path
                        )));
                    }
                    config.push(path, record);
                }
                Ok(config)
            }
        }

        deserializer.deserialize_map(ConfigVisitor)
    }
}
