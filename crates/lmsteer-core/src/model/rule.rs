use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Opaque rule identifier, only used for provenance in output
///
/// Uniqueness is the authoring side's job; duplicates are tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(String);

impl RuleId {
    /// Generate a fresh id (UUIDv7)
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RuleId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RuleId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The three rule kinds, which double as precedence tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Specifier is an exact full path
    Instance,
    /// Specifier is a shell-style glob over the full path
    PathPattern,
    /// Specifier is an exact type tag
    ModuleType,
}

impl RuleKind {
    /// Tiers in the order they are consulted
    pub const PRECEDENCE: [RuleKind; 3] = [
        RuleKind::Instance,
        RuleKind::PathPattern,
        RuleKind::ModuleType,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Instance => "instance",
            RuleKind::PathPattern => "path_pattern",
            RuleKind::ModuleType => "module_type",
        }
    }

    /// Position in `PRECEDENCE`; lower wins
    pub fn rank(&self) -> usize {
        match self {
            RuleKind::Instance => 0,
            RuleKind::PathPattern => 1,
            RuleKind::ModuleType => 2,
        }
    }
}

impl std::fmt::Display for RuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "instance" => Ok(RuleKind::Instance),
            "path_pattern" => Ok(RuleKind::PathPattern),
            "module_type" => Ok(RuleKind::ModuleType),
            other => Err(format!(
                "unknown rule kind '{}', expected instance, path_pattern or module_type",
                other
            )),
        }
    }
}

/// What to do with a matched leaf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Capture,
    Skip,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Capture => "capture",
            Action::Skip => "skip",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "capture" => Ok(Action::Capture),
            "skip" => Ok(Action::Skip),
            other => Err(format!(
                "unknown action '{}', expected capture or skip",
                other
            )),
        }
    }
}

/// One authored rule. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    id: RuleId,
    kind: RuleKind,
    specifier: String,
    action: Action,
}

impl Rule {
    /// Create a rule with a freshly generated id
    pub fn new(kind: RuleKind, specifier: impl Into<String>, action: Action) -> Self {
        Self::with_id(RuleId::generate(), kind, specifier, action)
    }

    pub fn with_id(
        id: impl Into<RuleId>,
        kind: RuleKind,
        specifier: impl Into<String>,
        action: Action,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            specifier: specifier.into(),
            action,
        }
    }

    pub fn instance(path: impl Into<String>, action: Action) -> Self {
        Self::new(RuleKind::Instance, path, action)
    }

    pub fn path_pattern(pattern: impl Into<String>, action: Action) -> Self {
        Self::new(RuleKind::PathPattern, pattern, action)
    }

    pub fn module_type(type_tag: impl Into<String>, action: Action) -> Self {
        Self::new(RuleKind::ModuleType, type_tag, action)
    }

    pub fn id(&self) -> &RuleId {
        &self.id
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn specifier(&self) -> &str {
        &self.specifier
    }

    pub fn action(&self) -> Action {
        self.action
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} '{}' -> {}",
            self.id, self.kind, self.specifier, self.action
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_differ() {
        let a = Rule::instance("wte", Action::Capture);
        let b = Rule::instance("wte", Action::Capture);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_wire_names() {
        let rule = Rule::with_id("r1", RuleKind::PathPattern, "h.*", Action::Skip);
        let json = serde_json::to_value(&rule).unwrap();

        assert_eq!(json["id"], "r1");
        assert_eq!(json["kind"], "path_pattern");
        assert_eq!(json["specifier"], "h.*");
        assert_eq!(json["action"], "skip");
    }

    #[test]
    fn test_precedence_order_matches_rank() {
        for (i, kind) in RuleKind::PRECEDENCE.iter().enumerate() {
            assert_eq!(kind.rank(), i);
        }
    }

    #[test]
    fn test_parse_kind_and_action() {
        assert_eq!("module_type".parse::<RuleKind>(), Ok(RuleKind::ModuleType));
        assert!("type".parse::<RuleKind>().is_err());
        assert_eq!("skip".parse::<Action>(), Ok(Action::Skip));
        assert!("ignore".parse::<Action>().is_err());
    }
}
