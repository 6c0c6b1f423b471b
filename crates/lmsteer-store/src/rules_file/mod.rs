//! Rules file (schema_version 0)
//!
//! An ordered list of authored rules. File order is authoring order, so
//! later entries win ties within a tier.

pub mod format_v0;
pub mod parser;

pub use format_v0::{RuleEntry, RulesFileV0};
pub use parser::{parse_rules_file, parse_rules_str, rules_to_yaml};
