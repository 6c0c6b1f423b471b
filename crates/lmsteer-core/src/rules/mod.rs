//! Rule resolution engine
//!
//! For every leaf, at most one action is resolved from the ordered rule list:
//!
//! 1. Instance rules (exact path), then
//! 2. path-pattern rules (shell-style glob over the path), then
//! 3. module-type rules (exact type tag).
//!
//! The first tier with any match decides. Within a tier the most recently
//! authored matching rule wins. A leaf no rule matches has no decision and
//! is left out of the steering config, as are leaves resolved to Skip.
//!
//! Resolution is a pure function of (rules, leaves) and never does I/O.

pub mod explain;
pub mod matcher;
pub mod report;
pub mod resolver;

pub use explain::{explain, Explanation, TierMatches};
pub use matcher::{normalize_pattern, CompiledRules};
pub use report::{Diagnostic, DiagnosticKind, ResolutionReport, ResolutionStats};
pub use resolver::{resolve, resolve_leaf, resolve_with_report, Resolution};
