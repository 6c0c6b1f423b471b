//! LMSteer Core - module tree model and steering rule resolution
//!
//! This crate provides:
//! - An immutable module tree built from any `ModuleSource`, with dotted
//!   full paths computed at construction
//! - Deterministic traversal (pre-order walk, path lookup, leaf set)
//! - The three-tier rule resolution engine producing a `SteeringConfig`
//! - An append-only `RuleBook` with versioned, digestible snapshots
//! - The error and logging facilities shared by the store and CLI crates
//!
//! Everything here is pure computation; file formats and persistence live
//! in `lmsteer-store`.

pub mod digest;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rulebook;
pub mod rules;
pub mod traversal;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, Result, SteerError};
pub use model::{
    build_tree, Action, CaptureRecord, Leaf, ModuleSource, ModuleSpec, Node, NodeDetails, Rule,
    RuleId, RuleKind, SteeringConfig,
};
pub use rulebook::{RuleBook, RuleSnapshot};
pub use rules::{explain, resolve, resolve_leaf, resolve_with_report, ResolutionReport};
pub use traversal::{find, leaf_set, walk};
