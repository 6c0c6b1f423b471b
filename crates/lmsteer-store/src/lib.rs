//! LMSteer Store - model tree and rules files, steering config persistence
//!
//! Provides:
//! - Model tree format v0 parser producing a validated core tree
//! - Rules file format v0 parser producing a `RuleBook`
//! - Steering config save/load with atomic writes

pub mod atomic;
pub mod config_io;
pub mod errors;
pub mod rules_file;
pub mod tree;

// Re-export key types
pub use config_io::{
    config_file_name, load_steering_config, save_steering_config, SaveOutcome, DEFAULT_BASE_PATH,
};
pub use errors::Result;
pub use rules_file::parse_rules_file;
pub use tree::{parse_tree_file, LoadedModel};
