//! Model tree file (schema_version 0)
//!
//! A serialized module hierarchy exported by the model loader, so the
//! engine can run without the model framework installed.

pub mod format_v0;
pub mod parser;

pub use format_v0::{ModelInfo, ModelTreeV0};
pub use parser::{parse_tree_file, parse_tree_str, LoadedModel};
