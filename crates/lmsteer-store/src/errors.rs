//! Error handling for lmsteer-store
//!
//! Wraps lmsteer-core ExError with store-specific helpers

use lmsteer_core::errors::{ExError, ExErrorKind};
use lmsteer_core::SteerError;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create a model tree file validation error
pub fn tree_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("tree_parse")
        .with_message(reason.to_string())
}

/// Wrap a tree construction failure from the core
pub fn tree_construction(err: SteerError) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("tree_parse")
        .with_message("Model tree is not a valid module tree")
        .with_source(err.into())
}

/// Create a rules file validation error
pub fn rules_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("rules_parse")
        .with_message(reason.to_string())
}

/// Create an unsupported schema version error
pub fn unsupported_schema(operation: &str, found: u32) -> ExError {
    ExError::new(ExErrorKind::UnsupportedSchema)
        .with_op(operation.to_string())
        .with_message(format!(
            "Unsupported schema_version: {}. Expected 0",
            found
        ))
}

/// Create a serialization error
pub fn serialization_error(operation: &str, err: impl std::fmt::Display) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
