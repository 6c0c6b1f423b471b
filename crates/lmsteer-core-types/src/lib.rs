//! Core types shared across LMSteer crates
//!
//! This crate provides foundational types used by the error and logging
//! facilities and by the CLI boundary:
//!
//! - **Correlation types**: RequestId, RequestContext
//! - **Schema constants**: Canonical structured-log field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{RequestContext, RequestId};
