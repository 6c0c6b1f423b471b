//! Structured logging facility for LMSteer
//!
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! Resolution itself never prints; everything it wants a user to see is
//! returned in a `ResolutionReport` or emitted as a `tracing` event.
//!
//! # Usage
//!
//! ```rust
//! use lmsteer_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use lmsteer_core_types::schema;
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
