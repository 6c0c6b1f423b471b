//! Canonical schema constants for structured logging
//!
//! These constants keep field names identical across the core, store and CLI
//! crates so log consumers can filter on them.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_MODEL_NAME: &str = "model_name";
pub const FIELD_RULE_ID: &str = "rule_id";

// Collection sizes
pub const FIELD_LEAF_COUNT: &str = "leaf_count";
pub const FIELD_RULE_COUNT: &str = "rule_count";
pub const FIELD_CAPTURE_COUNT: &str = "capture_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
