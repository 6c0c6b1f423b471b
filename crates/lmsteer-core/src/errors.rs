use lmsteer_core_types::RequestId;
use thiserror::Error;

/// Result type alias using SteerError
pub type Result<T> = std::result::Result<T, SteerError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers (CLI, tests, external
/// tooling) can match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Tree construction
    InvalidInput,
    InvalidNodeName,
    DuplicateChild,
    MissingTypeTag,
    NotFound,

    // Input files
    UnsupportedSchema,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidNodeName => "ERR_INVALID_NODE_NAME",
            ExErrorKind::DuplicateChild => "ERR_DUPLICATE_CHILD",
            ExErrorKind::MissingTypeTag => "ERR_MISSING_TYPE_TAG",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::UnsupportedSchema => "ERR_UNSUPPORTED_SCHEMA",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the context that
/// helps a user locate the problem (which node path, which rule).
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    node_path: Option<String>,
    rule_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            node_path: None,
            rule_id: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add node path context
    pub fn with_node_path(mut self, path: impl Into<String>) -> Self {
        self.node_path = Some(path.into());
        self
    }

    /// Add rule id context
    pub fn with_rule_id(mut self, id: impl Into<String>) -> Self {
        self.rule_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn node_path(&self) -> Option<&str> {
        self.node_path.as_deref()
    }

    pub fn rule_id(&self) -> Option<&str> {
        self.rule_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.node_path {
            // The root's path is the empty string
            let shown = if path.is_empty() { "(root)" } else { path };
            write!(f, " (path: {})", shown)?;
        }
        if let Some(rule_id) = &self.rule_id {
            write!(f, " (rule_id: {})", rule_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, "; caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for tree construction and resolution
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SteerError {
    // ===== Tree Construction Errors =====
    /// A non-root node has an empty name
    #[error("Node under '{parent_path}' has an empty name")]
    EmptyNodeName { parent_path: String },

    /// A node name would break dotted path addressing
    #[error("Node name '{name}' under '{parent_path}' contains '.'")]
    InvalidNodeName { parent_path: String, name: String },

    /// Two siblings share a name, so their paths would collide
    #[error("Duplicate child '{name}' under '{parent_path}'")]
    DuplicateChildName { parent_path: String, name: String },

    /// A node (or a leaf handed to the engine) has no type tag
    #[error("Node '{path}' has no type tag")]
    MissingTypeTag { path: String },

    /// Two leaves handed to the engine share a path
    #[error("Leaf path '{path}' appears more than once")]
    DuplicateLeafPath { path: String },

    // ===== Lookup Errors =====
    /// No node exists at the given path
    #[error("Node not found: {path}")]
    NodeNotFound { path: String },

    // ===== Generic Errors =====
    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Conversion from SteerError to the canonical ExError
impl From<SteerError> for ExError {
    fn from(err: SteerError) -> Self {
        match err {
            SteerError::EmptyNodeName { parent_path } => {
                ExError::new(ExErrorKind::InvalidNodeName)
                    .with_op("build_tree")
                    .with_node_path(parent_path)
                    .with_message("Child node has an empty name")
            }

            SteerError::InvalidNodeName { parent_path, name } => {
                ExError::new(ExErrorKind::InvalidNodeName)
                    .with_op("build_tree")
                    .with_node_path(parent_path)
                    .with_message(format!("Child name '{}' contains '.'", name))
            }

            SteerError::DuplicateChildName { parent_path, name } => {
                ExError::new(ExErrorKind::DuplicateChild)
                    .with_op("build_tree")
                    .with_node_path(parent_path)
                    .with_message(format!("Duplicate child name '{}'", name))
            }

            SteerError::MissingTypeTag { path } => ExError::new(ExErrorKind::MissingTypeTag)
                .with_node_path(path)
                .with_message("Node has no type tag"),

            SteerError::DuplicateLeafPath { path } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("resolve")
                .with_node_path(path)
                .with_message("Leaf path appears more than once"),

            SteerError::NodeNotFound { path } => ExError::new(ExErrorKind::NotFound)
                .with_node_path(path)
                .with_message("Node not found"),

            SteerError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to SteerError
impl From<serde_json::Error> for SteerError {
    fn from(err: serde_json::Error) -> Self {
        SteerError::Serialization {
            message: err.to_string(),
        }
    }
}
