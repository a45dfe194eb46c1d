//! Error types for the form engine

use thiserror::Error;

use crate::domain::services::validation::ValidationErrors;
use crate::domain::value_objects::{FieldId, FieldType};

/// Form engine error type
///
/// Builder and preview operations are atomic: when one of these is
/// returned the state it was called on is exactly as it was before.
#[derive(Error, Debug)]
pub enum FormsError {
    /// Caller input has the wrong shape (missing name, schema or values)
    #[error("validation error: {0}")]
    Validation(String),

    /// Unknown schema id
    #[error("not found: {0}")]
    NotFound(String),

    /// Stored schema document is structurally invalid
    #[error("malformed schema: {0}")]
    MalformedSchema(String),

    /// Index outside the field list
    #[error("index {index} out of range for list of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// Option removal would leave a choice field with no options
    #[error("field {field_id} must keep at least one option")]
    MinimumOptionsViolation { field_id: FieldId },

    /// Option editing on a field type without options
    #[error("{field_type} fields do not carry options")]
    OptionsNotSupported { field_type: FieldType },

    /// Submit attempted while field-level errors exist
    #[error("form has {} invalid field(s)", .0.len())]
    InvalidForm(ValidationErrors),

    /// A submission for this session is still outstanding
    #[error("a submission is already in flight")]
    SubmissionInFlight,

    /// Preview operation requested while the builder is in design mode
    #[error("preview mode is not active")]
    PreviewInactive,

    /// Store or sink unavailable
    #[error("storage error: {0}")]
    Storage(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl FormsError {
    /// Transport failures are reported once and may succeed on a manual retry
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<std::io::Error> for FormsError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type for the form engine
pub type Result<T> = std::result::Result<T, FormsError>;
