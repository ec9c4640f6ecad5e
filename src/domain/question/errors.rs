//! Question-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, QuestionId, ValidationError};

/// Errors produced by question operations.
///
/// This is the single discriminated error type every operation returns;
/// the HTTP adapter maps it to status codes in one place.
#[derive(Debug, Clone)]
pub enum QuestionError {
    /// No question with the given id exists.
    NotFound(QuestionId),
    /// Caller lacks admin access to the question's experience.
    Forbidden,
    /// Input failed validation.
    ValidationFailed { field: String, message: String },
    /// A host platform API call failed.
    Upstream(String),
    /// The question store failed.
    Infrastructure(String),
}

impl QuestionError {
    pub fn not_found(id: QuestionId) -> Self {
        QuestionError::NotFound(id)
    }

    pub fn forbidden() -> Self {
        QuestionError::Forbidden
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        QuestionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        QuestionError::Upstream(message.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        QuestionError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            QuestionError::NotFound(_) => ErrorCode::QuestionNotFound,
            QuestionError::Forbidden => ErrorCode::Forbidden,
            QuestionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            QuestionError::Upstream(_) => ErrorCode::PlatformApiError,
            QuestionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            QuestionError::NotFound(id) => format!("Question not found: {}", id),
            QuestionError::Forbidden => "Not authorized".to_string(),
            QuestionError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            QuestionError::Upstream(msg) => format!("Platform error: {}", msg),
            QuestionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for QuestionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for QuestionError {}

impl From<ValidationError> for QuestionError {
    fn from(err: ValidationError) -> Self {
        QuestionError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for QuestionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::QuestionNotFound => {
                // Repositories report missing rows with this code; the id
                // is carried in the message.
                QuestionError::Infrastructure(err.to_string())
            }
            ErrorCode::Forbidden | ErrorCode::Unauthorized => QuestionError::Forbidden,
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::LengthOutOfRange
            | ErrorCode::InvalidFormat => QuestionError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            ErrorCode::PlatformApiError | ErrorCode::ForumNotFound => {
                QuestionError::Upstream(err.message)
            }
            _ => QuestionError::Infrastructure(err.to_string()),
        }
    }
}
