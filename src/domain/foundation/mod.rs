//! Foundation types shared across the domain.

mod auth;
mod errors;
mod ids;
mod timestamp;

pub use auth::{AuthError, VerifiedIdentity};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ExperienceId, ForumId, PostId, QuestionId, UserId};
pub use timestamp::Timestamp;
