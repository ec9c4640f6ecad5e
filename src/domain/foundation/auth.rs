//! Identity types for verified callers.
//!
//! The host platform attaches an opaque identity token to every request.
//! These types represent the outcome of verifying that token. They have no
//! provider dependencies: the `TokenVerifier` port populates them, whether
//! the implementation decodes a platform JWT or is a test mock.

use super::UserId;
use thiserror::Error;

/// A caller whose identity token was successfully verified.
///
/// Holds only what the service actually uses: the platform user id.
/// Questions stay anonymous; the identity is used for authorization,
/// never stored alongside a question.
#[derive(Debug, Clone)]
pub struct VerifiedIdentity {
    /// Platform user id extracted from the token.
    pub user_id: UserId,
}

impl VerifiedIdentity {
    /// Creates a verified identity for the given platform user.
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

/// Errors from identity token verification.
///
/// Domain-centric: they describe what went wrong from the application's
/// perspective, not the platform's.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token was valid once but has expired.
    #[error("Token expired")]
    TokenExpired,

    /// The verification backend is unreachable or misconfigured.
    #[error("Identity service unavailable: {0}")]
    ServiceUnavailable(String),
}
