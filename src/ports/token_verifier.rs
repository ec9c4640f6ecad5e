//! Identity token verification port.
//!
//! The host platform attaches an opaque identity token to every request it
//! proxies to the app. This port verifies that token and yields the
//! caller's platform user id. It is provider-agnostic: the production
//! adapter decodes a platform JWT, tests use a mock.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, VerifiedIdentity};

/// Verifies identity tokens and extracts the caller's identity.
///
/// # Contract
///
/// Implementations must:
/// - Validate the token signature and standard claims (issuer, audience,
///   expiry)
/// - Return `AuthError::InvalidToken` for malformed or bad-signature
///   tokens and `AuthError::TokenExpired` for expired ones
/// - Return `AuthError::ServiceUnavailable` for transient backend errors
/// - Never panic on attacker-controlled input
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verifies a raw identity token (without any `Bearer ` prefix).
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, AuthError>;
}
