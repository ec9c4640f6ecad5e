//! Platform identity token verification.
//!
//! The host platform signs a short-lived JWT for each embedded-app request.
//! This adapter implements the `TokenVerifier` port by decoding that JWT
//! locally with the app's signing secret and validating issuer, audience,
//! and expiry. The `sub` claim carries the platform user id.

use async_trait::async_trait;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::domain::foundation::{AuthError, UserId, VerifiedIdentity};
use crate::ports::TokenVerifier;

/// Configuration for platform token verification.
#[derive(Clone)]
pub struct TokenVerifierConfig {
    /// Expected issuer claim.
    pub issuer: String,

    /// Expected audience claim (the app id on the platform).
    pub audience: String,

    /// Shared signing secret issued to the app by the platform.
    pub signing_secret: SecretString,
}

impl TokenVerifierConfig {
    pub fn new(
        issuer: impl Into<String>,
        audience: impl Into<String>,
        signing_secret: impl Into<String>,
    ) -> Self {
        Self {
            issuer: issuer.into(),
            audience: audience.into(),
            signing_secret: SecretString::new(signing_secret.into()),
        }
    }
}

/// Claims we read from a platform identity token.
#[derive(Debug, Deserialize)]
struct PlatformClaims {
    /// Subject - the platform user id.
    sub: String,
}

/// JWT-based implementation of the `TokenVerifier` port.
pub struct PlatformTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl PlatformTokenVerifier {
    /// Creates a verifier for the given configuration.
    pub fn new(config: TokenVerifierConfig) -> Self {
        let decoding_key =
            DecodingKey::from_secret(config.signing_secret.expose_secret().as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;

        Self {
            decoding_key,
            validation,
        }
    }
}

#[async_trait]
impl TokenVerifier for PlatformTokenVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, AuthError> {
        let data = decode::<PlatformClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => {
                    tracing::debug!(error = %e, "identity token rejected");
                    AuthError::InvalidToken
                }
            })?;

        let user_id = UserId::new(data.claims.sub).map_err(|_| AuthError::InvalidToken)?;

        Ok(VerifiedIdentity::new(user_id))
    }
}
