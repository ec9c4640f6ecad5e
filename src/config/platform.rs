//! Host platform configuration
//!
//! Settings for the platform REST API and for verifying the identity
//! tokens the platform attaches to incoming requests.

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Host platform configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PlatformConfig {
    /// Base URL of the platform REST API
    pub api_base_url: String,

    /// App API key for server-to-server calls
    pub api_key: String,

    /// Platform user the app acts as when posting to forums
    pub agent_user_id: String,

    /// Expected issuer of identity tokens
    pub token_issuer: String,

    /// Expected audience of identity tokens
    pub token_audience: String,

    /// Shared secret for verifying identity token signatures
    pub token_signing_secret: String,
}

impl PlatformConfig {
    /// Validate platform configuration
    ///
    /// In production, requires HTTPS for the API base URL.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.api_base_url.is_empty() {
            return Err(ValidationError::MissingRequired("PLATFORM_API_BASE_URL"));
        }
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("PLATFORM_API_KEY"));
        }
        if self.agent_user_id.is_empty() {
            return Err(ValidationError::MissingRequired("PLATFORM_AGENT_USER_ID"));
        }
        if self.token_issuer.is_empty() {
            return Err(ValidationError::MissingRequired("PLATFORM_TOKEN_ISSUER"));
        }
        if self.token_audience.is_empty() {
            return Err(ValidationError::MissingRequired("PLATFORM_TOKEN_AUDIENCE"));
        }
        if self.token_signing_secret.is_empty() {
            return Err(ValidationError::MissingRequired(
                "PLATFORM_TOKEN_SIGNING_SECRET",
            ));
        }

        if *environment == Environment::Production && !self.api_base_url.starts_with("https://") {
            return Err(ValidationError::PlatformUrlMustBeHttps);
        }

        Ok(())
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            api_key: String::new(),
            agent_user_id: String::new(),
            token_issuer: String::new(),
            token_audience: String::new(),
            token_signing_secret: String::new(),
        }
    }
}
