//! Shared HTTP client for the host platform API.
//!
//! Forum and notification calls are performed *as* a dedicated agent user
//! the platform provisions for the app. That agent identity is injected
//! through [`PlatformApiConfig`] rather than read from ambient process
//! state, so tests and alternate deployments can substitute their own.

use secrecy::{ExposeSecret, SecretString};

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

/// Host platform API configuration.
#[derive(Clone)]
pub struct PlatformApiConfig {
    /// Base URL for the platform API.
    api_base_url: String,

    /// App API key used to authenticate server-to-server calls.
    api_key: SecretString,

    /// Agent user the app acts as when creating forums, posts, and
    /// notifications.
    agent_user_id: UserId,
}

impl PlatformApiConfig {
    /// Creates a new platform API configuration.
    pub fn new(
        api_base_url: impl Into<String>,
        api_key: impl Into<String>,
        agent_user_id: UserId,
    ) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            api_key: SecretString::new(api_key.into()),
            agent_user_id,
        }
    }

    /// Overrides the base URL (for testing against a local stub).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

/// Thin wrapper around `reqwest::Client` adding platform auth headers.
#[derive(Clone)]
pub struct PlatformClient {
    config: PlatformApiConfig,
    http_client: reqwest::Client,
}

impl PlatformClient {
    /// Creates a client with the given configuration.
    pub fn new(config: PlatformApiConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// Builds a URL under the configured base.
    pub(crate) fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Starts a GET request with auth headers applied.
    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.apply_headers(self.http_client.get(self.url(path)))
    }

    /// Starts a POST request with auth headers applied, acting as the
    /// configured agent user.
    pub(crate) fn post_as_agent(&self, path: &str) -> reqwest::RequestBuilder {
        self.apply_headers(self.http_client.post(self.url(path)))
            .header("X-On-Behalf-Of", self.config.agent_user_id.as_str())
    }

    fn apply_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.bearer_auth(self.config.api_key.expose_secret())
    }

    /// Maps a transport-level failure into a platform API error.
    pub(crate) fn network_error(&self, context: &str, err: reqwest::Error) -> DomainError {
        DomainError::new(
            ErrorCode::PlatformApiError,
            format!("{}: {}", context, err),
        )
    }

    /// Maps a non-success response into a platform API error.
    pub(crate) async fn response_error(
        &self,
        context: &str,
        response: reqwest::Response,
    ) -> DomainError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        tracing::error!(%status, error = %body, "{} failed", context);
        DomainError::new(
            ErrorCode::PlatformApiError,
            format!("{}: platform returned {}", context, status),
        )
    }
}
