//! Platform implementation of the AccessGateway port.

use async_trait::async_trait;
use serde::Deserialize;

use super::client::PlatformClient;
use crate::domain::foundation::{DomainError, ExperienceId, UserId};
use crate::ports::{AccessGateway, AccessLevel};

/// Access-level lookups against the host platform API.
pub struct PlatformAccessGateway {
    client: PlatformClient,
}

impl PlatformAccessGateway {
    pub fn new(client: PlatformClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct AccessResponse {
    access_level: AccessLevel,
}

#[async_trait]
impl AccessGateway for PlatformAccessGateway {
    async fn check_access(
        &self,
        user_id: &UserId,
        experience_id: &ExperienceId,
    ) -> Result<AccessLevel, DomainError> {
        let path = format!("v1/experiences/{}/access/{}", experience_id, user_id);

        let response = self
            .client
            .get(&path)
            .send()
            .await
            .map_err(|e| self.client.network_error("access check", e))?;

        // Unknown user or experience is plain "no access", not an error.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(AccessLevel::None);
        }
        if !response.status().is_success() {
            return Err(self.client.response_error("access check", response).await);
        }

        let body: AccessResponse = response.json().await.map_err(|e| {
            self.client
                .network_error("access check response parse", e)
        })?;

        Ok(body.access_level)
    }
}
