//! Platform implementation of the Notifier port.

use async_trait::async_trait;
use serde::Serialize;

use super::client::PlatformClient;
use crate::domain::foundation::{DomainError, ExperienceId};
use crate::ports::Notifier;

/// Notifications delivered through the host platform API.
pub struct PlatformNotifier {
    client: PlatformClient,
}

impl PlatformNotifier {
    pub fn new(client: PlatformClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Serialize)]
struct NotificationRequest<'a> {
    title: &'a str,
    content: &'a str,
}

#[async_trait]
impl Notifier for PlatformNotifier {
    async fn notify(
        &self,
        experience_id: &ExperienceId,
        title: &str,
        content: &str,
    ) -> Result<(), DomainError> {
        let path = format!("v1/experiences/{}/notifications", experience_id);

        let response = self
            .client
            .post_as_agent(&path)
            .json(&NotificationRequest { title, content })
            .send()
            .await
            .map_err(|e| self.client.network_error("send notification", e))?;

        if !response.status().is_success() {
            return Err(self
                .client
                .response_error("send notification", response)
                .await);
        }

        Ok(())
    }
}
