//! Platform implementation of the ForumPublisher port.
//!
//! Forum and post creation happen as the configured agent user; the
//! platform's find-or-create endpoint returns the existing forum when one
//! already exists for the experience.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::client::PlatformClient;
use crate::domain::foundation::{DomainError, ExperienceId, ForumId, PostId};
use crate::ports::{ForumPublisher, PostingPolicy};

/// Forum operations against the host platform API.
pub struct PlatformForumPublisher {
    client: PlatformClient,
}

impl PlatformForumPublisher {
    pub fn new(client: PlatformClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Serialize)]
struct CreateForumRequest<'a> {
    name: &'a str,
    who_can_post: PostingPolicy,
}

#[derive(Debug, Deserialize)]
struct ForumResponse {
    id: String,
}

#[derive(Debug, Serialize)]
struct CreatePostRequest<'a> {
    title: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct PostResponse {
    id: String,
}

#[async_trait]
impl ForumPublisher for PlatformForumPublisher {
    async fn find_or_create_forum(
        &self,
        experience_id: &ExperienceId,
        name: &str,
        policy: PostingPolicy,
    ) -> Result<ForumId, DomainError> {
        let path = format!("v1/experiences/{}/forum", experience_id);

        let response = self
            .client
            .post_as_agent(&path)
            .json(&CreateForumRequest {
                name,
                who_can_post: policy,
            })
            .send()
            .await
            .map_err(|e| self.client.network_error("find-or-create forum", e))?;

        if !response.status().is_success() {
            return Err(self
                .client
                .response_error("find-or-create forum", response)
                .await);
        }

        let body: ForumResponse = response.json().await.map_err(|e| {
            self.client
                .network_error("forum response parse", e)
        })?;

        Ok(ForumId::new(body.id)?)
    }

    async fn create_post(
        &self,
        forum_id: &ForumId,
        title: &str,
        content: &str,
    ) -> Result<PostId, DomainError> {
        let path = format!("v1/forums/{}/posts", forum_id);

        let response = self
            .client
            .post_as_agent(&path)
            .json(&CreatePostRequest { title, content })
            .send()
            .await
            .map_err(|e| self.client.network_error("create post", e))?;

        if !response.status().is_success() {
            return Err(self.client.response_error("create post", response).await);
        }

        let body: PostResponse = response.json().await.map_err(|e| {
            self.client
                .network_error("post response parse", e)
        })?;

        Ok(PostId::new(body.id)?)
    }
}
