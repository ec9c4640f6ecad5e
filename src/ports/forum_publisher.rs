//! Forum publishing port.
//!
//! Wraps the host platform's forum feature: find-or-create a forum for an
//! experience, then create posts in it. Both calls may fail transiently;
//! this service does not retry - a failure aborts the enclosing operation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ExperienceId, ForumId, PostId};

/// Who may create posts in a forum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostingPolicy {
    /// Only experience admins may post.
    Admins,
    /// Any experience member may post.
    Everyone,
}

/// Port for creating forums and forum posts on the host platform.
#[async_trait]
pub trait ForumPublisher: Send + Sync {
    /// Finds the experience's forum, creating it on first use.
    ///
    /// Idempotent from the caller's perspective: repeated calls for the
    /// same experience return the same forum id.
    async fn find_or_create_forum(
        &self,
        experience_id: &ExperienceId,
        name: &str,
        policy: PostingPolicy,
    ) -> Result<ForumId, DomainError>;

    /// Creates a post with the given title and content.
    async fn create_post(
        &self,
        forum_id: &ForumId,
        title: &str,
        content: &str,
    ) -> Result<PostId, DomainError>;
}
