//! PushToForumHandler - share a question in the experience's forum.
//!
//! Distinct from approval: pushing neither requires nor sets an answer or
//! status. An admin can share any question, pending or approved.

use std::sync::Arc;

use super::guard::ensure_admin;
use super::{FORUM_NAME, POST_TITLE};
use crate::domain::foundation::{QuestionId, UserId};
use crate::domain::question::{Question, QuestionError};
use crate::ports::{AccessGateway, ForumPublisher, PostingPolicy, QuestionRepository};

/// Command to push a question to the experience forum.
#[derive(Debug, Clone)]
pub struct PushToForumCommand {
    pub user_id: UserId,
    pub question_id: QuestionId,
    pub question_text: String,
}

/// Handler for pushing questions to the forum.
///
/// Idempotent: a question whose `pushed_to_forum` flag is already set is
/// left untouched and no duplicate post is created.
pub struct PushToForumHandler {
    repository: Arc<dyn QuestionRepository>,
    access_gateway: Arc<dyn AccessGateway>,
    forum_publisher: Arc<dyn ForumPublisher>,
}

impl PushToForumHandler {
    pub fn new(
        repository: Arc<dyn QuestionRepository>,
        access_gateway: Arc<dyn AccessGateway>,
        forum_publisher: Arc<dyn ForumPublisher>,
    ) -> Self {
        Self {
            repository,
            access_gateway,
            forum_publisher,
        }
    }

    pub async fn handle(&self, cmd: PushToForumCommand) -> Result<Question, QuestionError> {
        let mut question = self
            .repository
            .find_by_id(&cmd.question_id)
            .await?
            .ok_or_else(|| QuestionError::not_found(cmd.question_id))?;

        ensure_admin(
            self.access_gateway.as_ref(),
            &cmd.user_id,
            question.experience_id(),
        )
        .await?;

        if cmd.question_text.trim().is_empty() {
            return Err(QuestionError::validation(
                "question_text",
                "question text is required",
            ));
        }

        if question.is_pushed_to_forum() {
            tracing::debug!(
                question_id = %question.id(),
                "question already pushed to forum, skipping"
            );
            return Ok(question);
        }

        let forum_id = self
            .forum_publisher
            .find_or_create_forum(question.experience_id(), FORUM_NAME, PostingPolicy::Admins)
            .await?;

        let content = format!("\"{}\"", cmd.question_text);
        let post_id = self
            .forum_publisher
            .create_post(&forum_id, POST_TITLE, &content)
            .await?;

        question.record_forum_push(post_id);
        self.repository.update(&question).await?;

        tracing::info!(
            question_id = %question.id(),
            experience_id = %question.experience_id(),
            forum_id = %forum_id,
            "question pushed to forum"
        );

        Ok(question)
    }
}
