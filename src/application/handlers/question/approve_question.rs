//! ApproveQuestionHandler - answer a question and publish the Q&A.

use std::sync::Arc;

use super::guard::ensure_admin;
use super::{FORUM_NAME, POST_TITLE};
use crate::domain::foundation::{QuestionId, UserId};
use crate::domain::question::{Question, QuestionError};
use crate::ports::{AccessGateway, ForumPublisher, Notifier, PostingPolicy, QuestionRepository};

/// Command to approve a pending question with an answer.
#[derive(Debug, Clone)]
pub struct ApproveQuestionCommand {
    pub user_id: UserId,
    pub question_id: QuestionId,
    pub answer: String,
}

/// Handler for approving questions.
///
/// On success the Q&A is published as a forum post and the record moves to
/// Approved with `answer`, `answered_at`, `pushed_to_forum`, and
/// `forum_post_id` set. The forum post and the record update are two
/// separate effects with no atomicity between them: if the update fails
/// after the post exists, the record stays pending alongside the orphaned
/// post. The one-way status transition keeps a retry from double-posting.
pub struct ApproveQuestionHandler {
    repository: Arc<dyn QuestionRepository>,
    access_gateway: Arc<dyn AccessGateway>,
    forum_publisher: Arc<dyn ForumPublisher>,
    notifier: Arc<dyn Notifier>,
}

impl ApproveQuestionHandler {
    pub fn new(
        repository: Arc<dyn QuestionRepository>,
        access_gateway: Arc<dyn AccessGateway>,
        forum_publisher: Arc<dyn ForumPublisher>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            repository,
            access_gateway,
            forum_publisher,
            notifier,
        }
    }

    pub async fn handle(&self, cmd: ApproveQuestionCommand) -> Result<Question, QuestionError> {
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

        // Validate before touching the forum so a rejected command leaves
        // no orphaned post behind.
        if cmd.answer.trim().is_empty() {
            return Err(QuestionError::validation("answer", "answer is required"));
        }
        if !question.is_pending() {
            return Err(QuestionError::validation(
                "status",
                "question is already approved",
            ));
        }

        let forum_id = self
            .forum_publisher
            .find_or_create_forum(question.experience_id(), FORUM_NAME, PostingPolicy::Admins)
            .await?;

        let content = format!("\"{}\"\n\n{}", question.question(), cmd.answer);
        let post_id = self
            .forum_publisher
            .create_post(&forum_id, POST_TITLE, &content)
            .await?;

        question.approve(cmd.answer, post_id)?;
        self.repository.update(&question).await?;

        tracing::info!(
            question_id = %question.id(),
            experience_id = %question.experience_id(),
            forum_id = %forum_id,
            "question approved and published"
        );

        // Best-effort notification; never fails the approval.
        if let Err(e) = self
            .notifier
            .notify(
                question.experience_id(),
                "New answer published",
                question.question(),
            )
            .await
        {
            tracing::warn!(
                question_id = %question.id(),
                error = %e,
                "approval notification failed"
            );
        }

        Ok(question)
    }
}
