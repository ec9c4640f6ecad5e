//! DeleteQuestionHandler - permanent removal of a question.

use std::sync::Arc;

use super::guard::ensure_admin;
use crate::domain::foundation::{QuestionId, UserId};
use crate::domain::question::QuestionError;
use crate::ports::{AccessGateway, QuestionRepository};

/// Command to permanently delete a question.
#[derive(Debug, Clone)]
pub struct DeleteQuestionCommand {
    pub user_id: UserId,
    pub question_id: QuestionId,
}

/// Handler for deleting questions. Hard delete, no recovery.
pub struct DeleteQuestionHandler {
    repository: Arc<dyn QuestionRepository>,
    access_gateway: Arc<dyn AccessGateway>,
}

impl DeleteQuestionHandler {
    pub fn new(
        repository: Arc<dyn QuestionRepository>,
        access_gateway: Arc<dyn AccessGateway>,
    ) -> Self {
        Self {
            repository,
            access_gateway,
        }
    }

    pub async fn handle(&self, cmd: DeleteQuestionCommand) -> Result<(), QuestionError> {
        let question = self
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

        self.repository.delete(&cmd.question_id).await?;

        tracing::info!(
            question_id = %cmd.question_id,
            experience_id = %question.experience_id(),
            "question deleted"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::question::support::{
        caller, pending_question, InMemoryQuestionRepository, StaticAccessGateway,
    };

    fn command(id: QuestionId) -> DeleteQuestionCommand {
        DeleteQuestionCommand {
            user_id: caller(),
            question_id: id,
        }
    }

    #[tokio::test]
    async fn admin_delete_removes_the_record() {
        let question = pending_question();
        let id = *question.id();
        let repo = Arc::new(InMemoryQuestionRepository::new().with_question(question));
        let handler = DeleteQuestionHandler::new(repo.clone(), Arc::new(StaticAccessGateway::admin()));

        handler.handle(command(id)).await.unwrap();

        assert!(repo.get(&id).is_none());
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let repo = Arc::new(InMemoryQuestionRepository::new());
        let handler = DeleteQuestionHandler::new(repo, Arc::new(StaticAccessGateway::admin()));

        let result = handler.handle(command(QuestionId::new())).await;
        assert!(matches!(result, Err(QuestionError::NotFound(_))));
    }

    #[tokio::test]
    async fn non_admin_is_forbidden_and_record_survives() {
        let question = pending_question();
        let id = *question.id();
        let repo = Arc::new(InMemoryQuestionRepository::new().with_question(question));
        let handler =
            DeleteQuestionHandler::new(repo.clone(), Arc::new(StaticAccessGateway::member()));

        let result = handler.handle(command(id)).await;

        assert!(matches!(result, Err(QuestionError::Forbidden)));
        assert!(repo.get(&id).is_some());
    }
}
