//! ListQuestionsHandler - admin-only listing by status.

use std::sync::Arc;

use super::guard::ensure_admin;
use crate::domain::foundation::{ExperienceId, UserId};
use crate::domain::question::{Question, QuestionError, QuestionStatus};
use crate::ports::{AccessGateway, QuestionRepository};

/// Query for an experience's questions in one review state.
#[derive(Debug, Clone)]
pub struct ListQuestionsQuery {
    pub user_id: UserId,
    pub experience_id: String,
    pub status: QuestionStatus,
}

/// Handler for listing pending or approved questions.
pub struct ListQuestionsHandler {
    repository: Arc<dyn QuestionRepository>,
    access_gateway: Arc<dyn AccessGateway>,
}

impl ListQuestionsHandler {
    pub fn new(
        repository: Arc<dyn QuestionRepository>,
        access_gateway: Arc<dyn AccessGateway>,
    ) -> Self {
        Self {
            repository,
            access_gateway,
        }
    }

    pub async fn handle(&self, query: ListQuestionsQuery) -> Result<Vec<Question>, QuestionError> {
        let experience_id = ExperienceId::new(query.experience_id)?;

        ensure_admin(self.access_gateway.as_ref(), &query.user_id, &experience_id).await?;

        let questions = self
            .repository
            .list_by_status(&experience_id, query.status)
            .await?;

        Ok(questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::question::support::{
        caller, pending_question, InMemoryQuestionRepository, StaticAccessGateway,
    };

    fn query(status: QuestionStatus) -> ListQuestionsQuery {
        ListQuestionsQuery {
            user_id: caller(),
            experience_id: "exp_test".to_string(),
            status,
        }
    }

    #[tokio::test]
    async fn admin_sees_pending_questions() {
        let repo = Arc::new(InMemoryQuestionRepository::new().with_question(pending_question()));
        let handler = ListQuestionsHandler::new(repo, Arc::new(StaticAccessGateway::admin()));

        let questions = handler.handle(query(QuestionStatus::Pending)).await.unwrap();
        assert_eq!(questions.len(), 1);
    }

    #[tokio::test]
    async fn listing_filters_by_status() {
        let repo = Arc::new(InMemoryQuestionRepository::new().with_question(pending_question()));
        let handler = ListQuestionsHandler::new(repo, Arc::new(StaticAccessGateway::admin()));

        let approved = handler
            .handle(query(QuestionStatus::Approved))
            .await
            .unwrap();
        assert!(approved.is_empty());
    }

    #[tokio::test]
    async fn non_admin_is_forbidden() {
        let repo = Arc::new(InMemoryQuestionRepository::new().with_question(pending_question()));
        let handler = ListQuestionsHandler::new(repo, Arc::new(StaticAccessGateway::member()));

        let result = handler.handle(query(QuestionStatus::Pending)).await;
        assert!(matches!(result, Err(QuestionError::Forbidden)));
    }

    #[tokio::test]
    async fn blank_experience_id_is_invalid() {
        let repo = Arc::new(InMemoryQuestionRepository::new());
        let handler = ListQuestionsHandler::new(repo, Arc::new(StaticAccessGateway::admin()));

        let result = handler
            .handle(ListQuestionsQuery {
                user_id: caller(),
                experience_id: String::new(),
                status: QuestionStatus::Pending,
            })
            .await;
        assert!(matches!(result, Err(QuestionError::ValidationFailed { .. })));
    }
}
