//! Persistence port for question records.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ExperienceId, QuestionId};
use crate::domain::question::{Question, QuestionStatus};

/// Port for storing and retrieving questions.
///
/// # Contract
///
/// - `save` inserts a new record; saving an existing id is an error
/// - `update` rewrites the mutable fields of an existing record and
///   reports `QuestionNotFound` when no row matches
/// - `list_by_status` returns matching records in store-native order;
///   callers must not rely on any particular ordering
/// - `delete` is a hard delete and reports `QuestionNotFound` for
///   unknown ids
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Inserts a newly submitted question.
    async fn save(&self, question: &Question) -> Result<(), DomainError>;

    /// Updates the mutable fields of an existing question.
    async fn update(&self, question: &Question) -> Result<(), DomainError>;

    /// Fetches a question by id.
    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, DomainError>;

    /// Lists questions for an experience filtered by status.
    async fn list_by_status(
        &self,
        experience_id: &ExperienceId,
        status: QuestionStatus,
    ) -> Result<Vec<Question>, DomainError>;

    /// Permanently removes a question.
    async fn delete(&self, id: &QuestionId) -> Result<(), DomainError>;
}
