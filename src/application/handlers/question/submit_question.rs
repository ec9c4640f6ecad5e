//! SubmitQuestionHandler - command handler for anonymous submissions.

use std::sync::Arc;

use crate::domain::foundation::{ExperienceId, QuestionId};
use crate::domain::question::{Question, QuestionError};
use crate::ports::QuestionRepository;

/// Command to submit an anonymous question.
///
/// Fields arrive as raw strings from the transport layer; validation
/// happens here so every transport gets the same rules.
#[derive(Debug, Clone)]
pub struct SubmitQuestionCommand {
    pub experience_id: String,
    pub question: String,
}

/// Handler for submitting questions.
///
/// Submission requires a verified identity (enforced at the transport
/// boundary) but no access level: any authenticated platform user may ask.
/// The caller's identity is deliberately not recorded.
pub struct SubmitQuestionHandler {
    repository: Arc<dyn QuestionRepository>,
}

impl SubmitQuestionHandler {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SubmitQuestionCommand) -> Result<Question, QuestionError> {
        let experience_id = ExperienceId::new(cmd.experience_id)?;
        let question = Question::new(QuestionId::new(), experience_id, cmd.question)?;

        self.repository.save(&question).await?;

        tracing::info!(
            question_id = %question.id(),
            experience_id = %question.experience_id(),
            "question submitted"
        );

        Ok(question)
    }
}
