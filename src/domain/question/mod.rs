//! Question module - the anonymous question aggregate.

mod aggregate;
mod errors;

pub use aggregate::{Question, QuestionStatus, MAX_QUESTION_LENGTH};
pub use errors::QuestionError;
