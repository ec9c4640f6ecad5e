//! Question operation handlers.
//!
//! One handler per operation: submit, list, approve, delete, and
//! push-to-forum. All mutating/listing operations share the
//! [`guard::ensure_admin`] access check.

mod approve_question;
mod delete_question;
mod guard;
mod list_questions;
mod push_to_forum;
mod submit_question;

pub use approve_question::{ApproveQuestionCommand, ApproveQuestionHandler};
pub use delete_question::{DeleteQuestionCommand, DeleteQuestionHandler};
pub use list_questions::{ListQuestionsHandler, ListQuestionsQuery};
pub use push_to_forum::{PushToForumCommand, PushToForumHandler};
pub use submit_question::{SubmitQuestionCommand, SubmitQuestionHandler};

/// Name of the forum created for each experience's Q&A.
pub const FORUM_NAME: &str = "AMA Forum";

/// Title used for every published Q&A post.
pub const POST_TITLE: &str = "Somebody asked:";
