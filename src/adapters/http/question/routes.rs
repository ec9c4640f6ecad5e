//! HTTP routes for question endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{list_questions, post_question, QuestionHandlers};

/// Creates the question router.
///
/// Both verbs share one path: `POST` dispatches on the body's `action`
/// field, `GET` lists questions for an experience.
pub fn question_routes(handlers: QuestionHandlers) -> Router {
    Router::new()
        .route("/", post(post_question))
        .route("/", get(list_questions))
        .with_state(handlers)
}
