//! HTTP adapters - REST API implementations.

pub mod middleware;
pub mod question;

pub use question::{question_routes, QuestionHandlers};
