//! HTTP adapter for question endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::QuestionHandlers;
pub use routes::question_routes;
