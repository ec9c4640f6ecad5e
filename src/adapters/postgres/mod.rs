//! PostgreSQL adapters.

mod question_repository;

pub use question_repository::PostgresQuestionRepository;
