//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `QuestionRepository` - persistence of question records
//! - `TokenVerifier` - identity token verification (host platform)
//! - `AccessGateway` - experience access-level lookups (host platform)
//! - `ForumPublisher` - forum and forum-post creation (host platform)
//! - `Notifier` - best-effort notifications (host platform)

mod access_gateway;
mod forum_publisher;
mod notifier;
mod question_repository;
mod token_verifier;

pub use access_gateway::{AccessGateway, AccessLevel};
pub use forum_publisher::{ForumPublisher, PostingPolicy};
pub use notifier::Notifier;
pub use question_repository::QuestionRepository;
pub use token_verifier::TokenVerifier;
