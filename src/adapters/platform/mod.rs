//! Host platform API adapters.
//!
//! Implementations of the `TokenVerifier`, `AccessGateway`,
//! `ForumPublisher`, and `Notifier` ports against the host platform's
//! REST API, plus mock implementations for tests and local development.

mod access_gateway;
mod client;
mod forum_publisher;
mod mock;
mod notifier;
mod token_verifier;

pub use access_gateway::PlatformAccessGateway;
pub use client::{PlatformApiConfig, PlatformClient};
pub use forum_publisher::PlatformForumPublisher;
pub use mock::{MockAccessGateway, MockForumPublisher, MockNotifier, MockTokenVerifier};
pub use notifier::PlatformNotifier;
pub use token_verifier::{PlatformTokenVerifier, TokenVerifierConfig};
