//! Mock platform adapters for tests and local development.
//!
//! These implement the platform-facing ports without network calls.
//! Builders follow a `with_*` style so tests read as setup pipelines.

use std::collections::HashMap;
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;

use crate::domain::foundation::{
    AuthError, DomainError, ErrorCode, ExperienceId, ForumId, PostId, UserId, VerifiedIdentity,
};
use crate::ports::{AccessGateway, AccessLevel, ForumPublisher, Notifier, PostingPolicy, TokenVerifier};

/// Mock token verifier backed by a token -> identity map.
///
/// Tokens not in the map are rejected with `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockTokenVerifier {
    tokens: RwLock<HashMap<String, VerifiedIdentity>>,
    force_error: RwLock<Option<AuthError>>,
}

impl MockTokenVerifier {
    /// Creates an empty mock verifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `token` as belonging to `user_id`.
    pub fn with_identity(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        let identity = VerifiedIdentity::new(UserId::new(user_id.into()).unwrap());
        self.tokens.write().unwrap().insert(token.into(), identity);
        self
    }

    /// Forces every verification to return the given error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }
}

#[async_trait]
impl TokenVerifier for MockTokenVerifier {
    async fn verify(&self, token: &str) -> Result<VerifiedIdentity, AuthError> {
        if let Some(error) = self.force_error.read().unwrap().clone() {
            return Err(error);
        }
        self.tokens
            .read()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

/// Mock access gateway backed by a (user, experience) -> level map.
///
/// Unknown pairs resolve to `AccessLevel::None` (fail-secure).
#[derive(Debug, Default)]
pub struct MockAccessGateway {
    levels: RwLock<HashMap<(String, String), AccessLevel>>,
    fail: RwLock<bool>,
}

impl MockAccessGateway {
    /// Creates a gateway that denies everyone.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants `level` to `user_id` on `experience_id`.
    pub fn with_level(
        self,
        user_id: impl Into<String>,
        experience_id: impl Into<String>,
        level: AccessLevel,
    ) -> Self {
        self.levels
            .write()
            .unwrap()
            .insert((user_id.into(), experience_id.into()), level);
        self
    }

    /// Makes every lookup fail with a platform error.
    pub fn failing() -> Self {
        let gateway = Self::default();
        *gateway.fail.write().unwrap() = true;
        gateway
    }
}

#[async_trait]
impl AccessGateway for MockAccessGateway {
    async fn check_access(
        &self,
        user_id: &UserId,
        experience_id: &ExperienceId,
    ) -> Result<AccessLevel, DomainError> {
        if *self.fail.read().unwrap() {
            return Err(DomainError::new(
                ErrorCode::PlatformApiError,
                "access check unavailable",
            ));
        }
        Ok(self
            .levels
            .read()
            .unwrap()
            .get(&(user_id.as_str().to_string(), experience_id.as_str().to_string()))
            .copied()
            .unwrap_or(AccessLevel::None))
    }
}

/// Mock forum publisher with one forum per experience and sequential
/// post ids. Records every created post for assertions.
#[derive(Debug, Default)]
pub struct MockForumPublisher {
    posts: Mutex<Vec<(String, String, String)>>,
    fail: RwLock<bool>,
}

impl MockForumPublisher {
    /// Creates a publisher that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every call fail with a platform error.
    pub fn failing() -> Self {
        let publisher = Self::default();
        *publisher.fail.write().unwrap() = true;
        publisher
    }

    /// Returns the number of posts created so far.
    pub fn post_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    /// Returns the recorded posts as (forum, title, content) tuples.
    pub fn posts(&self) -> Vec<(String, String, String)> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ForumPublisher for MockForumPublisher {
    async fn find_or_create_forum(
        &self,
        experience_id: &ExperienceId,
        _name: &str,
        _policy: PostingPolicy,
    ) -> Result<ForumId, DomainError> {
        if *self.fail.read().unwrap() {
            return Err(DomainError::new(
                ErrorCode::PlatformApiError,
                "forum unavailable",
            ));
        }
        // Same experience, same forum: the find-or-create contract.
        Ok(ForumId::new(format!("forum_{}", experience_id))?)
    }

    async fn create_post(
        &self,
        forum_id: &ForumId,
        title: &str,
        content: &str,
    ) -> Result<PostId, DomainError> {
        if *self.fail.read().unwrap() {
            return Err(DomainError::new(
                ErrorCode::PlatformApiError,
                "post creation unavailable",
            ));
        }
        let mut posts = self.posts.lock().unwrap();
        posts.push((
            forum_id.as_str().to_string(),
            title.to_string(),
            content.to_string(),
        ));
        Ok(PostId::new(format!("post_{}", posts.len()))?)
    }
}

/// Mock notifier that records deliveries.
#[derive(Debug, Default)]
pub struct MockNotifier {
    notifications: Mutex<Vec<(String, String)>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded (title, content) pairs.
    pub fn notifications(&self) -> Vec<(String, String)> {
        self.notifications.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify(
        &self,
        _experience_id: &ExperienceId,
        title: &str,
        content: &str,
    ) -> Result<(), DomainError> {
        self.notifications
            .lock()
            .unwrap()
            .push((title.to_string(), content.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_verifier_accepts_registered_tokens() {
        let verifier = MockTokenVerifier::new().with_identity("tok", "user_1");
        let identity = verifier.verify("tok").await.unwrap();
        assert_eq!(identity.user_id.as_str(), "user_1");
    }

    #[tokio::test]
    async fn mock_verifier_rejects_unknown_tokens() {
        let verifier = MockTokenVerifier::new();
        assert!(matches!(
            verifier.verify("tok").await,
            Err(AuthError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn mock_gateway_defaults_to_no_access() {
        let gateway = MockAccessGateway::new();
        let level = gateway
            .check_access(
                &UserId::new("user_1").unwrap(),
                &ExperienceId::new("exp_1").unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(level, AccessLevel::None);
    }

    #[tokio::test]
    async fn mock_gateway_returns_registered_level() {
        let gateway = MockAccessGateway::new().with_level("user_1", "exp_1", AccessLevel::Admin);
        let level = gateway
            .check_access(
                &UserId::new("user_1").unwrap(),
                &ExperienceId::new("exp_1").unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(level, AccessLevel::Admin);
    }

    #[tokio::test]
    async fn mock_publisher_returns_stable_forum_per_experience() {
        let publisher = MockForumPublisher::new();
        let exp = ExperienceId::new("exp_1").unwrap();

        let a = publisher
            .find_or_create_forum(&exp, "AMA Forum", PostingPolicy::Admins)
            .await
            .unwrap();
        let b = publisher
            .find_or_create_forum(&exp, "AMA Forum", PostingPolicy::Admins)
            .await
            .unwrap();

        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn mock_publisher_records_posts() {
        let publisher = MockForumPublisher::new();
        let forum = ForumId::new("forum_1").unwrap();

        publisher
            .create_post(&forum, "Somebody asked:", "\"Is X worth it?\"")
            .await
            .unwrap();

        assert_eq!(publisher.post_count(), 1);
        assert_eq!(publisher.posts()[0].1, "Somebody asked:");
    }
}
