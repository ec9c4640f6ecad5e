//! Notification port for best-effort side effects.
//!
//! Notifications are never part of an operation's contract: callers log
//! and swallow failures instead of propagating them.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ExperienceId};

/// Port for sending a notification to an experience's members.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends a notification with the given title and body.
    async fn notify(
        &self,
        experience_id: &ExperienceId,
        title: &str,
        content: &str,
    ) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifier_is_object_safe() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn Notifier>();
    }
}
