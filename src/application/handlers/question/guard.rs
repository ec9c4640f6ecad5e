//! Shared admin-access guard.
//!
//! Every mutating and listing operation performs the same check: the
//! caller must hold admin access to the question's experience. The check
//! lives here exactly once so all handlers fail the same way.

use crate::domain::foundation::{ExperienceId, UserId};
use crate::domain::question::QuestionError;
use crate::ports::AccessGateway;

/// Fails with `Forbidden` unless `user_id` holds admin access to
/// `experience_id`.
///
/// Gateway failures surface as `Upstream` errors; the caller is never
/// granted access on error.
pub(crate) async fn ensure_admin(
    gateway: &dyn AccessGateway,
    user_id: &UserId,
    experience_id: &ExperienceId,
) -> Result<(), QuestionError> {
    let level = gateway.check_access(user_id, experience_id).await?;
    if !level.is_admin() {
        tracing::debug!(
            user_id = %user_id,
            experience_id = %experience_id,
            access_level = ?level,
            "admin access denied"
        );
        return Err(QuestionError::forbidden());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::question::support::{caller, StaticAccessGateway};
    use crate::domain::foundation::ExperienceId;

    fn experience() -> ExperienceId {
        ExperienceId::new("exp_test").unwrap()
    }

    #[tokio::test]
    async fn admin_passes() {
        let gateway = StaticAccessGateway::admin();
        assert!(ensure_admin(&gateway, &caller(), &experience()).await.is_ok());
    }

    #[tokio::test]
    async fn member_is_forbidden() {
        let gateway = StaticAccessGateway::member();
        let result = ensure_admin(&gateway, &caller(), &experience()).await;
        assert!(matches!(result, Err(QuestionError::Forbidden)));
    }

    #[tokio::test]
    async fn no_access_is_forbidden() {
        let gateway = StaticAccessGateway::no_access();
        let result = ensure_admin(&gateway, &caller(), &experience()).await;
        assert!(matches!(result, Err(QuestionError::Forbidden)));
    }

    #[tokio::test]
    async fn gateway_failure_is_upstream_not_access() {
        let gateway = StaticAccessGateway::failing();
        let result = ensure_admin(&gateway, &caller(), &experience()).await;
        assert!(matches!(result, Err(QuestionError::Upstream(_))));
    }
}
