//! Experience access-level port.
//!
//! Answers "what access does user U hold on experience E?" via the host
//! platform API. Only `Admin` authorizes the mutating and listing
//! operations in this service; every other level is treated as Forbidden
//! by the callers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ExperienceId, UserId};

/// A caller's permission tier with respect to one experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    /// No access to the experience.
    None,
    /// Regular member of the experience.
    Member,
    /// Experience administrator.
    Admin,
}

impl AccessLevel {
    /// Returns true only for the admin tier.
    pub fn is_admin(&self) -> bool {
        matches!(self, AccessLevel::Admin)
    }
}

/// Port for checking a user's access level on an experience.
///
/// # Contract
///
/// Fail-secure: implementations report unknown users or experiences as
/// `AccessLevel::None` rather than erroring, and reserve errors for
/// transport/backend failures. Callers must treat any error as a denied
/// check.
#[async_trait]
pub trait AccessGateway: Send + Sync {
    /// Looks up the access level `user_id` holds on `experience_id`.
    async fn check_access(
        &self,
        user_id: &UserId,
        experience_id: &ExperienceId,
    ) -> Result<AccessLevel, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_admin_is_admin() {
        assert!(AccessLevel::Admin.is_admin());
        assert!(!AccessLevel::Member.is_admin());
        assert!(!AccessLevel::None.is_admin());
    }

    #[test]
    fn access_level_uses_snake_case_on_the_wire() {
        assert_eq!(serde_json::to_string(&AccessLevel::Admin).unwrap(), "\"admin\"");
        assert_eq!(serde_json::to_string(&AccessLevel::None).unwrap(), "\"none\"");
        let parsed: AccessLevel = serde_json::from_str("\"member\"").unwrap();
        assert_eq!(parsed, AccessLevel::Member);
    }

    #[test]
    fn access_gateway_is_object_safe() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn AccessGateway>();
    }
}
