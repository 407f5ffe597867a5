use async_trait::async_trait;
use crate::domain::errors::AccessResult;
use crate::domain::models::identity::Identity;
use crate::domain::models::role::RoleAssignment;

/// Boundary to the hosted identity and role backend
///
/// Injected into the role loader so workstations can swap the HTTP provider
/// for a scripted one in tests and offline setups.
#[async_trait]
pub trait IdentityRoleService: Send + Sync {
    /// Resolve the currently signed-in identity, if any
    async fn current_user(&self) -> AccessResult<Option<Identity>>;

    /// Fetch the role assignment rows recorded for a user, in store order
    async fn roles_for_user(&self, user_id: &str) -> AccessResult<Vec<RoleAssignment>>;
}
