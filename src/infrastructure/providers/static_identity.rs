use crate::domain::errors::{AccessError, AccessResult};
use crate::domain::models::identity::Identity;
use crate::domain::models::role::{Role, RoleAssignment};
use crate::domain::ports::identity_service::IdentityRoleService;
use async_trait::async_trait;

/// Scripted identity and role provider
///
/// Serves a fixed identity and assignment list, or scripted failures, with
/// no backend involved. Used by tests and by offline development setups.
pub struct StaticIdentityRoleService {
    identity: Option<Identity>,
    assignments: Vec<RoleAssignment>,
    identity_error: Option<String>,
    roles_error: Option<String>,
}

impl StaticIdentityRoleService {
    /// Provider with nobody signed in
    pub fn signed_out() -> Self {
        Self {
            identity: None,
            assignments: Vec::new(),
            identity_error: None,
            roles_error: None,
        }
    }

    /// Provider with a signed-in user holding the given roles, in order
    pub fn signed_in(user_id: &str, roles: Vec<Role>) -> Self {
        Self {
            identity: Some(Identity::new(user_id.to_string())),
            assignments: roles.into_iter().map(RoleAssignment::new).collect(),
            identity_error: None,
            roles_error: None,
        }
    }

    /// Provider whose identity resolution always fails
    pub fn failing_identity(message: &str) -> Self {
        Self {
            identity: None,
            assignments: Vec::new(),
            identity_error: Some(message.to_string()),
            roles_error: None,
        }
    }

    /// Provider whose role query always fails for a signed-in user
    pub fn failing_roles(user_id: &str, message: &str) -> Self {
        Self {
            identity: Some(Identity::new(user_id.to_string())),
            assignments: Vec::new(),
            identity_error: None,
            roles_error: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl IdentityRoleService for StaticIdentityRoleService {
    async fn current_user(&self) -> AccessResult<Option<Identity>> {
        if let Some(message) = &self.identity_error {
            return Err(AccessError::IdentityResolution(message.clone()));
        }
        Ok(self.identity.clone())
    }

    async fn roles_for_user(&self, _user_id: &str) -> AccessResult<Vec<RoleAssignment>> {
        if let Some(message) = &self.roles_error {
            return Err(AccessError::RoleQuery(message.clone()));
        }
        Ok(self.assignments.clone())
    }
}
