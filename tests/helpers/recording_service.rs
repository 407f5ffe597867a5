use async_trait::async_trait;
use rxdesk::domain::errors::{AccessError, AccessResult};
use rxdesk::domain::models::{Identity, Role, RoleAssignment};
use rxdesk::domain::ports::IdentityRoleService;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{Mutex, Notify};

/// Scriptable identity and role service that records every call
///
/// Responses can be held behind a `Notify` gate so tests can observe the
/// loader mid-flight; `notify_one` releases the held call (or stores a
/// permit if the call has not arrived yet).
pub struct RecordingIdentityRoleService {
    identity: Option<Identity>,
    identity_error: Option<String>,
    assignments: Vec<RoleAssignment>,
    roles_error: Option<String>,
    identity_gate: Option<Arc<Notify>>,
    roles_gate: Option<Arc<Notify>>,
    identity_calls: AtomicUsize,
    role_calls: AtomicUsize,
    queried_user_ids: Mutex<Vec<String>>,
}

impl RecordingIdentityRoleService {
    fn empty() -> Self {
        Self {
            identity: None,
            identity_error: None,
            assignments: Vec::new(),
            roles_error: None,
            identity_gate: None,
            roles_gate: None,
            identity_calls: AtomicUsize::new(0),
            role_calls: AtomicUsize::new(0),
            queried_user_ids: Mutex::new(Vec::new()),
        }
    }

    /// Service with nobody signed in
    pub fn signed_out() -> Self {
        Self::empty()
    }

    /// Service with a signed-in user holding the given roles, in order
    pub fn signed_in(user_id: &str, roles: Vec<Role>) -> Self {
        Self {
            identity: Some(Identity::new(user_id.to_string())),
            assignments: roles.into_iter().map(RoleAssignment::new).collect(),
            ..Self::empty()
        }
    }

    /// Service whose identity resolution always fails
    pub fn failing_identity(message: &str) -> Self {
        Self {
            identity_error: Some(message.to_string()),
            ..Self::empty()
        }
    }

    /// Service whose role query always fails for a signed-in user
    pub fn failing_roles(user_id: &str, message: &str) -> Self {
        Self {
            identity: Some(Identity::new(user_id.to_string())),
            roles_error: Some(message.to_string()),
            ..Self::empty()
        }
    }

    /// Hold identity resolution until the returned gate is notified
    pub fn hold_identity(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.identity_gate = Some(gate.clone());
        (self, gate)
    }

    /// Hold the role query until the returned gate is notified
    pub fn hold_roles(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.roles_gate = Some(gate.clone());
        (self, gate)
    }

    pub fn identity_calls(&self) -> usize {
        self.identity_calls.load(Ordering::SeqCst)
    }

    pub fn role_calls(&self) -> usize {
        self.role_calls.load(Ordering::SeqCst)
    }

    pub async fn queried_user_ids(&self) -> Vec<String> {
        let ids = self.queried_user_ids.lock().await;
        ids.clone()
    }
}

#[async_trait]
impl IdentityRoleService for RecordingIdentityRoleService {
    async fn current_user(&self) -> AccessResult<Option<Identity>> {
        self.identity_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.identity_gate {
            gate.notified().await;
        }
        if let Some(message) = &self.identity_error {
            return Err(AccessError::IdentityResolution(message.clone()));
        }
        Ok(self.identity.clone())
    }

    async fn roles_for_user(&self, user_id: &str) -> AccessResult<Vec<RoleAssignment>> {
        self.role_calls.fetch_add(1, Ordering::SeqCst);
        self.queried_user_ids.lock().await.push(user_id.to_string());
        if let Some(gate) = &self.roles_gate {
            gate.notified().await;
        }
        if let Some(message) = &self.roles_error {
            return Err(AccessError::RoleQuery(message.clone()));
        }
        Ok(self.assignments.clone())
    }
}
