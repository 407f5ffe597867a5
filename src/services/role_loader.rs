use crate::domain::models::role::Role;
use crate::domain::ports::identity_service::IdentityRoleService;
use std::sync::Arc;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Snapshot of the load lifecycle published to readers
#[derive(Debug, Clone)]
struct RoleState {
    roles: Vec<Role>,
    loading: bool,
}

/// Resolves the signed-in user's roles once and answers capability queries
///
/// Construction spawns a single load attempt; readers see `loading() == true`
/// until it settles and the cached result forever after. Failures along the
/// way are logged and settle as the empty role set, indistinguishable from a
/// user with no assignments.
pub struct RoleLoader {
    state: watch::Receiver<RoleState>,
    shutdown: CancellationToken,
}

impl RoleLoader {
    /// Spawn the load attempt on the current tokio runtime
    ///
    /// The spawned task:
    /// 1. Resolves the current identity via the injected service
    /// 2. Queries the role assignments recorded for that identity
    /// 3. Publishes the settled role set, preserving the store's row order
    ///
    /// No retries and no timeout; the attempt runs to settlement exactly
    /// once. A settlement arriving after `shutdown()` or after the loader
    /// was dropped is discarded.
    pub fn spawn(service: Arc<dyn IdentityRoleService>) -> Self {
        let (tx, rx) = watch::channel(RoleState {
            roles: Vec::new(),
            loading: true,
        });
        let shutdown = CancellationToken::new();
        let token = shutdown.clone();

        tokio::spawn(async move {
            debug!("Role load attempt started");
            let roles = resolve_roles(service.as_ref()).await;

            // Check cancellation under the channel lock so a concurrent
            // shutdown cannot land between the check and the publish.
            let published = tx.send_if_modified(|state| {
                if token.is_cancelled() {
                    return false;
                }
                state.roles = roles;
                state.loading = false;
                true
            });

            if !published {
                debug!("Role load settled after teardown, discarding result");
            }
        });

        Self {
            state: rx,
            shutdown,
        }
    }

    /// Roles known for the current user, in the order the store returned them
    ///
    /// Empty while loading and after any failure.
    pub fn roles(&self) -> Vec<Role> {
        self.state.borrow().roles.clone()
    }

    /// Whether the load attempt is still in flight
    pub fn loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Whether the current user holds the given role
    pub fn has_role(&self, role: Role) -> bool {
        self.state.borrow().roles.contains(&role)
    }

    /// Whether the current user holds at least one of the given roles
    pub fn has_any_role(&self, candidates: &[Role]) -> bool {
        let state = self.state.borrow();
        candidates.iter().any(|role| state.roles.contains(role))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }

    pub fn is_pharmacist(&self) -> bool {
        self.has_role(Role::Pharmacist)
    }

    pub fn is_cashier(&self) -> bool {
        self.has_role(Role::Cashier)
    }

    pub fn is_inventory_manager(&self) -> bool {
        self.has_role(Role::InventoryManager)
    }

    /// Wait until the attempt has settled or its result was discarded
    pub async fn settled(&self) {
        let mut state = self.state.clone();
        loop {
            if !state.borrow_and_update().loading {
                return;
            }
            if state.changed().await.is_err() {
                // Sender dropped without publishing: the attempt was
                // discarded at teardown. Nothing further will arrive.
                return;
            }
        }
    }

    /// Tear the loader down
    ///
    /// The in-flight attempt is not aborted; its settlement is discarded so
    /// readers never observe a state change after this call.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }
}

impl Drop for RoleLoader {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Run the two-step resolution, collapsing every failure to the empty set
async fn resolve_roles(service: &dyn IdentityRoleService) -> Vec<Role> {
    let identity = match service.current_user().await {
        Ok(Some(identity)) => identity,
        Ok(None) => {
            debug!("No signed-in user, settling with an empty role set");
            return Vec::new();
        }
        Err(e) => {
            warn!("Identity resolution failed, settling with an empty role set: {}", e);
            return Vec::new();
        }
    };

    match service.roles_for_user(&identity.id).await {
        Ok(assignments) => assignments
            .into_iter()
            .map(|assignment| assignment.role)
            .collect(),
        Err(e) => {
            warn!(
                "Role query failed for user {}, settling with an empty role set: {}",
                identity.id, e
            );
            Vec::new()
        }
    }
}
