use crate::config::Config;
use crate::domain::errors::{AccessError, AccessResult};
use crate::domain::models::identity::Identity;
use crate::domain::models::role::RoleAssignment;
use crate::domain::ports::identity_service::IdentityRoleService;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Identity and role provider backed by the hosted backend's REST surface
///
/// `current_user` hits the auth endpoint with the configured access token;
/// `roles_for_user` reads the role assignment rows through the query
/// endpoint. Transport, status, and decode failures map to the access error
/// taxonomy; the loader decides what to do with them.
pub struct HttpIdentityRoleService {
    http_client: Client,
    base_url: String,
    service_key: String,
    access_token: Option<String>,
}

impl HttpIdentityRoleService {
    pub fn new(config: &Config) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: config.service_url.trim_end_matches('/').to_string(),
            service_key: config.service_key.clone(),
            access_token: config.access_token.clone(),
        }
    }
}

#[async_trait]
impl IdentityRoleService for HttpIdentityRoleService {
    async fn current_user(&self) -> AccessResult<Option<Identity>> {
        let token = match &self.access_token {
            Some(token) => token,
            None => {
                debug!("No access token configured, treating the session as signed out");
                return Ok(None);
            }
        };

        let url = format!("{}/auth/v1/user", self.base_url);
        debug!("Resolving current user via {}", url);

        let response = self
            .http_client
            .get(&url)
            .header("apikey", &self.service_key)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                AccessError::IdentityResolution(format!("Request to {} failed: {}", url, e))
            })?;

        let status = response.status();

        // The backend answers 401 for a missing or expired session
        if status == StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(AccessError::IdentityResolution(format!(
                "Unexpected status {} from {}",
                status, url
            )));
        }

        let identity = response
            .json::<Identity>()
            .await
            .map_err(|e| AccessError::IdentityResolution(format!("Invalid user payload: {}", e)))?;
        Ok(Some(identity))
    }

    async fn roles_for_user(&self, user_id: &str) -> AccessResult<Vec<RoleAssignment>> {
        let url = format!("{}/rest/v1/user_roles", self.base_url);
        let user_filter = format!("eq.{}", user_id);
        debug!("Fetching role assignments for user {}", user_id);

        let bearer = self.access_token.as_deref().unwrap_or(&self.service_key);
        let response = self
            .http_client
            .get(&url)
            .header("apikey", &self.service_key)
            .bearer_auth(bearer)
            .query(&[("select", "role"), ("user_id", user_filter.as_str())])
            .send()
            .await
            .map_err(|e| AccessError::RoleQuery(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AccessError::RoleQuery(format!(
                "Unexpected status {} from {}",
                status, url
            )));
        }

        response
            .json::<Vec<RoleAssignment>>()
            .await
            .map_err(|e| AccessError::RoleQuery(format!("Invalid role rows: {}", e)))
    }
}
