use serde::{Deserialize, Serialize};

/// Resolved reference to the currently signed-in user
///
/// Opaque beyond the unique id; the email is carried for display only. The
/// auth endpoint returns more fields than these, serde drops the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Identity {
    pub fn new(id: String) -> Self {
        Self { id, email: None }
    }

    pub fn with_email(id: String, email: String) -> Self {
        Self {
            id,
            email: Some(email),
        }
    }
}
