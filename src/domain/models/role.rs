use serde::{Deserialize, Serialize};

/// Role granted to a workstation user
///
/// The set is closed: the backend only ever stores these four tags, and an
/// unknown tag in a query response is treated as a malformed row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Pharmacist,
    Cashier,
    InventoryManager,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Pharmacist => "pharmacist",
            Role::Cashier => "cashier",
            Role::InventoryManager => "inventory_manager",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "pharmacist" => Ok(Role::Pharmacist),
            "cashier" => Ok(Role::Cashier),
            "inventory_manager" => Ok(Role::InventoryManager),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// One row of the role assignment store
///
/// The backend keeps assignments as (user_id, role) rows; the query surface
/// projects just the role column, so this is the wire shape responses carry.
/// A user can hold the same role through several rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub role: Role,
}

impl RoleAssignment {
    pub fn new(role: Role) -> Self {
        Self { role }
    }
}
