use thiserror::Error;

/// Failures the identity and role boundary can report
///
/// Both variants collapse to the same empty role set at the loader surface;
/// the distinction only exists for adapters and their logs.
#[derive(Error, Debug)]
pub enum AccessError {
    #[error("Identity resolution failed: {0}")]
    IdentityResolution(String),
    #[error("Role query failed: {0}")]
    RoleQuery(String),
}

pub type AccessResult<T> = Result<T, AccessError>;
