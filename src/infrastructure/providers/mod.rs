pub mod http_identity;
pub mod static_identity;

pub use http_identity::*;
pub use static_identity::*;
