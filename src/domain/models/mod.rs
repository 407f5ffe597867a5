pub mod identity;
pub mod product;
pub mod role;
pub mod toast;

pub use identity::*;
pub use product::*;
pub use role::*;
pub use toast::*;
