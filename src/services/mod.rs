pub mod role_loader;
pub mod toast_center;

pub use role_loader::*;
pub use toast_center::*;
