pub mod auth;
pub mod error;

pub use auth::LoginStatus;
pub use error::PortalError;
