use thiserror::Error;

/// Failures surfaced to the page. Every variant carries the text shown to
/// the user; the page stays interactive after any of them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortalError {
    #[error("Authentication required: {0}")]
    Auth(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Booking failed: {0}")]
    Rejected(String),

    #[error("Request failed: {0}")]
    Transport(String),
}

impl PortalError {
    /// The text presented to the user, without the variant prefix.
    pub fn user_message(&self) -> &str {
        match self {
            PortalError::Auth(msg)
            | PortalError::Validation(msg)
            | PortalError::Rejected(msg)
            | PortalError::Transport(msg) => msg,
        }
    }

    pub fn requires_login(&self) -> bool {
        matches!(self, PortalError::Auth(_))
    }
}
