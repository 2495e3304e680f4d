use serde::{Deserialize, Serialize};

/// Response shape of the login probe. The flag is established once at page
/// init and never refreshed; a session expiring mid-visit only shows up as
/// the next booking attempt failing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LoginStatus {
    pub is_authenticated: bool,
}
