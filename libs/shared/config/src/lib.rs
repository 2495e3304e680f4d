use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub api_base_url: String,
    pub login_path: String,
}

impl PortalConfig {
    pub fn from_env() -> Self {
        let config = Self {
            api_base_url: env::var("MEDIBOOK_API_URL")
                .unwrap_or_else(|_| {
                    warn!("MEDIBOOK_API_URL not set, using default");
                    "http://localhost:8000".to_string()
                }),
            login_path: env::var("MEDIBOOK_LOGIN_PATH")
                .unwrap_or_else(|_| {
                    warn!("MEDIBOOK_LOGIN_PATH not set, using default");
                    "/login/".to_string()
                }),
        };

        if !config.is_configured() {
            warn!("Portal not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.api_base_url.is_empty() && !self.login_path.is_empty()
    }

    /// Absolute URL of the login page users are sent to when a booking
    /// action requires an authenticated session.
    pub fn login_url(&self) -> String {
        format!("{}{}", self.api_base_url, self.login_path)
    }
}
