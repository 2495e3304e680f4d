use std::sync::Arc;

use reqwest::Method;
use tracing::debug;

use shared_gateway::BackendClient;
use shared_models::LoginStatus;

const CHECK_LOGIN_PATH: &str = "/api/check-login/";

pub struct SessionService {
    backend: Arc<BackendClient>,
}

impl SessionService {
    pub fn new(backend: Arc<BackendClient>) -> Self {
        Self { backend }
    }

    /// Probe the backend for the session's authentication state.
    ///
    /// Any failure - transport error, non-success status, undecodable body -
    /// is treated as an anonymous session. The page never surfaces an error
    /// for this call; an unauthenticated visitor is a normal state.
    pub async fn check_login(&self) -> bool {
        debug!("Checking login status");

        match self
            .backend
            .request::<LoginStatus>(Method::GET, CHECK_LOGIN_PATH, None)
            .await
        {
            Ok(status) => status.is_authenticated,
            Err(err) => {
                debug!("Login probe failed, treating session as anonymous: {:#}", err);
                false
            }
        }
    }
}
