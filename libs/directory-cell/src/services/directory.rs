use std::sync::Arc;

use anyhow::Result;
use reqwest::Method;
use tracing::debug;

use shared_gateway::BackendClient;

use crate::models::Doctor;

const DOCTORS_PATH: &str = "/api/doctors/";

pub struct DirectoryService {
    backend: Arc<BackendClient>,
}

impl DirectoryService {
    pub fn new(backend: Arc<BackendClient>) -> Self {
        Self { backend }
    }

    /// Fetch the full doctor directory.
    ///
    /// The returned list is the page's single source of truth: card lists
    /// and suggestions are always derived from it, and it is only ever
    /// replaced wholesale, never patched in place.
    pub async fn load_doctors(&self) -> Result<Vec<Doctor>> {
        debug!("Fetching doctor directory");

        let doctors: Vec<Doctor> = self.backend.request(Method::GET, DOCTORS_PATH, None).await?;

        debug!("Loaded {} doctors", doctors.len());
        Ok(doctors)
    }
}
