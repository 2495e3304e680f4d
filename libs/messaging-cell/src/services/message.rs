use std::sync::Arc;

use reqwest::Method;
use tracing::debug;

use shared_gateway::BackendClient;

use crate::models::OutboundMessage;

const SEND_MESSAGE_PATH: &str = "/send-message/";

#[derive(Clone)]
pub struct MessageService {
    backend: Arc<BackendClient>,
}

impl MessageService {
    pub fn new(backend: Arc<BackendClient>) -> Self {
        Self { backend }
    }

    /// Fire the startup ping at the messaging endpoint, once per page load.
    ///
    /// Fire-and-forget: the response is discarded, failures are logged at
    /// debug and nothing is retried or surfaced to the user.
    pub async fn send_startup_ping(&self) {
        let message = OutboundMessage::startup_ping();

        let body = match serde_json::to_value(&message) {
            Ok(body) => body,
            Err(err) => {
                debug!("Failed to encode startup ping: {}", err);
                return;
            }
        };

        if let Err(err) = self
            .backend
            .send(Method::POST, SEND_MESSAGE_PATH, Some(body))
            .await
        {
            debug!("Startup ping dispatch failed: {:#}", err);
        }
    }
}
