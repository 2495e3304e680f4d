use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboundMessage {
    pub subject: String,
    pub body: String,
}

impl OutboundMessage {
    /// The fixed payload the page fires at the messaging endpoint on load.
    pub fn startup_ping() -> Self {
        Self {
            subject: "Test".to_string(),
            body: "This is a test".to_string(),
        }
    }
}
