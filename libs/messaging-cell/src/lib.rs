pub mod models;
pub mod services;

pub use models::OutboundMessage;
pub use services::message::MessageService;
