pub mod models;
pub mod services;
pub mod view;

// Re-export all models and services for external use
pub use models::*;
pub use services::directory::DirectoryService;
pub use view::{BookAction, DirectoryView, DoctorCard, SuggestionPanel};
