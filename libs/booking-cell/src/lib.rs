pub mod modal;
pub mod models;
pub mod services;

pub use modal::ModalState;
pub use models::*;
pub use services::booking::{
    BookingService, GENERIC_FAILURE_MESSAGE, LOGIN_REQUIRED_MESSAGE, MISSING_FIELDS_MESSAGE,
    RETRY_MESSAGE,
};
