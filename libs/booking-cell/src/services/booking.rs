use std::sync::Arc;

use reqwest::Method;
use tracing::{error, info};

use shared_gateway::BackendClient;
use shared_models::PortalError;

use crate::models::{BookingForm, BookingReceipt, BookingRequest, BookingResponse};

const APPOINTMENTS_PATH: &str = "/api/appointments/";

pub const LOGIN_REQUIRED_MESSAGE: &str = "Please login to book an appointment.";
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all fields.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong.";
pub const RETRY_MESSAGE: &str = "Something went wrong. Please try again.";

pub struct BookingService {
    backend: Arc<BackendClient>,
}

impl BookingService {
    pub fn new(backend: Arc<BackendClient>) -> Self {
        Self { backend }
    }

    /// Submit the modal's form as a booking create call.
    ///
    /// Refuses anonymous sessions and incomplete forms before touching the
    /// network; everything past that point is the backend's verdict. No
    /// retries - a failed submission leaves the modal open and the user
    /// resubmits.
    pub async fn submit(
        &self,
        form: &BookingForm,
        is_authenticated: bool,
    ) -> Result<BookingReceipt, PortalError> {
        if !is_authenticated {
            return Err(PortalError::Auth(LOGIN_REQUIRED_MESSAGE.to_string()));
        }

        let (doctor, date, time) = form
            .complete()
            .ok_or_else(|| PortalError::Validation(MISSING_FIELDS_MESSAGE.to_string()))?;

        let request = BookingRequest::new(doctor, date, time);
        info!(
            "Submitting appointment request for doctor {} on {}",
            doctor, request.scheduled_date
        );

        let body = serde_json::to_value(&request).map_err(|err| {
            error!("Failed to encode booking request: {}", err);
            PortalError::Rejected(RETRY_MESSAGE.to_string())
        })?;

        let response = self
            .backend
            .send(Method::POST, APPOINTMENTS_PATH, Some(body))
            .await
            .map_err(|err| {
                error!("Booking request failed: {:#}", err);
                PortalError::Transport(RETRY_MESSAGE.to_string())
            })?;

        let status = response.status();
        let payload: BookingResponse = match response.json().await {
            Ok(payload) => payload,
            Err(err) => {
                error!("Undecodable booking response: {}", err);
                return Err(PortalError::Rejected(GENERIC_FAILURE_MESSAGE.to_string()));
            }
        };

        if status.is_success() && payload.success {
            Ok(BookingReceipt {
                appointment_id: payload.id,
                serial_number: payload.serial_number,
            })
        } else {
            let message = payload
                .error
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            Err(PortalError::Rejected(message))
        }
    }
}
