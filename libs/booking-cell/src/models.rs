use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Every booking is created in this state; the clinic staff move it along
/// from there.
pub const PENDING_STATUS: &str = "Pending";

/// Field state of the booking modal. The doctor id is seeded when the modal
/// opens; date and time are typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingForm {
    pub doctor_id: Option<i64>,
    pub scheduled_date: Option<NaiveDate>,
    pub scheduled_time: Option<NaiveTime>,
}

impl BookingForm {
    /// All three fields, or nothing to submit.
    pub fn complete(&self) -> Option<(i64, NaiveDate, NaiveTime)> {
        Some((self.doctor_id?, self.scheduled_date?, self.scheduled_time?))
    }
}

/// Wire shape of a booking create call. Built fresh on every submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub doctor: i64,
    pub scheduled_date: String,
    pub scheduled_time: String,
    pub status: String,
}

impl BookingRequest {
    pub fn new(doctor: i64, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            doctor,
            scheduled_date: date.format("%Y-%m-%d").to_string(),
            scheduled_time: time.format("%H:%M").to_string(),
            status: PENDING_STATUS.to_string(),
        }
    }
}

/// Envelope the booking endpoint answers with, for both verdicts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub serial_number: Option<i64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// What a confirmed booking reports back: the appointment id and the
/// position in the doctor's queue for that date, when the backend sends
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingReceipt {
    pub appointment_id: Option<i64>,
    pub serial_number: Option<i64>,
}

impl BookingReceipt {
    pub fn confirmation_message(&self) -> String {
        match self.serial_number {
            Some(serial) => {
                format!("Appointment booked successfully! Your queue number is {serial}.")
            }
            None => "Appointment booked successfully!".to_string(),
        }
    }
}
