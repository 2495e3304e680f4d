/// The booking modal's lifecycle. The modal is never destroyed, only
/// hidden, so an in-flight submission always has somewhere to land.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        doctor_id: i64,
    },
}

impl ModalState {
    /// Closed -> Open, seeding the hidden doctor field. No other field is
    /// pre-filled.
    pub fn open_for(&mut self, doctor_id: i64) {
        *self = ModalState::Open { doctor_id };
    }

    /// Open -> Closed, on cancel or a confirmed booking.
    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }

    pub fn doctor_id(&self) -> Option<i64> {
        match self {
            ModalState::Open { doctor_id } => Some(*doctor_id),
            ModalState::Closed => None,
        }
    }
}
