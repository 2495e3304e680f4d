use booking_cell::{BookingForm, ModalState};
use directory_cell::view::{DirectoryView, SuggestionPanel};

/// The whole page as data, rebuilt from [`PageState`] after every event.
/// The binary prints it; nothing else in the app touches the screen.
///
/// [`PageState`]: crate::controller::PageState
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub directory: DirectoryView,
    pub suggestions: SuggestionPanel,
    pub modal: ModalView,
    pub feedback: Option<Feedback>,
    pub redirect: Option<String>,
}

/// One-shot message shown after an event, the alert box of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    Confirmation(String),
    Warning(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalView {
    pub visible: bool,
    pub doctor_id: Option<i64>,
    pub scheduled_date: Option<String>,
    pub scheduled_time: Option<String>,
}

impl ModalView {
    pub fn from_state(modal: &ModalState, form: &BookingForm) -> Self {
        Self {
            visible: modal.is_open(),
            doctor_id: form.doctor_id,
            scheduled_date: form
                .scheduled_date
                .map(|date| date.format("%Y-%m-%d").to_string()),
            scheduled_time: form
                .scheduled_time
                .map(|time| time.format("%H:%M").to_string()),
        }
    }
}
