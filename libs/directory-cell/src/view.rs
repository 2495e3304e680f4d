//! Declarative card views derived from the in-memory directory. Rendering
//! never touches the outside world; the binary decides how a view reaches
//! the screen.

use crate::models::Doctor;

pub const NO_RESULTS_NOTICE: &str = "No doctors found.";
pub const LOAD_FAILURE_NOTICE: &str = "Failed to load doctors.";
pub const NO_AVAILABILITY_PLACEHOLDER: &str = "No availability provided";

/// What pressing a card's book button does. Decided at render time from the
/// session's login state and carried on the card as data, so the event loop
/// never consults ambient state at click time.
#[derive(Debug, Clone, PartialEq)]
pub enum BookAction {
    OpenBooking(i64),
    RedirectToLogin,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoctorCard {
    pub doctor_id: i64,
    pub full_name: String,
    pub specialization: String,
    pub phone: String,
    pub email: String,
    pub availability: Vec<(String, String)>,
    pub action: BookAction,
}

impl DoctorCard {
    fn from_doctor(doctor: &Doctor, is_authenticated: bool) -> Self {
        let action = if is_authenticated {
            BookAction::OpenBooking(doctor.id)
        } else {
            BookAction::RedirectToLogin
        };

        Self {
            doctor_id: doctor.id,
            full_name: doctor.full_name.clone(),
            specialization: doctor.specialization.clone(),
            phone: doctor.phone.clone(),
            email: doctor.email.clone(),
            availability: doctor.availability.entries().to_vec(),
            action,
        }
    }

    /// Visible availability lines, one per day/time pair, or the placeholder
    /// when the doctor published no hours.
    pub fn availability_lines(&self) -> Vec<String> {
        if self.availability.is_empty() {
            return vec![NO_AVAILABILITY_PLACEHOLDER.to_string()];
        }

        self.availability
            .iter()
            .map(|(day, hours)| format!("{}: {}", day, hours))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryView {
    pub cards: Vec<DoctorCard>,
    pub notice: Option<&'static str>,
}

impl DirectoryView {
    /// Render a doctor list (full or filtered) into its card view.
    ///
    /// Pure and idempotent: the same input yields the same view, and a fresh
    /// view replaces any previous one outright rather than appending.
    pub fn render<'a, I>(doctors: I, is_authenticated: bool) -> Self
    where
        I: IntoIterator<Item = &'a Doctor>,
    {
        let cards: Vec<DoctorCard> = doctors
            .into_iter()
            .map(|doctor| DoctorCard::from_doctor(doctor, is_authenticated))
            .collect();

        let notice = cards.is_empty().then_some(NO_RESULTS_NOTICE);

        Self { cards, notice }
    }

    /// The static view shown when the directory fetch itself failed.
    pub fn load_failed() -> Self {
        Self {
            cards: Vec::new(),
            notice: Some(LOAD_FAILURE_NOTICE),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionItem {
    pub doctor_id: i64,
    pub full_name: String,
    pub specialization: String,
}

/// The search-as-you-type panel. Hidden whenever it holds no items.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionPanel {
    pub items: Vec<SuggestionItem>,
}

impl SuggestionPanel {
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn render<'a, I>(matches: I) -> Self
    where
        I: IntoIterator<Item = &'a Doctor>,
    {
        let items = matches
            .into_iter()
            .map(|doctor| SuggestionItem {
                doctor_id: doctor.id,
                full_name: doctor.full_name.clone(),
                specialization: doctor.specialization.clone(),
            })
            .collect();

        Self { items }
    }

    pub fn is_visible(&self) -> bool {
        !self.items.is_empty()
    }
}
