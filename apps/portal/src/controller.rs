use std::sync::Arc;

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use tracing::{error, info};

use booking_cell::{BookingForm, BookingService, ModalState};
use directory_cell::models::Doctor;
use directory_cell::services::search;
use directory_cell::view::{DirectoryView, SuggestionPanel};
use directory_cell::DirectoryService;
use messaging_cell::MessageService;
use session_cell::SessionService;
use shared_config::PortalConfig;
use shared_gateway::BackendClient;
use shared_models::PortalError;

use crate::view::{Feedback, ModalView, PageView};

/// Everything the page knows. Created empty at init, filled by the load
/// sequence, and from then on only written by event handlers here; the
/// doctor list is only ever replaced wholesale.
#[derive(Debug, Default)]
pub struct PageState {
    pub doctors: Vec<Doctor>,
    pub is_authenticated: bool,
    pub query: String,
    pub selected_doctor: Option<i64>,
    pub directory_failed: bool,
    pub modal: ModalState,
    pub form: BookingForm,
}

/// One user interaction with the page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    SearchChanged(String),
    SuggestionPicked(i64),
    BookPressed(i64),
    DateEntered(NaiveDate),
    TimeEntered(NaiveTime),
    SubmitPressed,
    CancelPressed,
}

pub struct PageController {
    config: PortalConfig,
    session: SessionService,
    directory: DirectoryService,
    booking: BookingService,
    messaging: MessageService,
    state: PageState,
}

impl PageController {
    pub fn new(config: PortalConfig) -> Result<Self> {
        let backend = Arc::new(BackendClient::new(&config)?);

        Ok(Self {
            session: SessionService::new(Arc::clone(&backend)),
            directory: DirectoryService::new(Arc::clone(&backend)),
            booking: BookingService::new(Arc::clone(&backend)),
            messaging: MessageService::new(backend),
            config,
            state: PageState::default(),
        })
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Page-load sequence: the login probe runs first because card actions
    /// depend on its answer, then the directory fetch. The startup ping is
    /// dispatched alongside and never blocks the page.
    pub async fn init(&mut self) -> PageView {
        let messaging = self.messaging.clone();
        tokio::spawn(async move { messaging.send_startup_ping().await });

        self.state.is_authenticated = self.session.check_login().await;
        info!("Session authenticated: {}", self.state.is_authenticated);

        match self.directory.load_doctors().await {
            Ok(doctors) => {
                self.state.doctors = doctors;
            }
            Err(err) => {
                error!("Error fetching doctors: {:#}", err);
                self.state.directory_failed = true;
            }
        }

        self.render(None)
    }

    pub async fn handle(&mut self, event: PageEvent) -> PageView {
        match event {
            PageEvent::SearchChanged(query) => {
                self.state.selected_doctor = None;
                self.state.query = query;
                self.render(None)
            }
            PageEvent::SuggestionPicked(doctor_id) => {
                let name = self
                    .find_doctor(doctor_id)
                    .map(|doctor| doctor.full_name.clone());
                if let Some(name) = name {
                    self.state.query = name;
                    self.state.selected_doctor = Some(doctor_id);
                }
                self.render(None)
            }
            PageEvent::BookPressed(doctor_id) => {
                if !self.state.is_authenticated {
                    return self.render_with_redirect(booking_cell::LOGIN_REQUIRED_MESSAGE);
                }
                if self.find_doctor(doctor_id).is_some() {
                    self.state.modal.open_for(doctor_id);
                    self.state.form.doctor_id = Some(doctor_id);
                }
                self.render(None)
            }
            PageEvent::DateEntered(date) => {
                self.state.form.scheduled_date = Some(date);
                self.render(None)
            }
            PageEvent::TimeEntered(time) => {
                self.state.form.scheduled_time = Some(time);
                self.render(None)
            }
            PageEvent::SubmitPressed => self.submit().await,
            PageEvent::CancelPressed => {
                self.state.modal.close();
                self.render(None)
            }
        }
    }

    async fn submit(&mut self) -> PageView {
        let outcome = self
            .booking
            .submit(&self.state.form, self.state.is_authenticated)
            .await;

        match outcome {
            Ok(receipt) => {
                self.state.modal.close();
                self.state.form = BookingForm::default();
                self.render(Some(Feedback::Confirmation(receipt.confirmation_message())))
            }
            Err(err) if err.requires_login() => {
                let warning = err.user_message().to_string();
                self.render_with_redirect(&warning)
            }
            // Validation and backend failures leave the modal open for a
            // retry with the same field state.
            Err(err) => self.render(Some(Feedback::Warning(warning_text(&err)))),
        }
    }

    fn find_doctor(&self, doctor_id: i64) -> Option<&Doctor> {
        self.state.doctors.iter().find(|doc| doc.id == doctor_id)
    }

    fn render(&self, feedback: Option<Feedback>) -> PageView {
        PageView {
            directory: self.render_directory(),
            suggestions: self.render_suggestions(),
            modal: ModalView::from_state(&self.state.modal, &self.state.form),
            feedback,
            redirect: None,
        }
    }

    fn render_with_redirect(&self, warning: &str) -> PageView {
        let mut view = self.render(Some(Feedback::Warning(warning.to_string())));
        view.redirect = Some(self.config.login_url());
        view
    }

    fn render_directory(&self) -> DirectoryView {
        if self.state.directory_failed {
            return DirectoryView::load_failed();
        }

        let is_authenticated = self.state.is_authenticated;

        if let Some(doctor_id) = self.state.selected_doctor {
            if let Some(doctor) = self.find_doctor(doctor_id) {
                return DirectoryView::render(std::iter::once(doctor), is_authenticated);
            }
        }

        if self.state.query.is_empty() {
            DirectoryView::render(&self.state.doctors, is_authenticated)
        } else {
            let matches = search::filter_doctors(&self.state.doctors, &self.state.query);
            DirectoryView::render(matches, is_authenticated)
        }
    }

    fn render_suggestions(&self) -> SuggestionPanel {
        if self.state.selected_doctor.is_some() || self.state.query.is_empty() {
            return SuggestionPanel::hidden();
        }

        SuggestionPanel::render(search::suggest(&self.state.doctors, &self.state.query))
    }
}

/// The booking endpoint's own error text gets the `Error:` prefix; local
/// warnings are shown as-is.
fn warning_text(err: &PortalError) -> String {
    match err {
        PortalError::Rejected(message) => format!("Error: {}", message),
        other => other.user_message().to_string(),
    }
}
