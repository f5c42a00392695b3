//! Contact page form: the same submission cycle as the availability
//! request, without a calendar. The form is always visible; after a
//! successful send it shows a confirmation until reset.

use shared::{ContactConfig, ContactRequest, UiState};
use std::time::Duration;

use super::error::BookingError;
use super::submission::{SubmissionCycle, SubmissionTicket};

#[derive(Debug, Clone)]
pub struct ContactForm {
    config: ContactConfig,
    cycle: SubmissionCycle<ContactRequest>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(ContactConfig::default())
    }
}

impl ContactForm {
    pub fn new(config: ContactConfig) -> Self {
        let cycle = Self::fresh_cycle(&config);
        Self { config, cycle }
    }

    fn fresh_cycle(config: &ContactConfig) -> SubmissionCycle<ContactRequest> {
        SubmissionCycle::new(
            ContactRequest::default(),
            Duration::from_millis(config.submission_delay_ms),
        )
    }

    /// `RequestFormOpen`, `Submitting` or `Submitted`
    pub fn ui_state(&self) -> UiState {
        self.cycle.ui_state()
    }

    pub fn is_submitting(&self) -> bool {
        self.ui_state() == UiState::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.ui_state() == UiState::Submitted
    }

    pub fn request(&self) -> Option<&ContactRequest> {
        self.cycle.draft()
    }

    pub fn form_mut(&mut self) -> Result<&mut ContactRequest, BookingError> {
        let state = self.ui_state();
        self.cycle.draft_mut().ok_or(BookingError::InvalidTransition {
            state,
            action: "edit the message",
        })
    }

    pub fn pending_ticket(&self) -> Option<SubmissionTicket> {
        self.cycle.pending_ticket()
    }

    pub fn submit(&mut self) -> Result<SubmissionTicket, BookingError> {
        let ticket = self.cycle.submit()?;
        log::info!("📨 Sending contact message (ticket {})", ticket.id);
        Ok(ticket)
    }

    pub fn complete_submission(&mut self, ticket: &SubmissionTicket) -> Result<ContactRequest, BookingError> {
        let request = self.cycle.complete(ticket)?;
        log::info!("✅ Contact message {} sent", ticket.id);
        Ok(request)
    }

    /// "Send another message": back to an empty form
    pub fn reset(&mut self) -> Result<(), BookingError> {
        match self.ui_state() {
            UiState::Submitted => {
                self.cycle = Self::fresh_cycle(&self.config);
                Ok(())
            }
            state => Err(BookingError::InvalidTransition { state, action: "reset" }),
        }
    }

    /// Drop the draft and any pending send
    pub fn abandon(&mut self) {
        if let Some(ticket) = self.pending_ticket() {
            log::warn!("⚠️ Abandoning pending contact message {}", ticket.id);
        }
        self.cycle = Self::fresh_cycle(&self.config);
    }
}
