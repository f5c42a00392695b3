//! Simulated form submission shared by the booking and contact forms.
//!
//! A cycle moves `Editing -> Submitting -> Submitted`. Submitting hands the
//! caller a [`SubmissionTicket`]; the caller waits `ticket.delay` and then
//! completes with the same ticket. A ticket that no longer matches the
//! pending submission is refused, which is how cancellation works.

use serde::{Deserialize, Serialize};
use shared::UiState;
use std::time::Duration;
use uuid::Uuid;

use super::error::BookingError;
use super::validation::Submittable;

/// Handle for one pending submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionTicket {
    pub id: Uuid,
    /// How long the caller should wait before completing
    pub delay: Duration,
}

#[derive(Debug, Clone)]
enum Stage<R> {
    Editing(R),
    Submitting { request: R, ticket: SubmissionTicket },
    Submitted,
}

/// One form's edit/submit/complete lifecycle
#[derive(Debug, Clone)]
pub struct SubmissionCycle<R> {
    stage: Stage<R>,
    delay: Duration,
}

impl<R: Submittable> SubmissionCycle<R> {
    pub fn new(draft: R, delay: Duration) -> Self {
        Self {
            stage: Stage::Editing(draft),
            delay,
        }
    }

    /// `RequestFormOpen`, `Submitting` or `Submitted`
    pub fn ui_state(&self) -> UiState {
        match self.stage {
            Stage::Editing(_) => UiState::RequestFormOpen,
            Stage::Submitting { .. } => UiState::Submitting,
            Stage::Submitted => UiState::Submitted,
        }
    }

    /// The form contents while editing or submitting
    pub fn draft(&self) -> Option<&R> {
        match &self.stage {
            Stage::Editing(request) | Stage::Submitting { request, .. } => Some(request),
            Stage::Submitted => None,
        }
    }

    /// Editable only before submission
    pub fn draft_mut(&mut self) -> Option<&mut R> {
        match &mut self.stage {
            Stage::Editing(request) => Some(request),
            _ => None,
        }
    }

    pub fn pending_ticket(&self) -> Option<SubmissionTicket> {
        match &self.stage {
            Stage::Submitting { ticket, .. } => Some(*ticket),
            _ => None,
        }
    }

    /// Validate the draft and start submitting it
    pub fn submit(&mut self) -> Result<SubmissionTicket, BookingError> {
        let request = match &self.stage {
            Stage::Editing(request) => request,
            _ => {
                return Err(BookingError::InvalidTransition {
                    state: self.ui_state(),
                    action: "submit",
                })
            }
        };

        let missing = request.missing_fields();
        if !missing.is_empty() {
            return Err(BookingError::MissingFields(missing));
        }
        if let Some(field) = request.invalid_field() {
            return Err(BookingError::InvalidField(field));
        }

        let ticket = SubmissionTicket {
            id: Uuid::new_v4(),
            delay: self.delay,
        };
        let request = request.clone();
        self.stage = Stage::Submitting { request, ticket };
        Ok(ticket)
    }

    /// Finish the pending submission, handing back what was submitted
    pub fn complete(&mut self, ticket: &SubmissionTicket) -> Result<R, BookingError> {
        match std::mem::replace(&mut self.stage, Stage::Submitted) {
            Stage::Submitting { request, ticket: pending } if pending.id == ticket.id => Ok(request),
            other => {
                self.stage = other;
                Err(BookingError::StaleSubmission)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{ContactRequest, RequiredField};

    fn filled() -> ContactRequest {
        ContactRequest {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            phone: String::new(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn test_submit_and_complete() {
        let mut cycle = SubmissionCycle::new(filled(), Duration::from_millis(1500));
        assert_eq!(cycle.ui_state(), UiState::RequestFormOpen);

        let ticket = cycle.submit().unwrap();
        assert_eq!(ticket.delay, Duration::from_millis(1500));
        assert_eq!(cycle.ui_state(), UiState::Submitting);
        assert_eq!(cycle.pending_ticket(), Some(ticket));
        assert!(cycle.draft_mut().is_none());

        let submitted = cycle.complete(&ticket).unwrap();
        assert_eq!(submitted, filled());
        assert_eq!(cycle.ui_state(), UiState::Submitted);
        assert!(cycle.draft().is_none());
    }

    #[test]
    fn test_missing_fields_block_submit() {
        let mut cycle = SubmissionCycle::new(ContactRequest::default(), Duration::ZERO);
        let err = cycle.submit().unwrap_err();
        assert!(matches!(err, BookingError::MissingFields(ref f) if f.len() == 3));
        assert_eq!(cycle.ui_state(), UiState::RequestFormOpen);
    }

    #[test]
    fn test_invalid_email_blocks_submit() {
        let mut request = filled();
        request.email = "jane".into();
        let mut cycle = SubmissionCycle::new(request, Duration::ZERO);
        assert_eq!(cycle.submit(), Err(BookingError::InvalidField(RequiredField::Email)));
        assert_eq!(cycle.ui_state(), UiState::RequestFormOpen);
    }

    #[test]
    fn test_foreign_ticket_is_refused() {
        let mut cycle = SubmissionCycle::new(filled(), Duration::ZERO);
        let ticket = cycle.submit().unwrap();
        let foreign = SubmissionTicket { id: Uuid::new_v4(), delay: Duration::ZERO };

        assert_eq!(cycle.complete(&foreign), Err(BookingError::StaleSubmission));
        assert_eq!(cycle.ui_state(), UiState::Submitting);
        assert_eq!(cycle.pending_ticket(), Some(ticket));
    }

    #[test]
    fn test_double_submit_and_double_complete() {
        let mut cycle = SubmissionCycle::new(filled(), Duration::ZERO);
        let ticket = cycle.submit().unwrap();
        assert!(matches!(cycle.submit(), Err(BookingError::InvalidTransition { .. })));

        cycle.complete(&ticket).unwrap();
        assert_eq!(cycle.complete(&ticket), Err(BookingError::StaleSubmission));
        assert_eq!(cycle.ui_state(), UiState::Submitted);
    }
}
