//! Booking widget state machine for the experience page.
//!
//! The widget owns the departure selection and exactly one interactive
//! surface at a time: nothing, the date selector, or the availability
//! request form (which may be submitting or submitted). Phases carry their
//! own data, so a form draft cannot exist while the calendar is open.
//!
//! ## Transitions
//!
//! | From              | Action                 | To                |
//! |-------------------|------------------------|-------------------|
//! | `Idle`            | `open_calendar`        | `CalendarOpen`    |
//! | `Idle`            | `open_request_form`    | `RequestFormOpen` |
//! | `CalendarOpen`    | `select_day`/`close`   | `Idle`            |
//! | `CalendarOpen`    | `open_request_form`    | `RequestFormOpen` |
//! | `RequestFormOpen` | `cancel_request_form`  | `Idle`            |
//! | `RequestFormOpen` | `submit`               | `Submitting`      |
//! | `Submitting`      | `complete_submission`  | `Submitted`       |
//! | `Submitted`       | `reset`                | `Idle`            |
//!
//! `abandon` returns to `Idle` from anywhere and invalidates pending tickets.

use shared::{BookingConfig, BookingSelection, CalendarMonth, ConfigError, FormRequest, RequiredField, UiState};
use std::time::Duration;

use super::calendar::{build_calendar_month, is_preferred_departure};
use super::error::BookingError;
use super::submission::{SubmissionCycle, SubmissionTicket};

#[derive(Debug, Clone)]
enum Phase {
    Idle,
    CalendarOpen,
    Request(SubmissionCycle<FormRequest>),
}

/// Departure selection plus the calendar/request-form interaction
#[derive(Debug, Clone)]
pub struct BookingWidget {
    config: BookingConfig,
    selection: BookingSelection,
    phase: Phase,
}

impl Default for BookingWidget {
    fn default() -> Self {
        Self::new(BookingConfig::default())
    }
}

impl BookingWidget {
    /// Widget for `config`; an invalid config is logged and replaced by the
    /// default one
    pub fn new(config: BookingConfig) -> Self {
        match Self::try_new(config) {
            Ok(widget) => widget,
            Err(e) => {
                log::error!("❌ Invalid booking config ({}), using defaults", e);
                Self::from_valid(BookingConfig::default())
            }
        }
    }

    pub fn try_new(config: BookingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: BookingConfig) -> Self {
        let selected_day = config.default_departure_day;
        let selection = BookingSelection {
            selected_day,
            trip_duration_days: config.trip_duration_days,
        };

        Self {
            config,
            selection,
            phase: Phase::Idle,
        }
    }

    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    pub fn ui_state(&self) -> UiState {
        match &self.phase {
            Phase::Idle => UiState::Idle,
            Phase::CalendarOpen => UiState::CalendarOpen,
            Phase::Request(cycle) => cycle.ui_state(),
        }
    }

    pub fn selection(&self) -> BookingSelection {
        self.selection
    }

    pub fn selected_day(&self) -> u32 {
        self.selection.selected_day
    }

    /// Not clamped to the month; may exceed `days_in_month`
    pub fn return_day(&self) -> u32 {
        self.selection.return_day()
    }

    /// "15 Jun - 22 Jun"
    pub fn date_range_label(&self) -> String {
        self.selection.range_label(&self.config.month_abbreviation)
    }

    pub fn is_calendar_open(&self) -> bool {
        matches!(self.phase, Phase::CalendarOpen)
    }

    pub fn is_request_form_open(&self) -> bool {
        matches!(self.phase, Phase::Request(_))
    }

    /// The date selector accepts input only while no form is showing
    pub fn is_calendar_interactive(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::CalendarOpen)
    }

    /// Grid for the current selection
    pub fn calendar_month(&self) -> CalendarMonth {
        build_calendar_month(&self.config, self.selection.selected_day)
    }

    /// The availability request being edited or submitted
    pub fn form(&self) -> Option<&FormRequest> {
        match &self.phase {
            Phase::Request(cycle) => cycle.draft(),
            _ => None,
        }
    }

    pub fn pending_ticket(&self) -> Option<SubmissionTicket> {
        match &self.phase {
            Phase::Request(cycle) => cycle.pending_ticket(),
            _ => None,
        }
    }

    pub fn open_calendar(&mut self) -> Result<(), BookingError> {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::CalendarOpen;
                log::debug!("📅 Date selector opened");
                Ok(())
            }
            Phase::CalendarOpen => Ok(()),
            Phase::Request(_) => Err(BookingError::CalendarLocked(self.ui_state())),
        }
    }

    pub fn close_calendar(&mut self) -> Result<(), BookingError> {
        match self.phase {
            Phase::CalendarOpen => {
                self.phase = Phase::Idle;
                Ok(())
            }
            Phase::Idle => Ok(()),
            Phase::Request(_) => Err(BookingError::CalendarLocked(self.ui_state())),
        }
    }

    /// The selector button flips between open and closed
    pub fn toggle_calendar(&mut self) -> Result<(), BookingError> {
        if self.is_calendar_open() {
            self.close_calendar()
        } else {
            self.open_calendar()
        }
    }

    /// Commit a departure day and close the selector in one step
    pub fn select_day(&mut self, day: u32) -> Result<(), BookingError> {
        match self.phase {
            Phase::CalendarOpen => {}
            Phase::Idle => {
                return Err(BookingError::InvalidTransition {
                    state: UiState::Idle,
                    action: "select a day",
                })
            }
            Phase::Request(_) => return Err(BookingError::CalendarLocked(self.ui_state())),
        }

        if day < 1 || day > self.config.days_in_month {
            return Err(BookingError::DayOutOfRange {
                day,
                days_in_month: self.config.days_in_month,
            });
        }
        if self.config.restrict_to_preferred_departures && !is_preferred_departure(&self.config, day) {
            return Err(BookingError::NotPreferredDeparture(day));
        }

        self.selection.selected_day = day;
        self.phase = Phase::Idle;
        log::info!("📅 Departure set to {}", self.date_range_label());
        Ok(())
    }

    /// Show the availability form with an empty draft, closing the calendar
    pub fn open_request_form(&mut self) -> Result<(), BookingError> {
        match self.ui_state() {
            UiState::Idle | UiState::CalendarOpen => {
                let draft = FormRequest::with_guests(self.config.default_guests);
                let delay = Duration::from_millis(self.config.submission_delay_ms);
                self.phase = Phase::Request(SubmissionCycle::new(draft, delay));
                log::debug!("📝 Availability request form opened");
                Ok(())
            }
            UiState::RequestFormOpen => Ok(()),
            state => Err(BookingError::InvalidTransition {
                state,
                action: "open the request form",
            }),
        }
    }

    /// Editable draft, available only while the form is open and unsent
    pub fn form_mut(&mut self) -> Result<&mut FormRequest, BookingError> {
        let state = self.ui_state();
        match &mut self.phase {
            Phase::Request(cycle) => cycle.draft_mut().ok_or(BookingError::InvalidTransition {
                state,
                action: "edit the request",
            }),
            _ => Err(BookingError::InvalidTransition {
                state,
                action: "edit the request",
            }),
        }
    }

    /// Close the form and drop the draft
    pub fn cancel_request_form(&mut self) -> Result<(), BookingError> {
        match self.ui_state() {
            UiState::RequestFormOpen => {
                self.phase = Phase::Idle;
                log::debug!("📝 Availability request cancelled");
                Ok(())
            }
            state => Err(BookingError::InvalidTransition {
                state,
                action: "cancel the request",
            }),
        }
    }

    /// Start submitting when every required field is present
    pub fn submit(&mut self) -> Result<SubmissionTicket, BookingError> {
        let (min_guests, max_guests) = (self.config.min_guests, self.config.max_guests);
        let state = self.ui_state();
        let cycle = match &mut self.phase {
            Phase::Request(cycle) => cycle,
            _ => return Err(BookingError::InvalidTransition { state, action: "submit" }),
        };

        if let Some(draft) = cycle.draft_mut() {
            if !(min_guests..=max_guests).contains(&draft.guest_count) {
                return Err(BookingError::InvalidField(RequiredField::GuestCount));
            }
        }

        let ticket = cycle.submit()?;
        log::info!(
            "📨 Submitting availability request for {} (ticket {})",
            self.date_range_label(),
            ticket.id
        );
        Ok(ticket)
    }

    /// Finish a pending submission; returns the request that was sent
    pub fn complete_submission(&mut self, ticket: &SubmissionTicket) -> Result<FormRequest, BookingError> {
        match &mut self.phase {
            Phase::Request(cycle) => {
                let request = cycle.complete(ticket)?;
                log::info!("✅ Availability request {} submitted", ticket.id);
                Ok(request)
            }
            _ => Err(BookingError::StaleSubmission),
        }
    }

    /// Leave `Submitted` and return to the call-to-action view
    pub fn reset(&mut self) -> Result<(), BookingError> {
        match self.ui_state() {
            UiState::Submitted => {
                self.phase = Phase::Idle;
                Ok(())
            }
            state => Err(BookingError::InvalidTransition { state, action: "reset" }),
        }
    }

    /// Drop whatever is open, including a pending submission
    pub fn abandon(&mut self) {
        if let Some(ticket) = self.pending_ticket() {
            log::warn!("⚠️ Abandoning pending availability request {}", ticket.id);
        }
        self.phase = Phase::Idle;
    }
}
