use std::rc::Rc;

use backend::{BookingError, BookingWidget, Notifier, SubmissionTicket};
use shared::{BookingConfig, FormRequest, Notification};
use yew::prelude::*;

use super::use_submission_timer::use_submission_timer;
use crate::services::notifier::ToastNotifier;

/// A single field change in the availability form
#[derive(Debug, Clone, PartialEq)]
pub enum FormEdit {
    FullName(String),
    Email(String),
    Phone(String),
    Guests(u32),
    Message(String),
}

impl FormEdit {
    fn apply(self, form: &mut FormRequest) {
        match self {
            FormEdit::FullName(value) => form.full_name = value,
            FormEdit::Email(value) => form.email = value,
            FormEdit::Phone(value) => form.phone = value,
            FormEdit::Guests(value) => form.guest_count = value,
            FormEdit::Message(value) => form.message = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingAction {
    ToggleCalendar,
    SelectDay(u32),
    OpenRequestForm,
    CancelRequestForm,
    Edit(FormEdit),
    Submit,
    Complete(SubmissionTicket),
    Reset,
}

/// Booking widget plus what the view needs to report back to the user
#[derive(Debug, Clone, Default)]
pub struct BookingModel {
    pub widget: BookingWidget,
    /// Why the last action was refused, if it was
    pub last_error: Option<BookingError>,
    /// Latest successful completion, delivered to the notifier once
    pub completed: Option<(SubmissionTicket, Notification)>,
}

impl BookingModel {
    pub fn new(config: BookingConfig) -> Self {
        Self {
            widget: BookingWidget::new(config),
            ..Self::default()
        }
    }
}

impl Reducible for BookingModel {
    type Action = BookingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let widget = &mut next.widget;

        let result = match action {
            BookingAction::ToggleCalendar => widget.toggle_calendar(),
            BookingAction::SelectDay(day) => widget.select_day(day),
            BookingAction::OpenRequestForm => widget.open_request_form(),
            BookingAction::CancelRequestForm => widget.cancel_request_form(),
            BookingAction::Edit(edit) => widget.form_mut().map(|form| edit.apply(form)),
            BookingAction::Submit => widget.submit().map(|_| ()),
            BookingAction::Reset => widget.reset(),
            BookingAction::Complete(ticket) => {
                match widget.complete_submission(&ticket) {
                    Ok(_) => {
                        next.completed = Some((ticket, Notification::availability_requested()));
                    }
                    Err(e) => log::debug!("⏱️ Ignoring completion {}: {}", ticket.id, e),
                }
                return Rc::new(next);
            }
        };

        match result {
            Ok(()) => next.last_error = None,
            Err(e) => {
                log::warn!("⚠️ Booking action refused: {}", e);
                next.last_error = Some(e);
            }
        }
        Rc::new(next)
    }
}

/// Drive a booking widget: reducer state, the submission timer, and the
/// success notification
#[hook]
pub fn use_booking(config: BookingConfig, on_notify: Callback<Notification>) -> UseReducerHandle<BookingModel> {
    let model = use_reducer(move || BookingModel::new(config));

    let on_fire = {
        let dispatcher = model.dispatcher();
        Callback::from(move |ticket| dispatcher.dispatch(BookingAction::Complete(ticket)))
    };
    use_submission_timer(model.widget.pending_ticket(), on_fire);

    use_effect_with(model.completed.clone(), move |completed| {
        if let Some((_, notification)) = completed {
            ToastNotifier::new(on_notify).notify(notification);
        }
        || ()
    });

    model
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::UiState;

    fn apply(model: Rc<BookingModel>, actions: Vec<BookingAction>) -> Rc<BookingModel> {
        actions.into_iter().fold(model, |model, action| model.reduce(action))
    }

    #[test]
    fn test_reducer_happy_path() {
        let model = apply(
            Rc::new(BookingModel::default()),
            vec![
                BookingAction::ToggleCalendar,
                BookingAction::SelectDay(22),
                BookingAction::OpenRequestForm,
                BookingAction::Edit(FormEdit::FullName("Jane Doe".into())),
                BookingAction::Edit(FormEdit::Email("jane@x.com".into())),
                BookingAction::Edit(FormEdit::Phone("123".into())),
                BookingAction::Edit(FormEdit::Guests(4)),
                BookingAction::Submit,
            ],
        );
        assert_eq!(model.widget.ui_state(), UiState::Submitting);
        assert_eq!(model.widget.form().map(|f| f.guest_count), Some(4));
        assert!(model.last_error.is_none());

        let ticket = model.widget.pending_ticket().unwrap();
        let model = model.reduce(BookingAction::Complete(ticket));
        assert_eq!(model.widget.ui_state(), UiState::Submitted);
        assert_eq!(model.completed.as_ref().map(|(t, _)| *t), Some(ticket));
    }

    #[test]
    fn test_refused_action_is_reported() {
        let model = apply(
            Rc::new(BookingModel::default()),
            vec![BookingAction::OpenRequestForm, BookingAction::Submit],
        );
        assert_eq!(model.widget.ui_state(), UiState::RequestFormOpen);
        assert!(matches!(model.last_error, Some(BookingError::MissingFields(_))));

        let model = model.reduce(BookingAction::CancelRequestForm);
        assert!(model.last_error.is_none());
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let model = apply(
            Rc::new(BookingModel::default()),
            vec![
                BookingAction::OpenRequestForm,
                BookingAction::Edit(FormEdit::FullName("Jane Doe".into())),
                BookingAction::Edit(FormEdit::Email("jane@x.com".into())),
                BookingAction::Edit(FormEdit::Phone("123".into())),
                BookingAction::Submit,
            ],
        );
        let ticket = model.widget.pending_ticket().unwrap();
        let model = model.reduce(BookingAction::Complete(ticket));
        let model = model.reduce(BookingAction::Complete(ticket));

        assert_eq!(model.widget.ui_state(), UiState::Submitted);
        assert!(model.last_error.is_none());
    }
}
