use std::rc::Rc;

use backend::{BookingError, ContactForm, Notifier, SubmissionTicket};
use shared::{ContactConfig, ContactRequest, Notification};
use yew::prelude::*;

use super::use_submission_timer::use_submission_timer;
use crate::services::notifier::ToastNotifier;

#[derive(Debug, Clone, PartialEq)]
pub enum ContactEdit {
    Name(String),
    Email(String),
    Phone(String),
    Message(String),
}

impl ContactEdit {
    fn apply(self, request: &mut ContactRequest) {
        match self {
            ContactEdit::Name(value) => request.name = value,
            ContactEdit::Email(value) => request.email = value,
            ContactEdit::Phone(value) => request.phone = value,
            ContactEdit::Message(value) => request.message = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContactAction {
    Edit(ContactEdit),
    Submit,
    Complete(SubmissionTicket),
    Reset,
}

#[derive(Debug, Clone, Default)]
pub struct ContactModel {
    pub form: ContactForm,
    pub last_error: Option<BookingError>,
    pub completed: Option<(SubmissionTicket, Notification)>,
}

impl ContactModel {
    pub fn new(config: ContactConfig) -> Self {
        Self {
            form: ContactForm::new(config),
            ..Self::default()
        }
    }
}

impl Reducible for ContactModel {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        let result = match action {
            ContactAction::Edit(edit) => next.form.form_mut().map(|request| edit.apply(request)),
            ContactAction::Submit => next.form.submit().map(|_| ()),
            ContactAction::Reset => next.form.reset(),
            ContactAction::Complete(ticket) => {
                match next.form.complete_submission(&ticket) {
                    Ok(_) => next.completed = Some((ticket, Notification::message_sent())),
                    Err(e) => log::debug!("⏱️ Ignoring completion {}: {}", ticket.id, e),
                }
                return Rc::new(next);
            }
        };

        match result {
            Ok(()) => next.last_error = None,
            Err(e) => {
                log::warn!("⚠️ Contact action refused: {}", e);
                next.last_error = Some(e);
            }
        }
        Rc::new(next)
    }
}

#[hook]
pub fn use_contact_form(config: ContactConfig, on_notify: Callback<Notification>) -> UseReducerHandle<ContactModel> {
    let model = use_reducer(move || ContactModel::new(config));

    let on_fire = {
        let dispatcher = model.dispatcher();
        Callback::from(move |ticket| dispatcher.dispatch(ContactAction::Complete(ticket)))
    };
    use_submission_timer(model.form.pending_ticket(), on_fire);

    use_effect_with(model.completed.clone(), move |completed| {
        if let Some((_, notification)) = completed {
            ToastNotifier::new(on_notify).notify(notification);
        }
        || ()
    });

    model
}
