use backend::SubmissionTicket;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// Fire `on_fire` once the pending ticket's delay has elapsed.
///
/// The timeout lives as long as the ticket stays pending; a new ticket or
/// unmounting the component drops it, which cancels the completion.
#[hook]
pub fn use_submission_timer(pending: Option<SubmissionTicket>, on_fire: Callback<SubmissionTicket>) {
    use_effect_with(pending, move |pending| {
        let timeout = (*pending).map(|ticket| {
            let millis = u32::try_from(ticket.delay.as_millis()).unwrap_or(u32::MAX);
            Timeout::new(millis, move || on_fire.emit(ticket))
        });
        move || drop(timeout)
    });
}
