use gloo::timers::callback::Timeout;
use shared::{Notification, NotificationKind};
use yew::prelude::*;

const TOAST_DISMISS_MS: u32 = 3000;

/// A notification as delivered to the toast. Every delivery gets its own
/// id, so a repeat of the same text still gets a full display period.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub id: u64,
    pub notification: Notification,
}

/// What the auto-dismiss timer restarts on
fn dismiss_key(message: &Option<ToastMessage>) -> Option<u64> {
    message.as_ref().map(|m| m.id)
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<ToastMessage>,
    pub on_dismiss: Callback<()>,
}

/// Success message shown after a submission completes; hides itself after a
/// few seconds
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(dismiss_key(&props.message), move |key| {
            let timeout = (*key).map(|_| Timeout::new(TOAST_DISMISS_MS, move || on_dismiss.emit(())));
            move || drop(timeout)
        });
    }

    let Some(message) = props.message.as_ref() else {
        return html! {};
    };
    let notification = &message.notification;

    let kind_class = match notification.kind {
        NotificationKind::AvailabilityRequested => "toast-booking",
        NotificationKind::MessageSent => "toast-contact",
    };
    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={classes!("toast", kind_class)} role="status">
            <span class="toast-message">{&notification.message}</span>
            <button class="toast-close" onclick={on_close} aria-label="Dismiss">{"×"}</button>
        </div>
    }
}
