use backend::Notifier;
use shared::Notification;
use yew::Callback;

/// Shows notifications through the app-level toast
pub struct ToastNotifier {
    show: Callback<Notification>,
}

impl ToastNotifier {
    pub fn new(show: Callback<Notification>) -> Self {
        Self { show }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: &Notification) {
        self.show.emit(notification.clone());
    }
}
