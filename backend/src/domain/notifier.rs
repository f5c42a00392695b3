//! Success notifications for completed submissions. The widget never shows
//! a dialog itself; whoever drives it passes a [`Notifier`].

use shared::Notification;
use std::sync::{Mutex, PoisonError};

pub trait Notifier {
    fn notify(&self, notification: &Notification);
}

/// Writes notifications to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) {
        log::info!("🔔 {:?}: {}", notification.kind, notification.message);
    }
}

/// Keeps every notification it receives
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    received: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> Vec<Notification> {
        self.received.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.received
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::NotificationKind;

    #[test]
    fn test_recording_notifier() {
        let notifier = RecordingNotifier::new();
        notifier.notify(&Notification::availability_requested());
        notifier.notify(&Notification::message_sent());

        let kinds: Vec<_> = notifier.received().into_iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NotificationKind::AvailabilityRequested, NotificationKind::MessageSent]);
    }
}
