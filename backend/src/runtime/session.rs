use shared::{Notification, UiState};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::domain::{BookingError, BookingWidget, ContactForm, Notifier, SubmissionTicket};

/// A form flow whose submission completes after a delay
pub trait TimedFlow: Send + 'static {
    fn ui_state(&self) -> UiState;
    fn submit(&mut self) -> Result<SubmissionTicket, BookingError>;
    fn pending_ticket(&self) -> Option<SubmissionTicket>;
    /// Complete the submission and describe what the user should be told
    fn complete(&mut self, ticket: &SubmissionTicket) -> Result<Notification, BookingError>;
    fn abandon(&mut self);
}

impl TimedFlow for BookingWidget {
    fn ui_state(&self) -> UiState {
        BookingWidget::ui_state(self)
    }

    fn submit(&mut self) -> Result<SubmissionTicket, BookingError> {
        BookingWidget::submit(self)
    }

    fn pending_ticket(&self) -> Option<SubmissionTicket> {
        BookingWidget::pending_ticket(self)
    }

    fn complete(&mut self, ticket: &SubmissionTicket) -> Result<Notification, BookingError> {
        self.complete_submission(ticket)
            .map(|_| Notification::availability_requested())
    }

    fn abandon(&mut self) {
        BookingWidget::abandon(self)
    }
}

impl TimedFlow for ContactForm {
    fn ui_state(&self) -> UiState {
        ContactForm::ui_state(self)
    }

    fn submit(&mut self) -> Result<SubmissionTicket, BookingError> {
        ContactForm::submit(self)
    }

    fn pending_ticket(&self) -> Option<SubmissionTicket> {
        ContactForm::pending_ticket(self)
    }

    fn complete(&mut self, ticket: &SubmissionTicket) -> Result<Notification, BookingError> {
        self.complete_submission(ticket).map(|_| Notification::message_sent())
    }

    fn abandon(&mut self) {
        ContactForm::abandon(self)
    }
}

/// Owns a flow, its notifier, and the timer of the pending submission.
///
/// Every mutation goes through the session, which keeps exactly one timer
/// running for whatever ticket the flow is waiting on.
pub struct FlowSession<F, N> {
    flow: Arc<Mutex<F>>,
    notifier: Arc<N>,
    pending: Option<PendingTimer>,
}

struct PendingTimer {
    ticket: SubmissionTicket,
    handle: JoinHandle<()>,
}

pub type BookingSession<N> = FlowSession<BookingWidget, N>;
pub type ContactSession<N> = FlowSession<ContactForm, N>;

fn lock<F>(flow: &Mutex<F>) -> MutexGuard<'_, F> {
    flow.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<F, N> FlowSession<F, N>
where
    F: TimedFlow,
    N: Notifier + Send + Sync + 'static,
{
    pub fn new(flow: F, notifier: Arc<N>) -> Self {
        Self {
            flow: Arc::new(Mutex::new(flow)),
            notifier,
            pending: None,
        }
    }

    /// Run an action against the flow, then start or cancel the timer to
    /// match the flow's pending ticket.
    ///
    /// A submission started here without a tokio runtime cannot complete;
    /// it is logged and the flow is abandoned.
    pub fn with<T>(&mut self, action: impl FnOnce(&mut F) -> T) -> T {
        let result = action(&mut lock(&self.flow));
        self.sync_timer();
        result
    }

    pub fn snapshot(&self) -> F
    where
        F: Clone,
    {
        lock(&self.flow).clone()
    }

    pub fn ui_state(&self) -> UiState {
        lock(&self.flow).ui_state()
    }

    /// Submit and schedule completion after the ticket's delay.
    ///
    /// Refused with `NoRuntime`, state unchanged, outside a tokio runtime.
    pub fn submit(&mut self) -> Result<SubmissionTicket, BookingError> {
        Handle::try_current().map_err(|_| BookingError::NoRuntime)?;
        self.with(|flow| flow.submit())
    }

    fn sync_timer(&mut self) {
        let ticket = lock(&self.flow).pending_ticket();
        if ticket == self.pending.as_ref().map(|timer| timer.ticket) {
            return;
        }

        self.cancel_timer();
        if let Some(ticket) = ticket {
            if let Err(e) = self.schedule(ticket) {
                log::error!("❌ Cannot complete submission {}: {}", ticket.id, e);
                lock(&self.flow).abandon();
            }
        }
    }

    fn schedule(&mut self, ticket: SubmissionTicket) -> Result<(), BookingError> {
        let runtime = Handle::try_current().map_err(|_| BookingError::NoRuntime)?;

        let flow = Arc::clone(&self.flow);
        let notifier = Arc::clone(&self.notifier);
        let handle = runtime.spawn(async move {
            tokio::time::sleep(ticket.delay).await;
            let outcome = lock(&flow).complete(&ticket);
            match outcome {
                Ok(notification) => notifier.notify(&notification),
                Err(e) => log::debug!("⏱️ Dropped completion for {}: {}", ticket.id, e),
            }
        });
        self.pending = Some(PendingTimer { ticket, handle });
        Ok(())
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.pending.take() {
            timer.handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|timer| !timer.handle.is_finished())
    }

    /// Wait for the pending submission, if any, to resolve
    pub async fn settle(&mut self) {
        if let Some(timer) = self.pending.take() {
            if let Err(e) = timer.handle.await {
                if !e.is_cancelled() {
                    log::error!("❌ Submission task failed: {}", e);
                }
            }
        }
    }

    /// Cancel the pending timer and drop the flow back to its start
    pub fn abandon(&mut self) {
        self.with(|flow| flow.abandon());
    }
}

impl<F, N> Drop for FlowSession<F, N> {
    fn drop(&mut self) {
        if let Some(timer) = self.pending.take() {
            timer.handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LogNotifier, RecordingNotifier};
    use shared::NotificationKind;
    use std::time::Duration;
    use tokio::time::Instant;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn fill_booking(widget: &mut BookingWidget) {
        let form = widget.form_mut().unwrap();
        form.full_name = "Jane Doe".into();
        form.email = "jane@x.com".into();
        form.phone = "123".into();
    }

    #[tokio::test(start_paused = true)]
    async fn test_booking_end_to_end() {
        init_logging();
        let notifier = Arc::new(RecordingNotifier::new());
        let mut session = BookingSession::new(BookingWidget::default(), Arc::clone(&notifier));

        session.with(|w| {
            w.open_calendar()?;
            w.select_day(22)
        }).unwrap();
        let widget = session.snapshot();
        assert_eq!(widget.ui_state(), UiState::Idle);
        assert_eq!(widget.selected_day(), 22);
        assert_eq!(widget.return_day(), 29);

        session.with(|w| w.open_request_form()).unwrap();
        assert_eq!(session.ui_state(), UiState::RequestFormOpen);
        session.with(fill_booking);

        let started = Instant::now();
        session.submit().unwrap();
        assert_eq!(session.ui_state(), UiState::Submitting);
        assert!(session.is_pending());

        session.settle().await;
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(500), "completed after {:?}", elapsed);
        assert!(elapsed < Duration::from_millis(600), "completed after {:?}", elapsed);
        assert_eq!(session.ui_state(), UiState::Submitted);

        let received = notifier.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].kind, NotificationKind::AvailabilityRequested);
    }

    #[tokio::test(start_paused = true)]
    async fn test_still_submitting_before_delay() {
        let notifier = Arc::new(RecordingNotifier::new());
        let mut session = BookingSession::new(BookingWidget::default(), Arc::clone(&notifier));
        session.with(|w| w.open_request_form()).unwrap();
        session.with(fill_booking);
        session.submit().unwrap();

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(session.ui_state(), UiState::Submitting);
        assert!(notifier.received().is_empty());

        session.settle().await;
        assert_eq!(session.ui_state(), UiState::Submitted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_submit_schedules_nothing() {
        let notifier = Arc::new(RecordingNotifier::new());
        let mut session = BookingSession::new(BookingWidget::default(), Arc::clone(&notifier));
        session.with(|w| w.open_request_form()).unwrap();

        assert!(matches!(session.submit(), Err(BookingError::MissingFields(_))));
        assert!(!session.is_pending());
        assert_eq!(session.ui_state(), UiState::RequestFormOpen);
    }

    #[tokio::test(start_paused = true)]
    async fn test_abandon_cancels_timer() {
        let notifier = Arc::new(RecordingNotifier::new());
        let mut session = BookingSession::new(BookingWidget::default(), Arc::clone(&notifier));
        session.with(|w| w.open_request_form()).unwrap();
        session.with(fill_booking);
        session.submit().unwrap();

        session.abandon();
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert_eq!(session.ui_state(), UiState::Idle);
        assert!(notifier.received().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_submit_path_completes() {
        let notifier = Arc::new(RecordingNotifier::new());

        let mut via_session = BookingSession::new(BookingWidget::default(), Arc::clone(&notifier));
        via_session.with(|w| w.open_request_form()).unwrap();
        via_session.with(fill_booking);
        via_session.submit().unwrap();

        let mut via_with = BookingSession::new(BookingWidget::default(), Arc::clone(&notifier));
        via_with.with(|w| w.open_request_form()).unwrap();
        via_with.with(fill_booking);
        via_with.with(|w| w.submit()).unwrap();
        assert!(via_with.is_pending());

        tokio::time::sleep(Duration::from_secs(10)).await;
        via_session.settle().await;
        via_with.settle().await;

        assert_eq!(via_session.ui_state(), UiState::Submitted);
        assert_eq!(via_with.ui_state(), UiState::Submitted);
        assert_eq!(via_with.snapshot().pending_ticket(), None);
        assert_eq!(notifier.received().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_abandon_through_with_cancels_timer() {
        let notifier = Arc::new(RecordingNotifier::new());
        let mut session = BookingSession::new(BookingWidget::default(), Arc::clone(&notifier));
        session.with(|w| w.open_request_form()).unwrap();
        session.with(fill_booking);
        session.submit().unwrap();

        session.with(|w| w.abandon());
        assert!(!session.is_pending());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(session.ui_state(), UiState::Idle);
        assert!(notifier.received().is_empty());

        // A fresh request after abandoning gets its own timer
        session.with(|w| w.open_request_form()).unwrap();
        session.with(fill_booking);
        session.with(|w| w.submit()).unwrap();
        session.settle().await;
        assert_eq!(session.ui_state(), UiState::Submitted);
        assert_eq!(notifier.received().len(), 1);
    }

    #[test]
    fn test_submit_without_runtime_is_refused() {
        let notifier = Arc::new(RecordingNotifier::new());
        let mut session = BookingSession::new(BookingWidget::default(), notifier);
        session.with(|w| w.open_request_form()).unwrap();
        session.with(fill_booking);

        assert_eq!(session.submit(), Err(BookingError::NoRuntime));
        assert_eq!(session.ui_state(), UiState::RequestFormOpen);
        assert_eq!(session.snapshot().form().map(|f| f.full_name.as_str()), Some("Jane Doe"));

        // Nothing could ever complete it, so it is not left submitting
        session.with(|w| w.submit()).unwrap();
        assert_eq!(session.ui_state(), UiState::Idle);
        assert!(!session.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_contact_session() {
        let notifier = Arc::new(RecordingNotifier::new());
        let mut session = ContactSession::new(ContactForm::default(), Arc::clone(&notifier));
        session.with(|form| {
            let request = form.form_mut()?;
            request.name = "Jane Doe".into();
            request.email = "jane@x.com".into();
            request.message = "Hello".into();
            Ok::<_, BookingError>(())
        }).unwrap();

        let started = Instant::now();
        session.submit().unwrap();
        session.settle().await;

        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert_eq!(session.ui_state(), UiState::Submitted);
        assert_eq!(notifier.received()[0].kind, NotificationKind::MessageSent);

        session.with(|form| form.reset()).unwrap();
        assert_eq!(session.ui_state(), UiState::RequestFormOpen);
    }

    #[tokio::test(start_paused = true)]
    async fn test_log_notifier_session() {
        init_logging();
        let mut session = BookingSession::new(BookingWidget::default(), Arc::new(LogNotifier));
        session.with(|w| w.open_request_form()).unwrap();
        session.with(fill_booking);
        session.submit().unwrap();
        session.settle().await;
        assert_eq!(session.ui_state(), UiState::Submitted);
    }
}
