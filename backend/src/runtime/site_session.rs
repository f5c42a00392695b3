use shared::{BookingConfig, ContactConfig, View};
use std::sync::Arc;

use super::session::{BookingSession, ContactSession};
use crate::domain::{BookingWidget, ContactForm, NavigationOutcome, Navigator, Notifier, ScrollPort};

/// State owned by the page that is currently showing
pub enum Page<N> {
    Home,
    Experience(BookingSession<N>),
    About,
    Contact(ContactSession<N>),
}

impl<N> Page<N> {
    pub fn view(&self) -> View {
        match self {
            Page::Home => View::Home,
            Page::Experience(_) => View::Experience,
            Page::About => View::About,
            Page::Contact(_) => View::Contact,
        }
    }
}

/// Root controller: the navigator plus the live page.
///
/// Each page instance owns its state; leaving a page drops it, which
/// cancels any submission still waiting on its timer.
pub struct SiteSession<N, S> {
    navigator: Navigator,
    page: Page<N>,
    notifier: Arc<N>,
    scroll: S,
    booking_config: BookingConfig,
    contact_config: ContactConfig,
}

impl<N, S> SiteSession<N, S>
where
    N: Notifier + Send + Sync + 'static,
    S: ScrollPort,
{
    pub fn new(notifier: Arc<N>, scroll: S) -> Self {
        Self::with_configs(BookingConfig::default(), ContactConfig::default(), notifier, scroll)
    }

    pub fn with_configs(
        booking_config: BookingConfig,
        contact_config: ContactConfig,
        notifier: Arc<N>,
        scroll: S,
    ) -> Self {
        Self {
            navigator: Navigator::new(),
            page: Page::Home,
            notifier,
            scroll,
            booking_config,
            contact_config,
        }
    }

    pub fn current_view(&self) -> View {
        self.navigator.current()
    }

    pub fn page(&self) -> &Page<N> {
        &self.page
    }

    pub fn scroll(&self) -> &S {
        &self.scroll
    }

    /// The booking widget session, when the experience page is showing
    pub fn booking(&mut self) -> Option<&mut BookingSession<N>> {
        match &mut self.page {
            Page::Experience(session) => Some(session),
            _ => None,
        }
    }

    /// The contact form session, when the contact page is showing
    pub fn contact(&mut self) -> Option<&mut ContactSession<N>> {
        match &mut self.page {
            Page::Contact(session) => Some(session),
            _ => None,
        }
    }

    pub fn navigate(&mut self, target: &str) -> NavigationOutcome {
        let outcome = self.navigator.navigate(target, &self.scroll);
        if let NavigationOutcome::Changed { to, .. } = outcome {
            self.page = self.build_page(to);
        }
        outcome
    }

    fn build_page(&self, view: View) -> Page<N> {
        match view {
            View::Home => Page::Home,
            View::About => Page::About,
            View::Experience => Page::Experience(BookingSession::new(
                BookingWidget::new(self.booking_config.clone()),
                Arc::clone(&self.notifier),
            )),
            View::Contact => Page::Contact(ContactSession::new(
                ContactForm::new(self.contact_config.clone()),
                Arc::clone(&self.notifier),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordingNotifier;
    use shared::UiState;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Default, Clone)]
    struct CountingScroll(Arc<AtomicUsize>);

    impl ScrollPort for CountingScroll {
        fn scroll_to_top(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn site() -> (SiteSession<RecordingNotifier, CountingScroll>, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::new());
        (SiteSession::new(Arc::clone(&notifier), CountingScroll::default()), notifier)
    }

    #[test]
    fn test_pages_follow_navigation() {
        let (mut site, _) = site();
        assert_eq!(site.page().view(), View::Home);
        assert!(site.booking().is_none());

        site.navigate("experience");
        assert_eq!(site.current_view(), View::Experience);
        assert!(site.booking().is_some());

        site.navigate("contact");
        assert_eq!(site.page().view(), View::Contact);
        assert!(site.contact().is_some());
        assert!(site.booking().is_none());

        assert_eq!(site.navigate("nowhere"), NavigationOutcome::Ignored);
        assert_eq!(site.page().view(), View::Contact);
        assert_eq!(site.scroll().0.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_each_visit_gets_fresh_state() {
        let (mut site, _) = site();
        site.navigate("experience");
        if let Some(booking) = site.booking() {
            booking.with(|w| {
                w.open_calendar()?;
                w.select_day(3)
            }).unwrap();
        }

        // same view keeps the page
        site.navigate("experience");
        assert_eq!(site.booking().map(|b| b.snapshot().selected_day()), Some(3));

        site.navigate("home");
        site.navigate("experience");
        assert_eq!(site.booking().map(|b| b.snapshot().selected_day()), Some(15));
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_page_cancels_submission() {
        let (mut site, notifier) = site();
        site.navigate("experience");

        let booking = site.booking().unwrap();
        booking.with(|w| {
            w.open_request_form()?;
            let form = w.form_mut()?;
            form.full_name = "Jane Doe".into();
            form.email = "jane@x.com".into();
            form.phone = "123".into();
            Ok::<_, crate::domain::BookingError>(())
        }).unwrap();
        booking.submit().unwrap();
        assert_eq!(booking.ui_state(), UiState::Submitting);

        site.navigate("about");
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert!(notifier.received().is_empty());
        assert_eq!(site.current_view(), View::About);
    }
}
