//! Top-level view switching.
//!
//! A single [`Navigator`] owned by the root component decides which page is
//! showing. Pages request changes with a view identifier string; unknown
//! identifiers are ignored. Every accepted navigation resets the scroll
//! position to the top.

use shared::View;

/// Whatever can put the viewport back at the top of the page
pub trait ScrollPort {
    fn scroll_to_top(&self);
}

/// Result of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    Changed { from: View, to: View },
    /// Target was already showing
    Reloaded(View),
    /// Unrecognized identifier; nothing happened
    Ignored,
}

impl NavigationOutcome {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, NavigationOutcome::Ignored)
    }
}

/// Current page, without history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    current: View,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_view(current: View) -> Self {
        Self { current }
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Navigate by identifier ("home", "experience", "about", "contact")
    pub fn navigate(&mut self, target: &str, scroll: &dyn ScrollPort) -> NavigationOutcome {
        match target.parse::<View>() {
            Ok(view) => self.navigate_to(view, scroll),
            Err(e) => {
                log::warn!("🧭 Ignoring navigation: {}", e);
                NavigationOutcome::Ignored
            }
        }
    }

    pub fn navigate_to(&mut self, view: View, scroll: &dyn ScrollPort) -> NavigationOutcome {
        scroll.scroll_to_top();
        let from = std::mem::replace(&mut self.current, view);
        if from == view {
            NavigationOutcome::Reloaded(view)
        } else {
            log::info!("🧭 Navigated {} -> {}", from, view);
            NavigationOutcome::Changed { from, to: view }
        }
    }
}

/// Navbar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub view: View,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Home", view: View::Home },
    NavLink { label: "About Us", view: View::About },
    NavLink { label: "Itinerary", view: View::Experience },
    NavLink { label: "Contact", view: View::Contact },
];

pub fn view_for_nav_label(label: &str) -> Option<View> {
    NAV_LINKS.iter().find(|link| link.label == label).map(|link| link.view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct CountingScroll {
        calls: Cell<u32>,
    }

    impl ScrollPort for CountingScroll {
        fn scroll_to_top(&self) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    #[test]
    fn test_starts_at_home() {
        assert_eq!(Navigator::new().current(), View::Home);
    }

    #[test]
    fn test_navigate_known_views() {
        let scroll = CountingScroll::default();
        let mut navigator = Navigator::new();

        assert_eq!(
            navigator.navigate("experience", &scroll),
            NavigationOutcome::Changed { from: View::Home, to: View::Experience }
        );
        assert!(navigator.navigate("about", &scroll).is_accepted());
        assert!(navigator.navigate("contact", &scroll).is_accepted());
        assert!(navigator.navigate("home", &scroll).is_accepted());
        assert_eq!(navigator.current(), View::Home);
        assert_eq!(scroll.calls.get(), 4);
    }

    #[test]
    fn test_unknown_view_is_ignored() {
        let scroll = CountingScroll::default();
        let mut navigator = Navigator::with_view(View::Contact);

        for target in ["journal", "", "HOME", "experience ", "../about"] {
            assert_eq!(navigator.navigate(target, &scroll), NavigationOutcome::Ignored);
        }
        assert_eq!(navigator.current(), View::Contact);
        assert_eq!(scroll.calls.get(), 0);
    }

    #[test]
    fn test_same_view_still_scrolls() {
        let scroll = CountingScroll::default();
        let mut navigator = Navigator::with_view(View::About);

        assert_eq!(navigator.navigate("about", &scroll), NavigationOutcome::Reloaded(View::About));
        assert_eq!(scroll.calls.get(), 1);
    }

    #[test]
    fn test_nav_links() {
        assert_eq!(view_for_nav_label("Itinerary"), Some(View::Experience));
        assert_eq!(view_for_nav_label("About Us"), Some(View::About));
        assert_eq!(view_for_nav_label("Journal"), None);
        for view in View::ALL {
            assert!(NAV_LINKS.iter().any(|link| link.view == view));
        }
    }
}
