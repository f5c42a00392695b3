use backend::ScrollPort;

/// Scrolls the browser window
pub struct WindowScroll;

impl ScrollPort for WindowScroll {
    fn scroll_to_top(&self) {
        match web_sys::window() {
            Some(window) => window.scroll_to_with_x_and_y(0.0, 0.0),
            None => log::warn!("🧭 No window available to scroll"),
        }
    }
}
