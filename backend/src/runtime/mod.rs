//! # Runtime Module
//!
//! Tokio-driven sessions that own a domain state machine and the one-shot
//! timer of its pending submission. Dropping a session (for example when
//! the user navigates to another page) aborts the timer.

pub mod session;
pub mod site_session;

pub use session::*;
pub use site_session::*;
