//! # Domain Module
//!
//! Business rules for the site's interactive surfaces. Nothing in here
//! schedules timers or touches the DOM: callers drive the state machines and
//! decide how to wait for a submission ticket.
//!
//! - **calendar**: departure grid generation and day classification
//! - **submission**: generic edit -> submit -> submitted cycle with tickets
//! - **booking_widget**: calendar + availability request state machine
//! - **contact_form**: contact page submission flow
//! - **navigation**: root view controller and navbar table
//! - **notifier**: injected success notifications
//! - **validation**: required-field and email checks

pub mod booking_widget;
pub mod calendar;
pub mod contact_form;
pub mod error;
pub mod navigation;
pub mod notifier;
pub mod submission;
pub mod validation;

pub use booking_widget::*;
pub use calendar::*;
pub use contact_form::*;
pub use error::*;
pub use navigation::*;
pub use notifier::*;
pub use submission::*;
pub use validation::*;
