pub mod use_booking;
pub mod use_contact_form;
pub mod use_submission_timer;
