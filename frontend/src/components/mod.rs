pub mod accordion;
pub mod booking_panel;
pub mod contact_form;
pub mod date_grid;
pub mod footer;
pub mod header;
pub mod icon;
pub mod toast;
