//! External integrations. Nothing in the domain depends on these.

pub mod itinerary;

pub use itinerary::*;
