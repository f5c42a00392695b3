//! # Roots&Routes site core
//!
//! Interaction logic behind the travel site: the departure calendar, the
//! availability-request and contact form flows, and top-level view
//! navigation. Rendering lives in the frontend crate; this crate only
//! decides what state the pages are in.
//!
//! ## Module Organization
//!
//! - **domain**: pure state machines and the date grid, usable from wasm
//! - **runtime**: tokio-driven sessions with real submission timers (`native`)
//! - **io**: the itinerary generation HTTP client (`native`)
//! - **config**: environment-derived settings for the IO layer (`native`)

pub mod domain;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod io;
#[cfg(feature = "native")]
pub mod runtime;

pub use domain::*;
