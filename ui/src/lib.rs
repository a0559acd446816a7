//! Shared UI crate for the team registration wizard.
//!
//! Wizard rules live in `features`, the HTTP client in `services`, and the
//! Dioxus views in `components` and `app`.

pub mod app;
pub use app::TeamRegistrationService;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
