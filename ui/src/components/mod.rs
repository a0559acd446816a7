//! User Interface Components
//!
//! - **forms**: the team name step and the member entry steps
//! - **display**: notices, the members panel and the completion view
//! - **input**: validated text input and inline field errors
//! - **scanner**: camera-backed QR scanning
//! - **stepper**: wizard progress indicator

pub mod display;
pub mod forms;
pub mod input;
pub mod scanner;
pub mod stepper;
