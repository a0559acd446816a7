//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: browser console logging macros for components
//! - **platform**: camera and barcode capability detection
//! - **validation**: input styling driven by validation state

pub mod console_macros;
pub mod platform;
pub mod validation;

pub use platform::*;
pub use validation::*;
