//! Infrastructure Services
//!
//! - **client**: registration service HTTP client and wire types
//! - **config**: registration endpoint settings
//! - **errors**: error taxonomy shared by the wizard and the client
//!
//! Async traits here drop the Send bound; everything runs on the browser's
//! main thread.

pub mod client;
pub mod config;
pub mod errors;
