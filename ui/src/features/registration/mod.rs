//! Team Registration Wizard
//!
//! Step-wise collection of a team name and two or three member KFIDs,
//! followed by a single submission to the registration service.
//!
//! # Architecture
//!
//! - **types**: `WizardState`, the reducer and every step transition
//! - **form_validation**: KFID and team name validators plus readiness checks
//! - **orchestrator**: the register action, guarded against double submits
//! - **events**: structured lifecycle events for the presentation layer
//!
//! # Usage
//!
//! ```rust,ignore
//! use ui::features::registration::*;
//!
//! let pending = begin_registration(&state)?;
//! dispatch(WizardAction::BeginSubmission);
//! complete_registration(&client, pending, &dispatch, &LoggingEventHandler).await;
//! ```

pub mod events;
pub mod form_validation;
pub mod orchestrator;
pub mod types;

pub use events::*;
pub use form_validation::*;
pub use orchestrator::{begin_registration, complete_registration, PendingRegistration};
pub use types::*;

