//! Registration orchestrator - runs the register action against a submitter

use tracing::{info, warn};

use crate::features::registration::{
    events::{RegistrationEvent, RegistrationEventHandler},
    form_validation::validate_minimum_members,
    types::*,
};
use crate::services::client::TeamSubmitter;
use crate::services::errors::RegistrationError;

/// Snapshot of what will be sent once a submission has been admitted
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRegistration {
    pub team_name: String,
    pub identifiers: Vec<String>,
}

/// Decide whether a submission may start from `state`.
///
/// Callers dispatch [`WizardAction::BeginSubmission`] synchronously on `Ok`
/// so a second click sees `submitting` before the request is in flight.
pub fn begin_registration(state: &WizardState) -> Result<PendingRegistration, RegistrationError> {
    if state.submitting {
        warn!("[Registration] Submission already in flight - ignoring");
        return Err(RegistrationError::SubmissionInProgress);
    }

    validate_minimum_members(state)?;

    Ok(PendingRegistration {
        team_name: state.team_name.clone(),
        identifiers: state.filled_identifiers(),
    })
}

/// Perform the single network submission and report the outcome through
/// `dispatch` and `events`. Wizard data is never modified on failure.
pub async fn complete_registration(
    submitter: &dyn TeamSubmitter,
    pending: PendingRegistration,
    dispatch: &dyn Fn(WizardAction),
    events: &dyn RegistrationEventHandler,
) -> Result<RegistrationResult, RegistrationError> {
    info!(
        "[Registration] Submitting team '{}' with {} members",
        pending.team_name,
        pending.identifiers.len()
    );
    events.handle_event(RegistrationEvent::Submitted {
        team_name: pending.team_name.clone(),
        members: pending.identifiers.len(),
    });

    match submitter.submit(&pending.team_name, &pending.identifiers).await {
        Ok(result) => {
            events.handle_event(RegistrationEvent::Registered {
                team_id: result.team_id.clone(),
                password: result.password.clone(),
            });
            dispatch(WizardAction::RegistrationSucceeded(result.clone()));
            Ok(result)
        }
        Err(err) => {
            events.handle_event(RegistrationEvent::Failed {
                message: err.user_message(),
                retryable: err.is_retryable(),
            });
            dispatch(WizardAction::RegistrationFailed(err.clone()));
            Err(err)
        }
    }
}
