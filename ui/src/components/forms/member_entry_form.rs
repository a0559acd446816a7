use dioxus::prelude::*;

use crate::components::input::{FieldErrorFeedback, ValidatedInput};
use crate::components::scanner::QrScanner;
use crate::features::registration::*;
use crate::services::client::RegistrationClient;
use crate::services::errors::RegistrationError;
use crate::utils::validation::{field_input_class, field_input_style};
use crate::{console_debug, console_error, console_info, console_warn};

#[derive(Props, PartialEq, Clone)]
pub struct MemberEntryFormProps {
    pub state: Signal<WizardState>,
    pub dispatch: EventHandler<WizardAction>,
    /// Camera and QR decoding are both available
    pub scan_available: bool,
}

fn member_heading(step: WizardStep) -> String {
    if step.is_optional() {
        format!("Team Member {} (Optional)", step.index())
    } else {
        format!("Team Member {}", step.index())
    }
}

/// Submit whatever is typed in the KFID field for the current step
fn enter_typed_identifier(state: Signal<WizardState>, dispatch: EventHandler<WizardAction>) {
    let raw = state.read().current_identifier.clone();
    if raw.is_empty() {
        return;
    }
    dispatch.call(WizardAction::EnterIdentifier {
        raw,
        source: EntrySource::Manual,
    });
}

/// Kick off the register action. `BeginSubmission` is dispatched before the
/// request is spawned so a second click is refused by `begin_registration`.
fn start_registration(state: Signal<WizardState>, dispatch: EventHandler<WizardAction>) {
    let admitted = begin_registration(&state.read());
    let pending = match admitted {
        Ok(pending) => pending,
        Err(RegistrationError::SubmissionInProgress) => {
            console_debug!("[Register] Submission already in flight");
            return;
        }
        Err(e) => {
            dispatch.call(WizardAction::RegistrationFailed(e));
            return;
        }
    };

    dispatch.call(WizardAction::BeginSubmission);
    console_info!(
        "[Register] Submitting team with {} members",
        pending.identifiers.len()
    );

    spawn(async move {
        let client = match RegistrationClient::new() {
            Ok(client) => client,
            Err(e) => {
                console_error!("[Register] Client unavailable: {}", e);
                dispatch.call(WizardAction::RegistrationFailed(e));
                return;
            }
        };

        let forward = move |action: WizardAction| dispatch.call(action);
        match complete_registration(&client, pending, &forward, &LoggingEventHandler).await {
            Ok(result) => console_info!("[Register] Registered as {}", result.team_id),
            Err(e) => console_warn!("[Register] {}", e),
        }
    });
}

#[component]
pub fn MemberEntryForm(props: MemberEntryFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let snapshot = state();

    let step = snapshot.current_step;
    let error = get_field_error(&snapshot, KFID_FIELD);
    let entry_ready = validate_member_entry_ready(&snapshot);
    let register_ready = validate_registration_ready(&snapshot);

    rsx! {
        div {
            class: "wizard-form member-form",

            h2 {
                class: "form-title",
                {member_heading(step)}
            }

            if snapshot.scanning {
                div {
                    class: "scanner-section",
                    QrScanner {
                        on_decode: move |text: String| dispatch.call(WizardAction::EnterIdentifier {
                            raw: text,
                            source: EntrySource::Scan,
                        }),
                        on_error: move |cause: String| dispatch.call(WizardAction::ScannerFailed(cause)),
                    }
                }
                div {
                    class: "button-stack",
                    button {
                        class: "secondary-button",
                        onclick: move |_| dispatch.call(WizardAction::SetScanning(false)),
                        "Cancel Scanning"
                    }
                }
            } else {
                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        "KFID"
                    }
                    ValidatedInput {
                        value: snapshot.current_identifier.clone(),
                        placeholder: format!("Enter KFID for member {}", step.index()),
                        input_class: field_input_class(error.as_deref()).to_string(),
                        input_style: field_input_style(error.as_deref()).to_string(),
                        disabled: snapshot.submitting,
                        uppercase: true,
                        on_change: move |value: String| dispatch.call(WizardAction::SetCurrentIdentifier(value)),
                        on_submit: move |_| enter_typed_identifier(state, dispatch),
                    }
                    FieldErrorFeedback { message: error.clone() }
                }

                div {
                    class: "button-stack",
                    if props.scan_available {
                        button {
                            class: "secondary-button",
                            disabled: snapshot.submitting,
                            onclick: move |_| dispatch.call(WizardAction::SetScanning(true)),
                            "📷 Scan QR Code"
                        }
                    }
                    if entry_ready && snapshot.identifier_for(step) == Some(snapshot.current_identifier.as_str()) {
                        button {
                            class: "primary-button",
                            onclick: move |_| dispatch.call(WizardAction::ConfirmCurrentIdentifier),
                            "Confirm KFID: {snapshot.current_identifier}"
                        }
                    } else {
                        button {
                            class: "primary-button",
                            disabled: !entry_ready,
                            onclick: move |_| enter_typed_identifier(state, dispatch),
                            "Add Member"
                        }
                    }
                }
            }

            if snapshot.submitting {
                div {
                    class: "loading-indicator",
                    span { class: "loading-spinner" }
                    "Registering your team..."
                }
            }

            div {
                class: "wizard-nav",
                button {
                    class: "secondary-button nav-button",
                    disabled: snapshot.submitting,
                    onclick: move |_| dispatch.call(WizardAction::PreviousStep),
                    "Back"
                }
                if snapshot.can_register() {
                    button {
                        class: "primary-button nav-button",
                        disabled: !register_ready,
                        onclick: move |_| start_registration(state, dispatch),
                        if snapshot.submitting { "Registering..." } else { "Register Team" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_heading_marks_optional_third_member() {
        assert_eq!(member_heading(WizardStep::Member1), "Team Member 1");
        assert_eq!(member_heading(WizardStep::Member2), "Team Member 2");
        assert_eq!(member_heading(WizardStep::Member3), "Team Member 3 (Optional)");
    }
}
