use crate::console_info;
use dioxus::prelude::*;

use crate::components::display::{MembersPanel, NoticeBanner, RegistrationComplete};
use crate::components::forms::{MemberEntryForm, TeamNameForm};
use crate::components::stepper::Stepper;
use crate::features::registration::{WizardAction, WizardState, WizardStep};
use crate::utils::platform::can_scan_qr_codes;

const REGISTRATION_CSS: Asset = asset!("/assets/styling/registration.css");

#[component]
pub fn TeamRegistrationService() -> Element {
    let mut state = use_signal(WizardState::default);

    // Camera capabilities don't change during a session
    let scan_available = use_hook(can_scan_qr_codes);

    use_effect(|| {
        console_info!("[Registration] Wizard mounted");
    });

    // Dispatch function for actions - in-place reduction keeps Signal reactivity
    let dispatch = EventHandler::new(move |action: WizardAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    let snapshot = state();

    rsx! {
        document::Link { rel: "stylesheet", href: REGISTRATION_CSS }

        div {
            class: "registration-container",

            div {
                class: "title-container",
                h1 {
                    class: "registration-title",
                    "Team Registration"
                }
                p {
                    class: "registration-subtitle",
                    "Register your team with a name and two or three member KFIDs"
                }
            }

            if let Some(notice) = snapshot.notice.clone() {
                NoticeBanner {
                    key: "{notice.id}",
                    notice: notice,
                    on_dismiss: move |id: u64| dispatch.call(WizardAction::DismissNotice(id)),
                }
            }

            if let Some(result) = snapshot.registered.clone() {
                RegistrationComplete {
                    team_name: snapshot.team_name.clone(),
                    result: result,
                }
            } else {
                div {
                    class: "wizard-card",

                    Stepper { steps: snapshot.stepper_steps() }

                    MembersPanel { identifiers: snapshot.identifiers.clone() }

                    if snapshot.current_step == WizardStep::TeamName {
                        TeamNameForm {
                            state: state,
                            dispatch: dispatch
                        }
                    } else {
                        MemberEntryForm {
                            state: state,
                            dispatch: dispatch,
                            scan_available: scan_available
                        }
                    }
                }
            }
        }
    }
}
