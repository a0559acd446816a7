use dioxus::prelude::*;

use crate::components::input::{FieldErrorFeedback, ValidatedInput};
use crate::features::registration::*;
use crate::utils::validation::{field_input_class, field_input_style};

#[derive(Props, PartialEq, Clone)]
pub struct TeamNameFormProps {
    pub state: Signal<WizardState>,
    pub dispatch: EventHandler<WizardAction>,
}

#[component]
pub fn TeamNameForm(props: TeamNameFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let error = get_field_error(&state.read(), TEAM_NAME_FIELD);

    rsx! {
        div {
            class: "wizard-form team-name-form",

            h2 {
                class: "form-title",
                "What's your team name?"
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Team Name"
                }
                ValidatedInput {
                    value: state().team_name,
                    placeholder: "Enter team name".to_string(),
                    input_class: field_input_class(error.as_deref()).to_string(),
                    input_style: field_input_style(error.as_deref()).to_string(),
                    disabled: false,
                    on_change: move |name: String| dispatch.call(WizardAction::SetTeamName(name)),
                    on_submit: move |_| dispatch.call(WizardAction::SubmitTeamName),
                }
                FieldErrorFeedback { message: error.clone() }
            }

            div {
                class: "wizard-nav",
                button {
                    class: "primary-button nav-button",
                    onclick: move |_| dispatch.call(WizardAction::SubmitTeamName),
                    "Next"
                }
            }
        }
    }
}
