use dioxus::prelude::*;

use crate::features::registration::RegistrationResult;

#[derive(Props, PartialEq, Clone)]
pub struct RegistrationCompleteProps {
    pub team_name: String,
    pub result: RegistrationResult,
}

/// Shows the issued credentials exactly as the service returned them
#[component]
pub fn RegistrationComplete(props: RegistrationCompleteProps) -> Element {
    rsx! {
        div {
            class: "registration-complete",
            h2 { class: "form-title", "✓ Team Registered" }
            p {
                class: "complete-summary",
                "{props.team_name} is registered. Keep these credentials, they are only shown once."
            }
            div {
                class: "credential-row",
                span { class: "credential-label", "Team ID" }
                code { class: "credential-value", "{props.result.team_id}" }
            }
            div {
                class: "credential-row",
                span { class: "credential-label", "Password" }
                code { class: "credential-value", "{props.result.password}" }
            }
        }
    }
}
