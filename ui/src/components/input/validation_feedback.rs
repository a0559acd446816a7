use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorFeedbackProps {
    pub message: Option<String>,
}

/// Inline error under a wizard field; renders nothing when the field is clean
#[component]
pub fn FieldErrorFeedback(props: FieldErrorFeedbackProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            div {
                class: "validation-feedback invalid",
                "⚠ {message}"
            }
        },
        None => rsx! { div {} },
    }
}
