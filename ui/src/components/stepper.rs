use dioxus::prelude::*;

use crate::features::registration::StepIndicator;

#[derive(Props, PartialEq, Clone)]
pub struct StepperProps {
    pub steps: Vec<StepIndicator>,
}

fn marker_class(step: &StepIndicator) -> &'static str {
    if step.is_completed {
        "stepper-marker complete"
    } else if step.is_current {
        "stepper-marker current"
    } else {
        "stepper-marker"
    }
}

fn marker_label(index: usize, step: &StepIndicator) -> String {
    if step.is_completed {
        "✓".to_string()
    } else {
        (index + 1).to_string()
    }
}

/// Horizontal progress indicator across the four wizard steps
#[component]
pub fn Stepper(props: StepperProps) -> Element {
    let last = props.steps.len().saturating_sub(1);

    rsx! {
        div {
            class: "stepper",
            for (index, step) in props.steps.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "stepper-item",
                    div {
                        class: marker_class(step),
                        {marker_label(index, step)}
                    }
                    span {
                        class: if step.is_current { "stepper-title current" } else { "stepper-title" },
                        "{step.title}"
                    }
                    if index < last {
                        div {
                            class: if step.is_completed { "stepper-connector complete" } else { "stepper-connector" }
                        }
                    }
                }
            }
        }
    }
}
