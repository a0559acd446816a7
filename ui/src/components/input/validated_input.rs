use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub value: String,
    pub placeholder: String,
    pub input_class: String,
    pub input_style: String,
    pub disabled: bool,
    /// Hint mobile keyboards towards capitals, used for KFID entry
    #[props(default)]
    pub uppercase: bool,
    pub on_change: EventHandler<String>,
    /// Fired when Enter is pressed inside the field
    pub on_submit: EventHandler<()>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    let on_submit = props.on_submit;
    let capitalize = if props.uppercase { "characters" } else { "sentences" };

    rsx! {
        input {
            class: "{props.input_class}",
            style: "{props.input_style}",
            r#type: "text",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            autocomplete: "off",
            "autocapitalize": capitalize,
            oninput: move |event| props.on_change.call(event.value()),
            onkeydown: move |event: KeyboardEvent| {
                if event.key() == Key::Enter {
                    on_submit.call(());
                }
            }
        }
    }
}
