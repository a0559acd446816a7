use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct MembersPanelProps {
    pub identifiers: Vec<String>,
}

fn member_label(index: usize) -> String {
    format!("Member {}", index + 1)
}

/// Lists the KFIDs collected so far, in slot order
#[component]
pub fn MembersPanel(props: MembersPanelProps) -> Element {
    if props.identifiers.iter().all(|id| id.is_empty()) {
        return rsx! { div {} };
    }

    rsx! {
        div {
            class: "members-panel",
            h3 { class: "members-title", "Team Members" }
            for (index, kfid) in props.identifiers.iter().enumerate().filter(|(_, id)| !id.is_empty()) {
                div {
                    key: "{index}",
                    class: "member-row",
                    span { class: "member-label", {member_label(index)} }
                    span { class: "member-kfid", "{kfid}" }
                }
            }
        }
    }
}
