use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::features::registration::{Notice, NoticeVariant};

/// How long a notice stays up before dismissing itself
pub const NOTICE_DURATION_MS: u32 = 5_000;

#[derive(Props, PartialEq, Clone)]
pub struct NoticeBannerProps {
    pub notice: Notice,
    pub on_dismiss: EventHandler<u64>,
}

/// Transient notice. Render it keyed by `notice.id` so a replacement notice
/// gets a fresh timer.
#[component]
pub fn NoticeBanner(props: NoticeBannerProps) -> Element {
    let id = props.notice.id;
    let on_dismiss = props.on_dismiss;

    use_hook(move || {
        spawn(async move {
            TimeoutFuture::new(NOTICE_DURATION_MS).await;
            on_dismiss.call(id);
        })
    });

    let class = match props.notice.variant {
        NoticeVariant::Destructive => "notice notice-destructive",
        NoticeVariant::Info => "notice notice-info",
    };

    rsx! {
        div {
            class: class,
            div {
                class: "notice-body",
                strong { class: "notice-title", "{props.notice.title}" }
                p { class: "notice-description", "{props.notice.description}" }
            }
            button {
                class: "notice-dismiss",
                onclick: move |_| on_dismiss.call(id),
                "×"
            }
        }
    }
}
