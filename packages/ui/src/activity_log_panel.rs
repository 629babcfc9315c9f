use api::{ClientConfig, NoticeLevel};
use dioxus::prelude::*;

use crate::activity_log::use_activity_log;

/// Stack of recent notifications. On the web each one disappears after the
/// configured duration; elsewhere they stay until dismissed.
#[component]
pub fn ToastPanel() -> Element {
    let mut log = use_activity_log();
    let config = use_context::<ClientConfig>();

    #[cfg(target_arch = "wasm32")]
    {
        let max_age = config.notifications.duration_ms as f64;
        use_future(move || async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(250)).await;
                if !log.read().entries.is_empty() {
                    log.write().expire(crate::activity_log::now_ms(), max_age);
                }
            }
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = config;

    let entries = log().entries.clone();

    rsx! {
        div {
            class: "toast-panel",
            style: "position: fixed; top: 1rem; right: 1rem; display: flex; flex-direction: column; gap: 0.5rem; z-index: 50;",
            for entry in entries.into_iter().rev() {
                div {
                    key: "{entry.id}",
                    class: match entry.level {
                        NoticeLevel::Error => "toast error",
                        NoticeLevel::Success => "toast success",
                        NoticeLevel::Info => "toast info",
                    },
                    span { "{entry.message}" }
                    button {
                        class: "toast-dismiss",
                        onclick: move |_| log.write().dismiss(entry.id),
                        "×"
                    }
                }
            }
        }
    }
}
