//! Toast overlay
//!
//! Renders the queued notifications in the corner of the window. Each toast
//! removes itself once its duration has elapsed.

use dioxus::prelude::*;
use survive_player::{NotificationSeverity, Platform};

use crate::presentation::state::{use_toast_state, ActiveToast};

fn severity_class(severity: NotificationSeverity) -> &'static str {
    match severity {
        NotificationSeverity::Success => "toast success",
        NotificationSeverity::Error => "toast error",
    }
}

#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toast_state();
    let active = toasts.active();

    rsx! {
        div {
            class: "toast-stack",
            for toast in active {
                ToastItem { key: "{toast.id}", toast: toast.clone() }
            }
        }
    }
}

#[component]
fn ToastItem(toast: ActiveToast) -> Element {
    let platform = use_context::<Platform>();
    let mut toasts = use_toast_state();
    let id = toast.id;

    // Auto-dismiss
    let duration = toast.notification.duration;
    use_hook(move || {
        spawn(async move {
            let ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
            platform.sleep_ms(ms).await;
            toasts.dismiss(id);
        });
    });

    let class = severity_class(toast.notification.severity);

    rsx! {
        div {
            class,
            "role": "status",
            onclick: move |_| toasts.dismiss(id),
            div {
                class: "toast-header",
                strong { "{toast.notification.title}" }
                button { class: "toast-close", "×" }
            }
            p { "{toast.notification.description}" }
        }
    }
}
