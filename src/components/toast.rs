//! Achievement Toast Component
//!
//! Top-center "Advancement Made!" popup. The visibility window, the
//! once-per-id rule and stale-timer handling are all decided in
//! [`crate::context::advancement_sighted`]; this just renders whatever
//! currently owns the display slot.

use dioxus::prelude::*;

use crate::context::use_active_toast;

#[component]
pub fn AdvancementToast() -> Element {
    let active = use_active_toast();

    rsx! {
        if let Some(toast) = active() {
            div {
                key: "{toast.generation}",
                class: "achievement-toast",
                div { class: "toast-icon", "{toast.node.icon}" }
                div {
                    div { class: "toast-kicker", "Advancement Made!" }
                    div { class: "toast-title", "{toast.node.title}" }
                }
            }
        }
    }
}
