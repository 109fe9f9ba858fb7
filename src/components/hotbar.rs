//! Hotbar Component
//!
//! Fixed bottom navigation styled as the nine-slot Minecraft hotbar. The
//! first five slots scroll to page sections; the rest are cosmetic padding.

use dioxus::prelude::*;

use blockfolio_core::content::HOTBAR;

use crate::context::scroll_to_section;

#[component]
pub fn Hotbar() -> Element {
    let mut active_slot: Signal<usize> = use_signal(|| 0);

    rsx! {
        nav { class: "hotbar",
            for (idx, item) in HOTBAR.iter().enumerate() {
                {
                    let num = idx + 1;
                    let is_active = active_slot() == idx;
                    let slot_class = if is_active { "hotbar-slot active" } else { "hotbar-slot" };
                    let section = item.section;
                    rsx! {
                        div {
                            key: "{item.id}",
                            class: "hotbar-slot-wrap",
                            button {
                                class: "{slot_class}",
                                title: "{item.label}",
                                onclick: move |_| {
                                    if let Some(section) = section {
                                        active_slot.set(idx);
                                        scroll_to_section(section);
                                    }
                                },
                                "{item.icon}"
                            }
                            span { class: "hotbar-num", "{num}" }
                        }
                    }
                }
            }
        }
    }
}
