//! Advancement Tree Section (Achievements)
//!
//! Milestones laid out on a fixed grid like the in-game advancements
//! screen. Each node fires a one-time toast when it first scrolls into
//! view; hovering shows the detail popup.

use dioxus::prelude::*;

use blockfolio_core::content::ADVANCEMENTS;
use blockfolio_core::types::SectionId;

use crate::context::{
    advancement_sighted, section_entered, use_active_toast, use_progression, use_toast_tracker,
};

#[component]
pub fn AdvancementTree() -> Element {
    let progression = use_progression();
    let tracker = use_toast_tracker();
    let active_toast = use_active_toast();
    let mut hovered: Signal<Option<&'static str>> = use_signal(|| None);

    rsx! {
        section {
            id: "achievements",
            class: "mc-section",
            onvisible: move |evt| {
                if evt.data().is_intersecting().unwrap_or(false) {
                    section_entered(progression, SectionId::Achievements);
                }
            },

            h2 { class: "section-title", "Advancements" }
            p { class: "section-hint", "Hover a node for details" }

            div { class: "night-panel pixel-border",
                div { class: "tree-grid",
                    for node in ADVANCEMENTS {
                        {
                            let col = node.col + 1;
                            let row = node.row + 1;
                            rsx! {
                                div {
                                    key: "{node.id}",
                                    class: "tree-node-cell",
                                    style: "grid-column: {col}; grid-row: {row};",
                                    onvisible: move |evt| {
                                        if evt.data().is_intersecting().unwrap_or(false) {
                                            advancement_sighted(tracker, active_toast, node);
                                        }
                                    },
                                    div {
                                        class: "tree-node pixel-border",
                                        style: "background: {node.rarity.background()}; border-color: {node.rarity.color()};",
                                        onmouseenter: move |_| hovered.set(Some(node.id)),
                                        onmouseleave: move |_| hovered.set(None),
                                        div { class: "tree-node-icon", "{node.icon}" }
                                        div { class: "tree-node-title", "{node.title}" }
                                    }
                                    if hovered() == Some(node.id) {
                                        div {
                                            class: "tree-popup pixel-border",
                                            style: "background: {node.rarity.background()};",
                                            div {
                                                class: "tree-popup-title",
                                                style: "color: {node.rarity.color()};",
                                                "{node.title}"
                                            }
                                            div { class: "tree-popup-desc", "{node.description}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
