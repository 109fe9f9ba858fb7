//! Character Menu Section (About)
//!
//! Inventory-screen style about section: avatar frame on the left,
//! equipment slots and stat lines on the right.

use dioxus::prelude::*;

use blockfolio_core::content::{ARMOR_SLOTS, STATS};
use blockfolio_core::types::SectionId;

use crate::context::{section_entered, use_progression};

#[component]
pub fn CharacterMenu() -> Element {
    let progression = use_progression();

    rsx! {
        section {
            id: "about",
            class: "mc-section",
            onvisible: move |evt| {
                if evt.data().is_intersecting().unwrap_or(false) {
                    section_entered(progression, SectionId::About);
                }
            },

            h2 { class: "section-title", "Character Menu" }
            p { class: "section-hint", "Player stats and equipped traits" }

            div { class: "gui-panel pixel-border character-grid",
                div {
                    div { class: "avatar-frame pixel-border-dark", "\u{1f9d1}\u{200d}\u{1f4bb}" }
                    p { class: "avatar-caption", "Dharmesh Priyadarshi" }
                    p { class: "avatar-caption", "Software Engineer" }
                }

                div {
                    div { class: "gui-panel-label", "Equipment" }
                    for slot in ARMOR_SLOTS {
                        div {
                            key: "{slot.label}",
                            class: "armor-slot pixel-border-dark",
                            div { class: "armor-slot-icon", "{slot.icon}" }
                            div {
                                div { class: "armor-slot-label", "{slot.label}" }
                                div {
                                    class: "armor-slot-value",
                                    style: "color: {slot.color};",
                                    "{slot.value}"
                                }
                            }
                        }
                    }

                    div { class: "stats-block",
                        div { class: "gui-panel-label", "Stats" }
                        for stat in STATS {
                            div {
                                key: "{stat.label}",
                                class: "stat-row",
                                span { "{stat.label}" }
                                span { "{stat.value}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
