//! Chest Inventory Section (Projects)
//!
//! Projects displayed as items in a 54-slot double chest. Clicking a
//! filled slot opens the item-tooltip modal with stack, mob and loot
//! details.

use dioxus::prelude::*;

use blockfolio_core::content::{CHEST_SLOTS, PROJECTS};
use blockfolio_core::types::{Project, SectionId};

use crate::context::{section_entered, use_progression};

#[component]
pub fn ChestInventory() -> Element {
    let progression = use_progression();
    let mut selected: Signal<Option<&'static Project>> = use_signal(|| None);

    rsx! {
        section {
            id: "projects",
            class: "mc-section",
            onvisible: move |evt| {
                if evt.data().is_intersecting().unwrap_or(false) {
                    section_entered(progression, SectionId::Projects);
                }
            },

            h2 { class: "section-title", "Large Chest" }
            p { class: "section-hint", "Click an item to inspect the loot" }

            div { class: "gui-panel pixel-border",
                div { class: "gui-panel-label", "Projects" }
                div { class: "chest-grid",
                    for slot in 0..CHEST_SLOTS {
                        if let Some(project) = PROJECTS.get(slot) {
                            button {
                                key: "{project.id}",
                                class: "chest-slot pixel-border-dark",
                                title: "{project.name}",
                                onclick: move |_| selected.set(Some(project)),
                                "{project.icon}"
                                div {
                                    class: "rarity-strip",
                                    style: "background: {project.rarity.color()};",
                                }
                            }
                        } else {
                            div { key: "empty-{slot}", class: "chest-slot pixel-border-dark" }
                        }
                    }
                }
            }

            if let Some(project) = selected() {
                div {
                    class: "modal-backdrop",
                    onclick: move |_| selected.set(None),
                    div {
                        class: "modal-panel pixel-border",
                        style: "border-color: {project.rarity.color()};",
                        // Swallow clicks so the backdrop handler does not close us
                        onclick: move |evt| evt.stop_propagation(),

                        h3 {
                            class: "modal-title",
                            style: "color: {project.rarity.color()};",
                            "{project.icon} {project.name}"
                        }
                        p {
                            class: "modal-rarity",
                            style: "color: {project.rarity.color()};",
                            "{project.rarity}"
                        }
                        p { class: "modal-body", "{project.description}" }

                        div { class: "modal-heading", "Crafted With" }
                        div {
                            for tech in project.tech_stack {
                                span { key: "{tech}", class: "tech-chip", "{tech}" }
                            }
                        }

                        div { class: "modal-heading", "Boss Defeated" }
                        p { class: "modal-body", "{project.mob_icon} {project.mob}" }

                        div { class: "modal-heading", "Loot Drops" }
                        for line in project.loot {
                            p { key: "{line}", class: "loot-line", "\u{2726} {line}" }
                        }

                        if let Some(github) = project.github {
                            a {
                                href: "{github}",
                                target: "_blank",
                                button { class: "modal-close", "View on GitHub" }
                            }
                        }
                        button {
                            class: "modal-close",
                            onclick: move |_| selected.set(None),
                            "Close"
                        }
                    }
                }
            }
        }
    }
}
