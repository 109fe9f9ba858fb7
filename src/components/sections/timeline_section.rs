//! Timeline Section (Experience)
//!
//! Adventure-log timeline along a vertical rail, newest entries first.

use dioxus::prelude::*;

use blockfolio_core::content::TIMELINE;
use blockfolio_core::types::SectionId;

use crate::context::{section_entered, use_progression};

#[component]
pub fn TimelineSection() -> Element {
    let progression = use_progression();

    rsx! {
        section {
            id: "experience",
            class: "mc-section",
            onvisible: move |evt| {
                if evt.data().is_intersecting().unwrap_or(false) {
                    section_entered(progression, SectionId::Experience);
                }
            },

            h2 { class: "section-title", "Adventure Log" }
            p { class: "section-hint", "The journey so far" }

            div { class: "timeline",
                div { class: "timeline-rail" }
                for entry in TIMELINE {
                    div {
                        key: "{entry.id}",
                        class: "timeline-entry",
                        div { class: "timeline-marker pixel-border-dark", "{entry.icon}" }
                        div { class: "timeline-card pixel-border",
                            div { class: "timeline-date", "{entry.date}" }
                            div { class: "timeline-title", "{entry.title}" }
                            div { class: "timeline-org", "{entry.org}" }
                            div { class: "timeline-desc", "{entry.description}" }
                        }
                    }
                }
            }
        }
    }
}
