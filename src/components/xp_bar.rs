//! XP Bar Component
//!
//! Fixed bar above the hotbar showing the current level and progress toward
//! the next. Also renders the level-up celebration overlay while the
//! progression tracker holds the signal up.

use dioxus::prelude::*;

use crate::context::use_progression;

#[component]
pub fn XpBar() -> Element {
    let mut progression = use_progression();

    let snapshot = progression();
    let level = snapshot.level();
    let pct = (snapshot.progress_fraction() * 100.0).round() as u32;

    rsx! {
        if snapshot.level_up_visible() {
            div {
                class: "level-up-overlay",
                // Click-through dismiss, same as waiting out the timer
                onclick: move |_| progression.write().dismiss_level_up(),
                div { class: "level-up-burst", "LEVEL UP!" }
            }
        }

        div { class: "xp-bar-wrap",
            div { class: "xp-level", "Level {level}" }
            div { class: "xp-track",
                div {
                    class: "xp-fill",
                    style: "width: {pct}%;",
                }
            }
        }
    }
}
