//! Skybox Header Component
//!
//! Full-viewport hero with a dimension-tinted sky gradient and the
//! dimension toggle. The gradient colors come from the theme CSS variables,
//! so switching dimension restyles the whole page.

use dioxus::prelude::*;

use crate::context::{cycle_dimension, use_settings, use_theme_dimension};

#[component]
pub fn SkyboxHeader() -> Element {
    let dimension = use_theme_dimension();
    let settings = use_settings();

    let current = dimension();
    let next = current.cycled();

    rsx! {
        header { class: "skybox",
            div { class: "skybox-sun" }

            h1 { class: "skybox-title", "Dharmesh Priyadarshi" }
            p { class: "skybox-subtitle", "Software Engineer \u{2022} Cloud Builder \u{2022} Problem Solver" }

            button {
                class: "dimension-toggle",
                onclick: move |_| cycle_dimension(dimension, settings),
                "Dimension: {current} \u{2192} travel to {next}"
            }

            div { class: "skybox-hint", "\u{25bc} scroll to explore \u{25bc}" }
        }
    }
}
