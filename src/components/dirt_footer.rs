//! Dirt Footer Component
//!
//! Grass-topped dirt block strip with wooden sign links.

use dioxus::prelude::*;

use blockfolio_core::content::FOOTER_LINKS;

#[component]
pub fn DirtFooter() -> Element {
    rsx! {
        footer { class: "dirt-footer",
            div { class: "grass-strip" }
            div { class: "dirt-body",
                div { class: "sign-row",
                    for (label, href) in FOOTER_LINKS.iter().copied() {
                        a {
                            key: "{label}",
                            class: "wood-sign",
                            href: "{href}",
                            target: "_blank",
                            div { class: "sign-face", "{label}" }
                            div { class: "sign-post" }
                        }
                    }
                }
                p { class: "footer-credit",
                    "\u{00a9} 2026 Dharmesh Priyadarshi \u{2022} No creepers were harmed in the making of this site"
                }
            }
        }
    }
}
