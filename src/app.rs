use dioxus::prelude::*;

use blockfolio_core::progression::Progression;
use blockfolio_core::storage::Settings;
use blockfolio_core::toasts::ToastTracker;
use blockfolio_core::types::Dimension;

use crate::components::sections::{
    AdvancementTree, CharacterMenu, ChestInventory, CraftingTable, TimelineSection,
};
use crate::components::{AdvancementToast, ChatLog, DirtFooter, Hotbar, SkyboxHeader, XpBar};
use crate::context::ActiveToast;
use crate::get_data_dir;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns all session state (progression, toasts, theme) and provides it via
/// context; loads the persisted dimension on mount. The page itself is one
/// scroll of sections with fixed overlays on top.
#[component]
pub fn App() -> Element {
    let progression: Signal<Progression> = use_signal(Progression::default);
    let toast_tracker: Signal<ToastTracker> = use_signal(ToastTracker::new);
    let active_toast: Signal<Option<ActiveToast>> = use_signal(|| None);
    let mut settings: Signal<Option<Settings>> = use_signal(|| None);
    let mut dimension: Signal<Dimension> = use_signal(Dimension::default);

    // Provide session state to all child components
    use_context_provider(|| progression);
    use_context_provider(|| toast_tracker);
    use_context_provider(|| active_toast);
    use_context_provider(|| settings);
    use_context_provider(|| dimension);

    // Open the settings store and restore the persisted theme on mount.
    // A broken store is logged and ignored; the default theme applies.
    use_effect(move || {
        let path = get_data_dir().join("settings.redb");
        match Settings::open(&path) {
            Ok(store) => {
                dimension.set(store.load_dimension());
                settings.set(Some(store));
                tracing::info!("settings loaded from {:?}", path);
            }
            Err(e) => {
                tracing::warn!(error = %e, "settings unavailable, theme will not persist");
            }
        }
    });

    let theme_class = dimension().css_class();

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "mc-root {theme_class}",
            SkyboxHeader {}

            div { class: "mc-page",
                CharacterMenu {}
                div { class: "section-divider" }
                ChestInventory {}
                div { class: "section-divider" }
                CraftingTable {}
                div { class: "section-divider" }
                TimelineSection {}
                div { class: "section-divider" }
                AdvancementTree {}
            }

            DirtFooter {}

            // Fixed overlay layer
            AdvancementToast {}
            ChatLog {}
            Hotbar {}
            XpBar {}
        }
    }
}
