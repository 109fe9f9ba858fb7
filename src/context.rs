//! Session-state context for Blockfolio.
//!
//! The progression tracker, toast state, theme dimension and settings
//! handle are owned by the [`App`](crate::app::App) scope and injected via
//! Dioxus context. Components reach them through the hooks below instead
//! of any ambient global.
//!
//! ## Usage
//!
//! ```ignore
//! // In a child component
//! let progression = use_progression();
//! let level = progression().level();
//! ```

use dioxus::prelude::*;

use blockfolio_core::progression::{Progression, LEVEL_UP_DISPLAY};
use blockfolio_core::storage::Settings;
use blockfolio_core::toasts::{ToastTracker, TOAST_DURATION};
use blockfolio_core::types::{AdvancementNode, Dimension, SectionId};

/// Hook to access the XP/level progression state.
pub fn use_progression() -> Signal<Progression> {
    use_context::<Signal<Progression>>()
}

/// Hook to access the current dimension theme.
pub fn use_theme_dimension() -> Signal<Dimension> {
    use_context::<Signal<Dimension>>()
}

/// Hook to access the settings store. None while opening failed; the app
/// still runs, the theme just does not persist.
pub fn use_settings() -> Signal<Option<Settings>> {
    use_context::<Signal<Option<Settings>>>()
}

/// Hook to access the once-per-id toast tracker.
pub fn use_toast_tracker() -> Signal<ToastTracker> {
    use_context::<Signal<ToastTracker>>()
}

/// The toast currently on screen, if any.
///
/// The generation stamps which sighting owns the display slot, so a stale
/// auto-hide timer never clears a newer toast (last-write-wins).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveToast {
    pub node: &'static AdvancementNode,
    pub generation: u64,
}

/// Hook to access the active toast display slot.
pub fn use_active_toast() -> Signal<Option<ActiveToast>> {
    use_context::<Signal<Option<ActiveToast>>>()
}

/// Report that `section` scrolled into view.
///
/// Feeds the progression tracker (idempotent per section). When the reward
/// crosses a level threshold this also plays the level-up sound and starts
/// the auto-dismiss timer for the celebration overlay.
pub fn section_entered(mut progression: Signal<Progression>, section: SectionId) {
    let leveled_up = progression.write().section_viewed(section);
    if leveled_up {
        celebrate_level_up(progression);
    }
}

fn celebrate_level_up(mut progression: Signal<Progression>) {
    play_level_up_sound();
    // Spawned in the caller's scope: torn-down views cancel the timer.
    spawn(async move {
        tokio::time::sleep(LEVEL_UP_DISPLAY).await;
        progression.write().dismiss_level_up();
    });
}

/// Best-effort level-up sound. Autoplay policy may reject playback; that
/// is never an error.
fn play_level_up_sound() {
    let _ = dioxus::document::eval(
        r#"try {
            const audio = new Audio("sounds/levelup.mp3");
            audio.volume = 0.4;
            audio.play().catch(() => {});
        } catch (_) {}"#,
    );
}

/// Report that advancement `node` scrolled into view.
///
/// First sighting per id shows a toast for [`TOAST_DURATION`]; a newer
/// sighting replaces the current toast and restarts the clock.
pub fn advancement_sighted(
    mut tracker: Signal<ToastTracker>,
    mut active: Signal<Option<ActiveToast>>,
    node: &'static AdvancementNode,
) {
    let Some(generation) = tracker.write().entity_visible(node.id) else {
        return;
    };
    active.set(Some(ActiveToast { node, generation }));

    spawn(async move {
        tokio::time::sleep(TOAST_DURATION).await;
        let current = *active.peek();
        if current.map(|t| t.generation) == Some(generation) {
            active.set(None);
        }
    });
}

/// Cycle the dimension theme and persist the choice.
pub fn cycle_dimension(mut dimension: Signal<Dimension>, settings: Signal<Option<Settings>>) {
    let next = dimension().cycled();
    dimension.set(next);
    tracing::info!(dimension = %next, "dimension changed");

    if let Some(store) = settings.peek().as_ref() {
        if let Err(e) = store.save_dimension(next) {
            tracing::warn!(error = %e, "failed to persist dimension");
        }
    }
}

/// Smooth-scroll the page to a section anchor.
pub fn scroll_to_section(section: SectionId) {
    let js = format!(
        r#"const el = document.getElementById("{}");
        if (el) el.scrollIntoView({{ behavior: "smooth", block: "start" }});"#,
        section.anchor()
    );
    let _ = dioxus::document::eval(&js);
}
