//! Blockfolio Core Library
//!
//! Interaction state for a Minecraft-themed portfolio application.
//!
//! ## Overview
//!
//! The portfolio is a single scrolling page of biographical sections rendered
//! behind a Minecraft skin. Everything that is actual *logic* (as opposed to
//! markup) lives here, free of any UI dependency:
//!
//! - **Crafting**: a 9-slot grid of placed ingredients and a first-match,
//!   order-insensitive recipe matcher ([`crafting`])
//! - **Progression**: XP and levels earned by scrolling sections into view,
//!   with a transient level-up signal ([`progression`])
//! - **Toasts**: once-per-session advancement notifications ([`toasts`])
//! - **Chat**: a looping, timed script of fake chat messages ([`chat`])
//! - **Settings**: the one piece of durable state, the dimension theme
//!   ([`storage`])
//!
//! Content tables (ingredients, recipes, projects, timeline, advancements)
//! are process-wide constants in [`content`].
//!
//! ## Quick Start
//!
//! ```
//! use blockfolio_core::crafting::{match_recipe, CraftingGrid};
//! use blockfolio_core::progression::Progression;
//!
//! let mut grid = CraftingGrid::new();
//! grid.place(0, "python");
//! grid.place(4, "tensorflow");
//! assert_eq!(match_recipe(&grid).map(|r| r.result.name), Some("ML Engineer"));
//!
//! let mut progression = Progression::default();
//! progression.section_viewed(blockfolio_core::SectionId::About);
//! assert_eq!(progression.xp(), 20);
//! ```

pub mod chat;
pub mod content;
pub mod crafting;
pub mod error;
pub mod progression;
pub mod storage;
pub mod toasts;
pub mod types;

// Re-exports
pub use chat::{ChatScript, CHAT_LOOP_PAUSE, CHAT_WINDOW};
pub use crafting::{match_recipe, CraftingGrid, GRID_SLOTS};
pub use error::{PortfolioError, PortfolioResult};
pub use progression::{Progression, ProgressionConfig, LEVEL_UP_DISPLAY, SECTION_XP};
pub use storage::Settings;
pub use toasts::{ToastTracker, TOAST_DURATION};
pub use types::*;
