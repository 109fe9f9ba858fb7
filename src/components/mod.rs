//! UI components for Blockfolio.
//!
//! Fixed overlays (xp bar, hotbar, chat log, toast) live at this level;
//! the scrolling page sections are under [`sections`].

mod chat_log;
mod dirt_footer;
mod hotbar;
mod skybox_header;
mod toast;
mod xp_bar;

pub mod sections;

pub use chat_log::ChatLog;
pub use dirt_footer::DirtFooter;
pub use hotbar::Hotbar;
pub use skybox_header::SkyboxHeader;
pub use toast::AdvancementToast;
pub use xp_bar::XpBar;
