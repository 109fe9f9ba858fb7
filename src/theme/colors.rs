//! Color constants for the Minecraft GUI palette.

#![allow(dead_code)]

// === GUI (panels and slots) ===
pub const GUI_PANEL: &str = "#c6c6c6";
pub const GUI_SLOT: &str = "#8b8b8b";
pub const GUI_BORDER_DARK: &str = "#373737";
pub const PANEL_NIGHT: &str = "#2a2a3e";
pub const PAGE_BG: &str = "#1a1a2e";

// === XP GREEN ===
pub const XP_GREEN: &str = "#80ff20";
pub const XP_GREEN_DEEP: &str = "#32a80e";
pub const GRASS_GREEN: &str = "#5d9b37";

// === TEXT ACCENTS ===
pub const GOLD: &str = "#ffaa00";
pub const AQUA: &str = "#55ffff";
pub const ENCHANT_LILAC: &str = "#c4a7d7";

// === DIMENSIONS ===
pub const OVERWORLD_SKY_TOP: &str = "#1a1a4e";
pub const OVERWORLD_SKY_BOTTOM: &str = "#b3d4fc";
pub const NETHER_SKY_TOP: &str = "#2b0a0a";
pub const NETHER_SKY_BOTTOM: &str = "#6e1d12";
pub const END_SKY_TOP: &str = "#0b0b14";
pub const END_SKY_BOTTOM: &str = "#2d2244";
