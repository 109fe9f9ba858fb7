//! Core types for Blockfolio
//!
//! Everything here is plain data. The content tables in [`crate::content`]
//! are built from these types and never mutate after process start.

use serde::{Deserialize, Serialize};

/// Cosmetic rarity tier attached to content items.
///
/// Purely presentational: it picks a color, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Foreground color used for titles and borders
    pub fn color(&self) -> &'static str {
        match self {
            Rarity::Common => "#aaa",
            Rarity::Uncommon => "#55ff55",
            Rarity::Rare => "#5555ff",
            Rarity::Epic => "#aa00aa",
            Rarity::Legendary => "#ffaa00",
        }
    }

    /// Tinted panel background for node/popup surfaces
    pub fn background(&self) -> &'static str {
        match self {
            Rarity::Common => "#2a2a3e",
            Rarity::Uncommon => "#1a3a1a",
            Rarity::Rare => "#1a1a4a",
            Rarity::Epic => "#3a1a3a",
            Rarity::Legendary => "#3a2a0a",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The dimension theme. The one piece of state persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    #[default]
    Overworld,
    Nether,
    End,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Overworld => "overworld",
            Dimension::Nether => "nether",
            Dimension::End => "end",
        }
    }

    /// CSS class applied at the document root
    pub fn css_class(&self) -> &'static str {
        match self {
            Dimension::Overworld => "theme-overworld",
            Dimension::Nether => "theme-nether",
            Dimension::End => "theme-end",
        }
    }

    /// Next dimension in the fixed cycle overworld -> nether -> end -> overworld
    pub fn cycled(&self) -> Dimension {
        match self {
            Dimension::Overworld => Dimension::Nether,
            Dimension::Nether => Dimension::End,
            Dimension::End => Dimension::Overworld,
        }
    }
}

impl std::str::FromStr for Dimension {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overworld" => Ok(Dimension::Overworld),
            "nether" => Ok(Dimension::Nether),
            "end" => Ok(Dimension::End),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier for a scrolling page section.
///
/// Each section grants XP exactly once per session when it first scrolls
/// into view. A closed enumeration: the page has exactly these five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    About,
    Projects,
    Skills,
    Experience,
    Achievements,
}

impl SectionId {
    /// DOM anchor id the hotbar scrolls to
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Achievements => "achievements",
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.anchor())
    }
}

/// A craftable ingredient shown in the crafting-table palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ingredient {
    /// Unique key used in grids and recipe patterns
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    /// Enchantment-style flavor text lines
    pub lore: &'static [&'static str],
    /// Grouping label for the palette
    pub category: &'static str,
}

/// What a matched recipe produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeResult {
    pub name: &'static str,
    pub icon: &'static str,
    pub rarity: Rarity,
    pub description: &'static str,
}

/// A crafting recipe: an unordered requirement over ingredient ids.
///
/// The pattern is stored as a 9-slot grid for display purposes, but matching
/// ignores slot positions entirely (empty string = empty slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    pub id: &'static str,
    pub pattern: [&'static str; 9],
    pub result: RecipeResult,
}

impl Recipe {
    /// The non-empty entries of the pattern, in definition order.
    pub fn required(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pattern.iter().copied().filter(|p| !p.is_empty())
    }
}

/// A portfolio project displayed in the chest inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub rarity: Rarity,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub github: Option<&'static str>,
    /// The "boss mob" defeated while building it
    pub mob: &'static str,
    pub mob_icon: &'static str,
    /// Loot drops, i.e. headline outcomes
    pub loot: &'static [&'static str],
}

/// One entry in the adventure-log timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub id: &'static str,
    pub date: &'static str,
    pub title: &'static str,
    pub org: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// A node in the advancement tree.
///
/// `col`/`row` place the node on a fixed grid; `parent_id` is the node this
/// one branches from (None for the root).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvancementNode {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub col: u8,
    pub row: u8,
    pub parent_id: Option<&'static str>,
    pub rarity: Rarity,
}

/// One scripted chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u32,
    pub sender: &'static str,
    pub text: &'static str,
    pub color: &'static str,
    /// System lines render without the `<sender>` prefix
    pub is_system: bool,
}

/// A hotbar slot. Empty slots have no label and no target section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotbarItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub section: Option<SectionId>,
}

/// An equipment slot on the character menu (core values).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmorSlot {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// A character stat line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatLine {
    pub label: &'static str,
    pub value: &'static str,
}
