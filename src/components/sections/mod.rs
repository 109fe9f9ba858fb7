//! Scrolling page sections.
//!
//! Each section reports its first scroll-into-view to the progression
//! tracker via `onvisible`, which grants the one-time XP reward.

mod advancement_tree;
mod character_menu;
mod chest_inventory;
mod crafting_table;
mod timeline_section;

pub use advancement_tree::AdvancementTree;
pub use character_menu::CharacterMenu;
pub use chest_inventory::ChestInventory;
pub use crafting_table::CraftingTable;
pub use timeline_section::TimelineSection;
