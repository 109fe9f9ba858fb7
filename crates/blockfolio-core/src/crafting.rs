//! Crafting grid and recipe matching.
//!
//! The grid is an ordered sequence of exactly nine slots, each empty or
//! holding one ingredient id. Matching is order-insensitive: a recipe
//! matches when the multiset of placed ingredients equals the multiset of
//! the recipe's non-empty pattern entries. Slot positions never matter.

use crate::content::RECIPES;
use crate::types::Recipe;

/// Number of slots in the crafting grid.
pub const GRID_SLOTS: usize = 9;

/// The 3x3 crafting grid, owned by the crafting-table session.
///
/// Not persisted; created empty when the page loads and discarded with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CraftingGrid {
    slots: [Option<&'static str>; GRID_SLOTS],
}

impl CraftingGrid {
    /// Create an all-empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// The slot contents, top-left to bottom-right.
    pub fn slots(&self) -> &[Option<&'static str>; GRID_SLOTS] {
        &self.slots
    }

    /// Ingredient in `slot`, if any. Out-of-range slots read as empty.
    pub fn get(&self, slot: usize) -> Option<&'static str> {
        self.slots.get(slot).copied().flatten()
    }

    /// Place `ingredient` into `slot`, replacing whatever was there.
    /// Out-of-range slots are ignored.
    pub fn place(&mut self, slot: usize, ingredient: &'static str) {
        if let Some(s) = self.slots.get_mut(slot) {
            *s = Some(ingredient);
        }
    }

    /// Empty a single slot.
    pub fn remove(&mut self, slot: usize) {
        if let Some(s) = self.slots.get_mut(slot) {
            *s = None;
        }
    }

    /// Reset every slot to empty.
    pub fn clear(&mut self) {
        self.slots = [None; GRID_SLOTS];
    }

    /// Whether `ingredient` is currently placed anywhere on the grid.
    pub fn contains(&self, ingredient: &str) -> bool {
        self.slots.iter().any(|s| *s == Some(ingredient))
    }

    /// Whether every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// The placed ingredient ids, in slot order.
    pub fn placed(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.slots.iter().copied().flatten()
    }
}

/// Find the first recipe in `recipes` whose requirement multiset equals the
/// grid's placed ingredients.
///
/// Pure and total: no side effects, `None` when nothing matches (including
/// the all-empty grid, since no recipe has an empty requirement).
pub fn match_recipe_in<'a>(grid: &CraftingGrid, recipes: &'a [Recipe]) -> Option<&'a Recipe> {
    let mut placed: Vec<&str> = grid.placed().collect();
    placed.sort_unstable();

    recipes.iter().find(|recipe| {
        let mut required: Vec<&str> = recipe.required().collect();
        if required.len() != placed.len() {
            return false;
        }
        required.sort_unstable();
        required == placed
    })
}

/// [`match_recipe_in`] against the fixed recipe book.
pub fn match_recipe(grid: &CraftingGrid) -> Option<&'static Recipe> {
    match_recipe_in(grid, RECIPES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rarity, RecipeResult};

    fn grid_with(placements: &[(usize, &'static str)]) -> CraftingGrid {
        let mut grid = CraftingGrid::new();
        for &(slot, id) in placements {
            grid.place(slot, id);
        }
        grid
    }

    #[test]
    fn test_empty_grid_matches_nothing() {
        assert!(match_recipe(&CraftingGrid::new()).is_none());
    }

    #[test]
    fn test_exact_placement_matches() {
        let grid = grid_with(&[(0, "cpp"), (1, "aws"), (2, "docker")]);
        let recipe = match_recipe(&grid).expect("should match");
        assert_eq!(recipe.id, "r1");
    }

    #[test]
    fn test_match_ignores_slot_positions() {
        // Same ingredients scattered across arbitrary slots.
        let grid = grid_with(&[(8, "docker"), (4, "cpp"), (2, "aws")]);
        assert_eq!(match_recipe(&grid).map(|r| r.id), Some("r1"));
    }

    #[test]
    fn test_subset_does_not_match() {
        let grid = grid_with(&[(0, "cpp"), (1, "aws")]);
        assert!(match_recipe(&grid).is_none());
    }

    #[test]
    fn test_superset_does_not_match() {
        let grid = grid_with(&[(0, "cpp"), (1, "aws"), (2, "docker"), (3, "git")]);
        assert!(match_recipe(&grid).is_none());
    }

    #[test]
    fn test_two_ingredient_recipe() {
        let grid = grid_with(&[(6, "tensorflow"), (1, "python")]);
        assert_eq!(match_recipe(&grid).map(|r| r.result.name), Some("ML Engineer"));
    }

    #[test]
    fn test_duplicate_ingredients_are_multiset_counted() {
        // Two copies of an ingredient are not the same as one.
        let single = RecipeResult {
            name: "x",
            icon: "x",
            rarity: Rarity::Common,
            description: "",
        };
        let recipes = [Recipe {
            id: "double-git",
            pattern: ["git", "git", "", "", "", "", "", "", ""],
            result: single,
        }];
        let one = grid_with(&[(0, "git")]);
        assert!(match_recipe_in(&one, &recipes).is_none());
        let two = grid_with(&[(3, "git"), (7, "git")]);
        assert_eq!(match_recipe_in(&two, &recipes).map(|r| r.id), Some("double-git"));
    }

    #[test]
    fn test_first_listed_recipe_wins_on_duplicates() {
        let result = RecipeResult {
            name: "x",
            icon: "x",
            rarity: Rarity::Common,
            description: "",
        };
        let recipes = [
            Recipe { id: "first", pattern: ["git", "", "", "", "", "", "", "", ""], result },
            Recipe { id: "second", pattern: ["", "", "", "", "git", "", "", "", ""], result },
        ];
        let grid = grid_with(&[(5, "git")]);
        assert_eq!(match_recipe_in(&grid, &recipes).map(|r| r.id), Some("first"));
    }

    #[test]
    fn test_grid_place_remove_clear() {
        let mut grid = CraftingGrid::new();
        assert!(grid.is_empty());

        grid.place(4, "redis");
        assert_eq!(grid.get(4), Some("redis"));
        assert!(grid.contains("redis"));
        assert!(!grid.is_empty());

        grid.remove(4);
        assert!(grid.is_empty());

        grid.place(0, "git");
        grid.place(8, "linux");
        grid.clear();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_out_of_range_slots_are_ignored() {
        let mut grid = CraftingGrid::new();
        grid.place(GRID_SLOTS, "git");
        assert!(grid.is_empty());
        assert_eq!(grid.get(GRID_SLOTS + 3), None);
        grid.remove(100);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_matching_has_no_side_effects() {
        let grid = grid_with(&[(0, "python"), (1, "tensorflow")]);
        let before = grid.clone();
        let _ = match_recipe(&grid);
        let _ = match_recipe(&grid);
        assert_eq!(grid, before);
    }
}
