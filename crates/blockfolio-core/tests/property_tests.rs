//! Property-based tests for crafting and progression
//!
//! Uses proptest to verify the matcher's permutation invariance and the
//! progression state machine's invariants.

use proptest::prelude::*;
use proptest::sample;

use blockfolio_core::content::RECIPES;
use blockfolio_core::crafting::{match_recipe, CraftingGrid, GRID_SLOTS};
use blockfolio_core::progression::{Progression, ProgressionConfig, SECTION_XP};
use blockfolio_core::types::SectionId;

// ============================================================================
// Strategy Generators
// ============================================================================

/// A recipe index, its required ingredients in random order, and random
/// distinct grid slots to place them into.
fn placement_strategy() -> impl Strategy<Value = (usize, Vec<&'static str>, Vec<usize>)> {
    (0..RECIPES.len()).prop_flat_map(|idx| {
        let required: Vec<&'static str> = RECIPES[idx].required().collect();
        let count = required.len();
        (
            Just(idx),
            Just(required).prop_shuffle(),
            sample::subsequence((0..GRID_SLOTS).collect::<Vec<_>>(), count),
        )
    })
}

fn section_strategy() -> impl Strategy<Value = SectionId> {
    sample::select(vec![
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Achievements,
    ])
}

// ============================================================================
// Recipe Matcher Properties
// ============================================================================

proptest! {
    /// Any permutation of a recipe's ingredients, in any subset of slots,
    /// matches exactly that recipe.
    #[test]
    fn match_is_permutation_invariant((idx, shuffled, slots) in placement_strategy()) {
        let mut grid = CraftingGrid::new();
        for (&ingredient, &slot) in shuffled.iter().zip(slots.iter()) {
            grid.place(slot, ingredient);
        }
        let matched = match_recipe(&grid);
        prop_assert_eq!(matched.map(|r| r.id), Some(RECIPES[idx].id));
    }

    /// Dropping one ingredient from a placed recipe breaks the match for
    /// that recipe (a strict subset never matches it).
    #[test]
    fn strict_subset_never_matches_the_recipe(
        (idx, shuffled, slots) in placement_strategy(),
        removed in any::<proptest::sample::Index>(),
    ) {
        let mut grid = CraftingGrid::new();
        for (&ingredient, &slot) in shuffled.iter().zip(slots.iter()) {
            grid.place(slot, ingredient);
        }
        grid.remove(slots[removed.index(slots.len())]);
        let matched = match_recipe(&grid);
        prop_assert_ne!(matched.map(|r| r.id), Some(RECIPES[idx].id));
    }
}

// ============================================================================
// Progression Properties
// ============================================================================

proptest! {
    /// For any sequence of section-view events, the level never decreases
    /// and XP stays within [0, xp_per_level].
    #[test]
    fn xp_monotonicity(sections in prop::collection::vec(section_strategy(), 0..40)) {
        let mut p = Progression::default();
        let cap = p.config().xp_per_level;

        let mut last_level = p.level();
        for section in sections {
            p.section_viewed(section);
            prop_assert!(p.level() >= last_level);
            prop_assert!(p.xp() <= cap);
            last_level = p.level();
        }
    }

    /// Section rewards are granted once per distinct section, so total
    /// earned XP is exactly distinct_sections * SECTION_XP.
    #[test]
    fn section_rewards_are_exactly_once(sections in prop::collection::vec(section_strategy(), 0..40)) {
        let mut p = Progression::default();
        for &section in &sections {
            p.section_viewed(section);
        }

        let mut distinct = sections.clone();
        distinct.sort_by_key(|s| s.anchor());
        distinct.dedup();

        let earned = (p.level() - 1) * p.config().xp_per_level + p.xp();
        prop_assert_eq!(earned, distinct.len() as u32 * SECTION_XP);
    }

    /// Arbitrary XP grants never push the level past the cap, and once
    /// capped the XP value clamps at xp_per_level.
    #[test]
    fn level_never_exceeds_cap(amounts in prop::collection::vec(0u32..500, 0..100)) {
        let config = ProgressionConfig { xp_per_level: 100, max_level: 5 };
        let mut p = Progression::new(config);
        for amount in amounts {
            p.add_xp(amount);
            prop_assert!(p.level() <= config.max_level);
            if p.level() == config.max_level {
                prop_assert!(p.xp() <= config.xp_per_level);
            }
        }
    }

    /// The level-up signal fires iff a threshold is crossed below the cap.
    #[test]
    fn signal_fires_only_on_threshold(start in 0u32..100, amount in 0u32..300) {
        let mut p = Progression::default();
        p.add_xp(start.min(99));
        p.dismiss_level_up();
        let before = p.level();

        let fired = p.add_xp(amount);
        prop_assert_eq!(fired, p.level() > before);
        prop_assert_eq!(fired, p.level_up_visible());
    }
}
