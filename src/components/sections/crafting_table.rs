//! Crafting Table Section (Skills)
//!
//! Interactive 3x3 crafting grid. Clicking a palette ingredient drops it
//! into the first empty slot (or takes it back off the grid); clicking a
//! filled grid slot empties it. The matcher in core decides the output.

use dioxus::prelude::*;

use blockfolio_core::content::{ingredient, ingredient_categories, INGREDIENTS, RECIPES};
use blockfolio_core::crafting::{match_recipe, CraftingGrid, GRID_SLOTS};
use blockfolio_core::types::SectionId;

use crate::context::{section_entered, use_progression};

#[component]
pub fn CraftingTable() -> Element {
    let progression = use_progression();
    let mut grid: Signal<CraftingGrid> = use_signal(CraftingGrid::new);

    let snapshot = grid();
    let matched = match_recipe(&snapshot);

    rsx! {
        section {
            id: "skills",
            class: "mc-section",
            onvisible: move |evt| {
                if evt.data().is_intersecting().unwrap_or(false) {
                    section_entered(progression, SectionId::Skills);
                }
            },

            h2 { class: "section-title", "Crafting Table" }
            p { class: "section-hint", "Combine skills to craft a role" }

            div { class: "crafting-layout",
                // Ingredient palette
                div { class: "night-panel pixel-border",
                    for category in ingredient_categories() {
                        div { class: "palette-category", "{category}" }
                        div { class: "palette-row",
                            for ing in INGREDIENTS.iter().filter(|i| i.category == category) {
                                {
                                    let id = ing.id;
                                    let on_grid = snapshot.contains(id);
                                    let btn_class = if on_grid { "ingredient-btn selected" } else { "ingredient-btn" };
                                    rsx! {
                                        button {
                                            key: "{id}",
                                            class: "{btn_class}",
                                            onclick: move |_| {
                                                let mut g = grid.write();
                                                let existing = g.slots().iter().position(|s| *s == Some(id));
                                                match existing {
                                                    Some(slot) => g.remove(slot),
                                                    None => {
                                                        let empty = g.slots().iter().position(Option::is_none);
                                                        if let Some(slot) = empty {
                                                            g.place(slot, id);
                                                        }
                                                    }
                                                }
                                            },
                                            "{ing.icon}"
                                            span { class: "ingredient-name", "{ing.name}" }
                                            div { class: "lore-tooltip",
                                                div { class: "lore-name", "{ing.name}" }
                                                for line in ing.lore {
                                                    div { key: "{line}", class: "lore-line", "{line}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                // Grid, arrow, output
                div { class: "night-panel pixel-border",
                    div { class: "craft-row",
                        div { class: "craft-grid",
                            for slot in 0..GRID_SLOTS {
                                {
                                    let placed = snapshot.get(slot).and_then(ingredient);
                                    rsx! {
                                        button {
                                            key: "slot-{slot}",
                                            class: "craft-slot placeable pixel-border-dark",
                                            onclick: move |_| grid.write().remove(slot),
                                            if let Some(ing) = placed {
                                                "{ing.icon}"
                                                div { class: "lore-tooltip",
                                                    div { class: "lore-name", "{ing.name}" }
                                                    for line in ing.lore {
                                                        div { key: "{line}", class: "lore-line", "{line}" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        div { class: "craft-arrow", "\u{27a1}\u{fe0f}" }

                        if let Some(recipe) = matched {
                            div { class: "craft-output matched pixel-border-dark", "{recipe.result.icon}" }
                        } else {
                            div { class: "craft-output pixel-border-dark" }
                        }
                    }

                    if !snapshot.is_empty() {
                        button {
                            class: "craft-clear",
                            onclick: move |_| grid.write().clear(),
                            "Clear Grid"
                        }
                    }

                    if let Some(recipe) = matched {
                        div {
                            class: "result-card pixel-border",
                            style: "border-color: {recipe.result.rarity.color()};",
                            div {
                                class: "result-name",
                                style: "color: {recipe.result.rarity.color()};",
                                "{recipe.result.icon} {recipe.result.name}"
                            }
                            div { class: "result-rarity", "{recipe.result.rarity}" }
                            div { class: "result-desc", "{recipe.result.description}" }
                        }
                    }
                }
            }

            div { class: "recipe-hints",
                div { class: "recipe-hint-label", "Recipe book" }
                for recipe in RECIPES {
                    {
                        let required: Vec<&str> = recipe
                            .required()
                            .filter_map(|id| ingredient(id).map(|i| i.name))
                            .collect();
                        let hint = required.join(" + ");
                        rsx! {
                            span { key: "{recipe.id}", class: "recipe-hint",
                                "{hint} = {recipe.result.name}"
                            }
                        }
                    }
                }
            }
        }
    }
}
