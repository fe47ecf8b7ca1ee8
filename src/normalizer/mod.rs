//! Turns raw recipe fields into display- and speech-ready text.
//!
//! Every function here is pure: same input, same output, no I/O. Nothing
//! fails; empty input degrades to an empty list or a named fallback.

mod badge;
mod cooking_time;
mod ingredients;
mod instructions;
mod rules;
mod title;

pub use badge::format_badge_text;
pub use cooking_time::{format_cooking_time, UNSPECIFIED_TIME};
pub use ingredients::{format_ingredient_list, INGREDIENT_DENYLIST};
pub use instructions::{format_instruction_list, INSTRUCTION_DENYLIST};
pub use title::{format_title, FALLBACK_TITLE};

use crate::model::{DisplayRecipe, RawRecipe};
use log::debug;

/// Normalize every field of a raw recipe.
pub fn normalize_recipe(raw: &RawRecipe) -> DisplayRecipe {
    let ingredients = format_ingredient_list(&raw.ingredients);
    let instructions = format_instruction_list(&raw.instructions);

    debug!(
        "Kept {}/{} ingredients and {}/{} instructions",
        ingredients.len(),
        raw.ingredients.len(),
        instructions.len(),
        raw.instructions.len()
    );

    DisplayRecipe {
        title: format_title(&raw.title),
        ingredients,
        instructions,
        cooking_time: format_cooking_time(raw.cooking_time.as_deref().unwrap_or_default()),
        difficulty: raw.difficulty.as_deref().and_then(format_badge_text),
        servings: raw.servings.as_deref().and_then(format_badge_text),
    }
}
