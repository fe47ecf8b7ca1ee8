//! Degraded-mode parsing for completions that are not valid JSON.
//!
//! This is a best-effort reconstruction from line positions alone. It is
//! only reached when decoding fails, and everything it produces still goes
//! through the normalizer like any other raw recipe.

use crate::model::RawRecipe;
use crate::normalizer::FALLBACK_TITLE;
use regex::Regex;
use std::sync::LazyLock;

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s*").unwrap());

const INGREDIENT_LINES: std::ops::Range<usize> = 2..6;

/// Placeholder cooking time for recipes rebuilt from lines.
pub const LOOSE_COOKING_TIME: &str = "20-30 minutes";
/// Placeholder difficulty for recipes rebuilt from lines.
pub const LOOSE_DIFFICULTY: &str = "Easy";

/// Rebuild a recipe from the non-empty lines of free text.
///
/// The first line is assumed to be a preamble and the second the title;
/// the next four lines are ingredients and the rest are steps, renumbered
/// from one.
pub fn parse_lines(content: &str) -> RawRecipe {
    let lines: Vec<&str> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    let title = lines
        .get(1)
        .map(|line| line.to_string())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string());

    let ingredients = lines
        .iter()
        .skip(INGREDIENT_LINES.start)
        .take(INGREDIENT_LINES.len())
        .map(|&line| line.strip_prefix('-').unwrap_or(line).trim_start().to_string())
        .collect();

    let instructions = lines
        .iter()
        .skip(INGREDIENT_LINES.end)
        .enumerate()
        .map(|(index, line)| format!("{}. {}", index + 1, LEADING_NUMBER.replace(line, "")))
        .collect();

    RawRecipe {
        title,
        ingredients,
        instructions,
        cooking_time: Some(LOOSE_COOKING_TIME.to_string()),
        difficulty: Some(LOOSE_DIFFICULTY.to_string()),
        servings: None,
    }
}
