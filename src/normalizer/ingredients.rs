use super::rules::{self, JsonSyntax};
use regex::Regex;
use std::sync::LazyLock;

// An ingredient line that turns into a method sentence is dropped whole.
static STEP_LEAD_IN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)^(?:step|then|next|after|while|when|until)\b.*$").unwrap()
});

static INGREDIENT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^ingredient\b\s*\d*\s*[:.)]?\s*").unwrap());

static QUANTITY_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+)\s*(cups?|tbsp|tsp|oz|lbs?|kg|g|ml|l)\b").unwrap()
});

/// Literal substrings that mark an item as metadata rather than food.
///
/// Deliberately blunt: "cornmeal" contains "meal" and is rejected with it.
pub const INGREDIENT_DENYLIST: [&str; 12] = [
    "cooking",
    "difficulty",
    "serves",
    "recipe",
    "title",
    "dish",
    "meal",
    "prep",
    "time",
    "easy",
    "medium",
    "hard",
];

/// Clean every ingredient line and drop the ones that are not ingredients.
///
/// Order is preserved. The result never contains empty strings.
pub fn format_ingredient_list<S: AsRef<str>>(ingredients: &[S]) -> Vec<String> {
    ingredients
        .iter()
        .map(|ingredient| format_ingredient(ingredient.as_ref()))
        .filter(|ingredient| keep_ingredient(ingredient))
        .collect()
}

fn format_ingredient(raw: &str) -> String {
    rules::settle(raw, |text| {
        let cleaned = rules::apply(text, JsonSyntax::Delete);
        let cleaned = STEP_LEAD_IN.replace(&cleaned, "");
        let cleaned = INGREDIENT_PREFIX.replace(&cleaned, "");
        let cleaned = rules::strip_leading_markers(&cleaned).to_lowercase();
        // list separators left over from the JSON array
        let cleaned = rules::replace_separators(&cleaned);
        let cleaned = QUANTITY_UNIT.replace_all(&cleaned, "$1 $2");
        rules::collapse_whitespace(&cleaned)
    })
}

fn keep_ingredient(ingredient: &str) -> bool {
    ingredient.chars().count() > 2
        && !rules::is_noise(ingredient)
        && !rules::contains_any(ingredient, &INGREDIENT_DENYLIST)
}
