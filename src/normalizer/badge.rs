use super::rules::{self, JsonSyntax};
use regex::Regex;
use std::sync::LazyLock;

static BADGE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:difficulty|servings?|serves|level)\s*[:=]?\s*").unwrap());

/// Short free text shown next to the title, such as difficulty or servings.
///
/// Returns `None` when nothing readable is left.
pub fn format_badge_text(text: &str) -> Option<String> {
    let cleaned = rules::remove_json_syntax(text, JsonSyntax::Delete);
    let cleaned = rules::collapse_whitespace(&cleaned);
    let cleaned = BADGE_LABEL.replace(&cleaned, "");
    let cleaned = rules::replace_separators(&cleaned);
    let cleaned = rules::collapse_whitespace(&cleaned);

    if rules::is_noise(&cleaned) {
        return None;
    }

    let mut chars = cleaned.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
}
