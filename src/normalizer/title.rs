use super::rules::{self, JsonSyntax};

/// Title used when the source gave none, or nothing survived cleaning.
pub const FALLBACK_TITLE: &str = "Delicious Recipe";

// Kept lowercase unless they open the title.
const MINOR_WORDS: [&str; 12] = [
    "with", "and", "or", "of", "in", "on", "at", "to", "for", "a", "an", "the",
];

/// Clean a recipe title and put it in title case.
///
/// ```
/// use cookpal::format_title;
///
/// assert_eq!(format_title("title: chicken AND rice bowl"), "Chicken and Rice Bowl");
/// assert_eq!(format_title(""), "Delicious Recipe");
/// ```
pub fn format_title(title: &str) -> String {
    let cleaned = rules::apply(title, JsonSyntax::Delete);

    if cleaned.is_empty() {
        return FALLBACK_TITLE.to_string();
    }

    title_case(&cleaned)
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .enumerate()
        .map(|(index, word)| {
            let lower = word.to_lowercase();
            if index > 0 && MINOR_WORDS.contains(&lower.as_str()) {
                lower
            } else {
                capitalize(&lower)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Upper-case the first alphanumeric character; digits pass through.
fn capitalize(word: &str) -> String {
    match word.char_indices().find(|(_, c)| c.is_alphanumeric()) {
        Some((index, first)) => {
            let mut out = String::with_capacity(word.len());
            out.push_str(&word[..index]);
            out.extend(first.to_uppercase());
            out.push_str(&word[index + first.len_utf8()..]);
            out
        }
        None => word.to_string(),
    }
}
