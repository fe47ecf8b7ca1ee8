use super::rules::{self, JsonSyntax};
use regex::Regex;
use std::sync::LazyLock;

static STEP_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^step\s*\d+\s*[:.)\-]?\s*").unwrap());

/// Case-insensitive substrings that mark a step as metadata.
pub const INSTRUCTION_DENYLIST: [&str; 6] = [
    "cooking time",
    "difficulty",
    "serves",
    "prep time",
    "recipe",
    "title",
];

/// Clean every instruction and drop the ones that are not steps.
///
/// Each kept step ends in `.`, `!` or `?`. Numbering is left to whoever
/// renders the list.
pub fn format_instruction_list<S: AsRef<str>>(instructions: &[S]) -> Vec<String> {
    instructions
        .iter()
        .map(|instruction| format_instruction(instruction.as_ref()))
        .filter(|instruction| keep_instruction(instruction))
        .collect()
}

fn format_instruction(raw: &str) -> String {
    // "1. Step 2: Mix" needs more than one pass
    rules::settle(raw, |text| {
        let text = rules::apply(text, JsonSyntax::Space);
        let text = STEP_LABEL.replace(&text, "");
        let mut text = rules::strip_leading_markers(&text)
            .trim_end_matches(|c: char| matches!(c, ',' | ';' | ':') || c.is_whitespace())
            .to_string();

        if !text.is_empty() && !text.ends_with(|c: char| matches!(c, '.' | '!' | '?')) {
            text.push('.');
        }
        text
    })
}

fn keep_instruction(instruction: &str) -> bool {
    instruction.chars().count() > 5
        && !rules::is_noise(instruction)
        && !rules::contains_any(instruction, &INSTRUCTION_DENYLIST)
}
