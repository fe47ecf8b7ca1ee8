//! Rewrites shared by every field normalizer.
//!
//! Each rule removes something that is an artifact of the upstream JSON or
//! LLM response rather than recipe content. Metadata keywords cut the string
//! from the keyword to its end, not just the keyword itself.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static METADATA_TAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\b(?:cooking\s*time|prep\s*time|difficulty|serv(?:es|ings?))\b.*$").unwrap()
});

static FIELD_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)^[\s\[\]{}"'\\]*(?:title|name|recipe|ingredient|instruction|step|dish|meal|food)[\s"']*\d*[\s"']*[:.=)]\s*"#,
    )
    .unwrap()
});

static JSON_SYNTAX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"[\[\]{}"'\\]"#).unwrap());

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static ORDINAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+[.)]").unwrap());

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,;:]").unwrap());

/// What to do with JSON syntax characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum JsonSyntax {
    Delete,
    /// Replace with a space so neighbouring words do not fuse.
    Space,
}

pub(crate) fn strip_metadata(text: &str) -> Cow<'_, str> {
    METADATA_TAIL.replace(text, "")
}

pub(crate) fn strip_field_label(text: &str) -> Cow<'_, str> {
    FIELD_LABEL.replace(text, "")
}

pub(crate) fn remove_json_syntax(text: &str, mode: JsonSyntax) -> Cow<'_, str> {
    match mode {
        JsonSyntax::Delete => JSON_SYNTAX.replace_all(text, ""),
        JsonSyntax::Space => JSON_SYNTAX.replace_all(text, " "),
    }
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Turn `,`, `;` and `:` into spaces.
pub(crate) fn replace_separators(text: &str) -> Cow<'_, str> {
    SEPARATORS.replace_all(text, " ")
}

/// Run `pass` until the text stops changing.
pub(crate) fn settle(text: &str, pass: impl Fn(&str) -> String) -> String {
    let mut current = pass(text);
    loop {
        let next = pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// The full shared rule set.
///
/// Markers and labels can hide each other (`**Recipe:** Soup`,
/// `1. Title: Soup`), so the rules repeat until nothing changes.
pub(crate) fn apply(text: &str, mode: JsonSyntax) -> String {
    settle(text, |text| {
        let text = strip_metadata(text);
        let text = strip_leading_markers(&text);
        let text = strip_field_label(text);
        let text = remove_json_syntax(&text, mode);
        collapse_whitespace(&text)
    })
}

/// Strip leading ordinals (`1.`, `2)`) and bullets (`-`, `*`, `•`).
///
/// A number followed by a decimal digit (`1.5 cups`) is a quantity, not an
/// ordinal, and is left alone.
pub(crate) fn strip_leading_markers(text: &str) -> &str {
    let mut rest = text.trim_start();
    loop {
        let next = if let Some(m) = ORDINAL.find(rest) {
            let tail = &rest[m.end()..];
            if tail.starts_with(|c: char| c.is_ascii_digit()) {
                break;
            }
            tail
        } else if let Some(tail) = rest.strip_prefix(|c: char| matches!(c, '-' | '*' | '•')) {
            tail
        } else {
            break;
        };
        rest = next.trim_start();
    }
    rest
}

/// True when the text has no word characters at all.
pub(crate) fn is_noise(text: &str) -> bool {
    !text.chars().any(|c| c.is_alphanumeric() || c == '_')
}

/// Literal, case-insensitive substring check against a denylist.
pub(crate) fn contains_any(text: &str, denylist: &[&str]) -> bool {
    let lower = text.to_lowercase();
    denylist.iter().any(|word| lower.contains(word))
}
