use regex::Regex;
use std::sync::LazyLock;

static FIRST_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Shown when no number can be found in the cooking time.
pub const UNSPECIFIED_TIME: &str = "Not specified";

/// Reduce a free-form cooking time to `"<n> minutes"`.
///
/// Only the first number survives, so `"20-30 minutes"` becomes
/// `"20 minutes"`.
pub fn format_cooking_time(time: &str) -> String {
    match FIRST_NUMBER.find(time) {
        Some(number) => format!("{} minutes", number.as_str()),
        None => UNSPECIFIED_TIME.to_string(),
    }
}
