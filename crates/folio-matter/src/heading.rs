//! Top-level heading detection.

use std::sync::LazyLock;

use regex::Regex;

static TOP_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^#[ \t]+(.*\S)[ \t\r]*$").expect("Invalid top-level heading regex")
});

/// Text of the first `# Heading` line in `body`, if any.
///
/// Only level-one ATX headings count; `## Sub` lines are skipped.
pub fn first_heading(body: &str) -> Option<&str> {
    TOP_HEADING_RE
        .captures(body)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Normalize text for heading/title comparison.
///
/// Lower-cases, drops everything that is not a letter, digit or whitespace,
/// and trims the ends.
pub fn normalize_heading(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Whether `heading` repeats `title` once both are normalized.
///
/// A heading with nothing left after normalization never matches.
pub fn duplicates_title(heading: &str, title: &str) -> bool {
    let heading = normalize_heading(heading);
    !heading.is_empty() && heading == normalize_heading(title)
}
