// src/checker/html.rs
// =============================================================================
// This module extracts links from HTML text.
//
// Extraction is pattern-based, not a real HTML parse: we look for
//
//     href = "<value>"
//
// (at most one whitespace character on each side of '=', double quotes only)
// and collect <value>. Single-quoted or unquoted attributes and HTML entities
// are left alone. That keeps the extractor tiny and predictable, and it also
// means it never fails: text with no matches simply yields no links.
//
// Rust concepts:
// - LazyLock: compile the regex once, on first use
// - HashSet::insert returns false for duplicates, handy for "seen" tracking
// =============================================================================

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// The capture group is the attribute value
static HREF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"href\s?=\s?"([^"]+)""#).expect("href pattern is a valid regex")
});

// Extracts all href values from HTML text
//
// Duplicates are dropped, keeping the position of their first occurrence.
//
// Example:
//   html = r#"<a href="https://x.com/a">1</a><a href="https://x.com/a">2</a>"#
//   result = ["https://x.com/a"]
pub fn extract_html_links(html: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    HREF_PATTERN
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|link| seen.insert(*link))
        .map(str::to_string)
        .collect()
}
