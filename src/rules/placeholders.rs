//! Placeholder extraction from translation values.
//!
//! Grammars are tried in priority order. A match reserves its byte span, and a
//! lower-priority grammar cannot match inside a reserved span, so `{{name}}` is never
//! also counted as `{name}`.

use std::sync::LazyLock;

use regex::Regex;

static DOUBLE_BRACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*[A-Za-z_][\w.]*\s*\}\}").unwrap());
static TEMPLATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{\s*[A-Za-z_][\w.]*\s*\}").unwrap());
static SINGLE_BRACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\s*[A-Za-z_][\w.]*\s*\}").unwrap());
static NUMERIC_INDEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\d+\}").unwrap());
static PRINTF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%(?:\d+\$)?[sdifu@]").unwrap());

fn grammars() -> [&'static Regex; 5] {
    [
        &*DOUBLE_BRACE,
        &*TEMPLATE,
        &*SINGLE_BRACE,
        &*NUMERIC_INDEX,
        &*PRINTF,
    ]
}

/// Placeholder tokens in order of first appearance, without duplicates.
///
/// Whitespace inside braces is dropped, so `{{ name }}` and `{{name}}` compare equal.
pub fn extract_placeholders(text: &str) -> Vec<String> {
    let mut reserved: Vec<(usize, usize)> = Vec::new();
    let mut found: Vec<(usize, String)> = Vec::new();

    for grammar in grammars() {
        for m in grammar.find_iter(text) {
            let overlaps = reserved
                .iter()
                .any(|(start, end)| m.start() < *end && *start < m.end());
            if overlaps {
                continue;
            }
            reserved.push((m.start(), m.end()));
            let token: String = m.as_str().chars().filter(|c| !c.is_whitespace()).collect();
            found.push((m.start(), token));
        }
    }

    found.sort_by_key(|(start, _)| *start);
    let mut tokens: Vec<String> = Vec::with_capacity(found.len());
    for (_, token) in found {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}
