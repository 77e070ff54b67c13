//! Suggested translation keys for hardcoded text.
//!
//! `src/app/(auth)/login/[step]/page.tsx` + `"Forgot your password?"` becomes
//! `login.forgotYourPassword`.

use std::path::{Component, Path};

use crate::utils::{camel_case_words, split_words, to_camel_case};

/// Directory names that carry no meaning for key grouping.
const GENERIC_SEGMENTS: &[&str] = &["src", "app", "components", "pages", "lib", "ui"];

/// Words taken from the text for the key slug.
const MAX_SLUG_WORDS: usize = 4;

fn is_generic_segment(segment: &str) -> bool {
    GENERIC_SEGMENTS.contains(&segment)
        || (segment.starts_with('(') && segment.ends_with(')'))
        || (segment.starts_with('[') && segment.ends_with(']'))
}

/// Dotted key prefix derived from the file's directories.
pub fn path_prefix(file_path: &str) -> String {
    let Some(parent) = Path::new(file_path).parent() else {
        return String::new();
    };
    parent
        .components()
        .filter_map(|c| match c {
            Component::Normal(os) => os.to_str(),
            _ => None,
        })
        .filter(|segment| !is_generic_segment(segment))
        .map(to_camel_case)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

/// Key for `text` under `prefix`, or `None` when the text has no usable words.
pub fn suggest_key(prefix: &str, text: &str) -> Option<String> {
    let slug = camel_case_words(split_words(text).take(MAX_SLUG_WORDS));
    if slug.is_empty() {
        return None;
    }
    if prefix.is_empty() {
        Some(slug)
    } else {
        Some(format!("{}.{}", prefix, slug))
    }
}
