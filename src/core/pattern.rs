//! Dynamic key pattern matching.
//!
//! A dynamic key such as `` t(`plans.${planKey}.name`) `` is recorded as the pattern
//! `plans.${planKey}.name`. Each `${...}` placeholder matches one or more characters
//! (non-greedy), everything else matches literally.
//!
//! Patterns are reconciled against the known key set: keys matched by a precise pattern
//! count as used, while patterns that match too many keys are reported as ambiguous and
//! do not mark anything as used.

use std::{
    collections::{BTreeMap, BTreeSet},
    ops::Bound,
    sync::LazyLock,
};

use regex::Regex;

use crate::core::DynamicPattern;

/// Group name for patterns that start with a placeholder.
pub const NO_PREFIX_GROUP: &str = "(no-prefix)";

/// Prefix-less patterns are ambiguous above this many matches.
pub const NO_PREFIX_AMBIGUITY_LIMIT: usize = 10;

/// Default limit for patterns with a static prefix.
pub const DEFAULT_AMBIGUITY_THRESHOLD: usize = 50;

const SENTINEL: &str = "\u{0}DYNAMIC\u{0}";

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{[^}]*\}").unwrap());

/// Regex source for a pattern: placeholders become `.+?`, the rest is escaped.
///
/// ```
/// use intlcheck::core::pattern::pattern_to_regex_source;
///
/// assert_eq!(pattern_to_regex_source("plans.${planKey}.name"), r"^plans\..+?\.name$");
/// ```
pub fn pattern_to_regex_source(pattern: &str) -> String {
    let with_sentinels = PLACEHOLDER_REGEX.replace_all(pattern, SENTINEL);
    let escaped = regex::escape(&with_sentinels);
    format!("^{}$", escaped.replace(SENTINEL, ".+?"))
}

pub fn pattern_to_regex(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&pattern_to_regex_source(pattern))
}

/// Literal text before the first placeholder, without a trailing `.`.
pub fn static_prefix(pattern: &str) -> Option<&str> {
    let end = pattern.find("${").unwrap_or(pattern.len());
    let prefix = pattern[..end].trim_end_matches('.');
    (!prefix.is_empty()).then_some(prefix)
}

/// Literal text after the last placeholder, without a leading `.`.
pub fn static_suffix(pattern: &str) -> Option<&str> {
    if !pattern.contains("${") {
        return None;
    }
    let start = pattern.rfind('}')? + 1;
    let suffix = pattern[start..].trim_start_matches('.');
    (!suffix.is_empty()).then_some(suffix)
}

/// Group patterns by static prefix; prefix-less patterns go to [`NO_PREFIX_GROUP`].
pub fn group_by_prefix(patterns: &[DynamicPattern]) -> BTreeMap<String, Vec<&DynamicPattern>> {
    let mut groups: BTreeMap<String, Vec<&DynamicPattern>> = BTreeMap::new();
    for pattern in patterns {
        let group = static_prefix(&pattern.pattern).unwrap_or(NO_PREFIX_GROUP);
        groups.entry(group.to_string()).or_default().push(pattern);
    }
    groups
}

/// Keys starting with `prefix`, using the sorted order of the set.
fn keys_with_prefix<'k>(
    keys: &'k BTreeSet<String>,
    prefix: &'k str,
) -> impl Iterator<Item = &'k String> {
    keys.range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
        .take_while(move |key| key.starts_with(prefix))
}

/// Outcome of matching one pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    pub matched: Vec<String>,
    pub ambiguous: bool,
}

/// True when `match_count` is too broad to attribute usage.
pub fn is_ambiguous(has_prefix: bool, match_count: usize, threshold: usize) -> bool {
    if has_prefix {
        match_count > threshold
    } else {
        match_count > NO_PREFIX_AMBIGUITY_LIMIT
    }
}

/// Match one pattern against `keys`.
pub fn match_keys(pattern: &str, keys: &BTreeSet<String>, threshold: usize) -> PatternMatch {
    let Ok(regex) = pattern_to_regex(pattern) else {
        return PatternMatch {
            matched: Vec::new(),
            ambiguous: false,
        };
    };
    let prefix = static_prefix(pattern);
    let matched: Vec<String> = match prefix {
        Some(prefix) => keys_with_prefix(keys, prefix)
            .filter(|key| regex.is_match(key))
            .cloned()
            .collect(),
        None => keys.iter().filter(|key| regex.is_match(key)).cloned().collect(),
    };
    let ambiguous = is_ambiguous(prefix.is_some(), matched.len(), threshold);
    PatternMatch { matched, ambiguous }
}

#[derive(Debug, Clone)]
pub struct AmbiguousPattern {
    pub pattern: DynamicPattern,
    pub match_count: usize,
}

/// Result of reconciling all dynamic patterns of a run.
#[derive(Debug, Clone, Default)]
pub struct Reconciliation {
    /// Keys matched by non-ambiguous patterns.
    pub matched_keys: BTreeSet<String>,
    pub ambiguous: Vec<AmbiguousPattern>,
    pub unmatched: Vec<DynamicPattern>,
}

/// Reconcile patterns against the known key set.
pub fn reconcile(
    patterns: &[DynamicPattern],
    keys: &BTreeSet<String>,
    threshold: usize,
) -> Reconciliation {
    let mut result = Reconciliation::default();

    for (group, members) in group_by_prefix(patterns) {
        // Narrow once per group; every member shares the prefix.
        let candidates: BTreeSet<String> = if group == NO_PREFIX_GROUP {
            keys.clone()
        } else {
            keys_with_prefix(keys, &group).cloned().collect()
        };

        for pattern in members {
            let outcome = match_keys(&pattern.pattern, &candidates, threshold);
            if outcome.matched.is_empty() {
                result.unmatched.push(pattern.clone());
            } else if outcome.ambiguous {
                result.ambiguous.push(AmbiguousPattern {
                    pattern: pattern.clone(),
                    match_count: outcome.matched.len(),
                });
            } else {
                result.matched_keys.extend(outcome.matched);
            }
        }
    }

    tracing::debug!(
        matched = result.matched_keys.len(),
        ambiguous = result.ambiguous.len(),
        unmatched = result.unmatched.len(),
        "reconciled dynamic key patterns"
    );
    result
}
