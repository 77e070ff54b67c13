//! Orphan key detection.
//!
//! A source key is orphaned when code never references it, directly or through a
//! dynamic pattern that matched it. An empty code key set means no usage information
//! exists, and every key would be reported, so nothing is reported at all.

use std::collections::HashSet;

use crate::{
    core::parsers::json::LocaleTable,
    diagnostics::{I18nDiagnostic, RuleId, Severity},
    rules::{HealthRule, HealthRuleContext},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct OrphanKeys;

impl HealthRule for OrphanKeys {
    fn id(&self) -> RuleId {
        RuleId::OrphanKey
    }

    fn check(&self, ctx: &HealthRuleContext) -> Vec<I18nDiagnostic> {
        let Some(source) = ctx.source_table() else {
            return Vec::new();
        };
        check_orphan_keys(
            source,
            &ctx.code_keys,
            &ctx.source_locale,
            &ctx.locale_path(&ctx.source_locale),
        )
    }
}

pub fn check_orphan_keys(
    source: &LocaleTable,
    code_keys: &HashSet<String>,
    source_locale: &str,
    source_path: &str,
) -> Vec<I18nDiagnostic> {
    if code_keys.is_empty() {
        return Vec::new();
    }
    source
        .keys()
        .filter(|key| !code_keys.contains(*key))
        .map(|key| {
            I18nDiagnostic::new(
                RuleId::OrphanKey,
                Severity::Warning,
                format!("\"{}\" is never used in code", key),
            )
            .at(source_path, 0, 0)
            .with_key(key)
            .with_language(source_locale)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Category;
    use crate::rules::test_support::table;

    fn keys(list: &[&str]) -> HashSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unused_keys() {
        let source = table(&[("a.b", "Hello"), ("a.c", "Bye")]);
        let diags = check_orphan_keys(&source, &keys(&["a.b"]), "en", "messages/en.json");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].key.as_deref(), Some("a.c"));
        assert_eq!(diags[0].category, Category::Performance);
        assert_eq!(diags[0].severity, Severity::Warning);
    }

    #[test]
    fn test_empty_code_keys_suppress_everything() {
        let source = table(&[("a.b", "Hello")]);
        assert!(check_orphan_keys(&source, &HashSet::new(), "en", "en.json").is_empty());
    }
}
