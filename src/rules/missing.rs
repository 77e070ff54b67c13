//! Missing translation detection.
//!
//! Every source-locale key must exist in every target locale. Targets without a loaded
//! table are skipped: no data means no findings.

use crate::{
    core::parsers::json::LocaleTable,
    diagnostics::{I18nDiagnostic, RuleId, Severity},
    rules::{HealthRule, HealthRuleContext},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct MissingTranslations;

impl HealthRule for MissingTranslations {
    fn id(&self) -> RuleId {
        RuleId::MissingTranslation
    }

    fn check(&self, ctx: &HealthRuleContext) -> Vec<I18nDiagnostic> {
        let Some(source) = ctx.source_table() else {
            return Vec::new();
        };
        ctx.target_tables()
            .flat_map(|(locale, target)| {
                check_missing_translations(source, locale, target, &ctx.locale_path(locale))
            })
            .collect()
    }
}

/// Keys of `source` absent from `target`, in key order.
pub fn check_missing_translations(
    source: &LocaleTable,
    locale: &str,
    target: &LocaleTable,
    target_path: &str,
) -> Vec<I18nDiagnostic> {
    source
        .keys()
        .filter(|key| !target.contains_key(*key))
        .map(|key| {
            I18nDiagnostic::new(
                RuleId::MissingTranslation,
                Severity::Error,
                format!("\"{}\" has no \"{}\" translation", key, locale),
            )
            .at(target_path, 0, 0)
            .with_key(key)
            .with_language(locale)
        })
        .collect()
}
