//! Untranslated value detection.
//!
//! A target value identical to the source value usually means the text was copied
//! but never translated. Values without letters (`"42"`, `"--"`) are skipped.

use crate::{
    diagnostics::{I18nDiagnostic, RuleId, Severity},
    rules::{HealthRule, HealthRuleContext},
    utils::contains_alphabetic,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct UntranslatedValues;

impl HealthRule for UntranslatedValues {
    fn id(&self) -> RuleId {
        RuleId::UntranslatedValue
    }

    fn check(&self, ctx: &HealthRuleContext) -> Vec<I18nDiagnostic> {
        let Some(source) = ctx.source_table() else {
            return Vec::new();
        };
        let mut diagnostics = Vec::new();
        for (locale, target) in ctx.target_tables() {
            let path = ctx.locale_path(locale);
            for (key, source_value) in source {
                if !contains_alphabetic(source_value) {
                    continue;
                }
                if target.get(key) == Some(source_value) {
                    diagnostics.push(
                        I18nDiagnostic::new(
                            RuleId::UntranslatedValue,
                            Severity::Info,
                            format!(
                                "\"{}\" in \"{}\" is identical to \"{}\": \"{}\"",
                                key, locale, ctx.source_locale, source_value
                            ),
                        )
                        .at(&path, 0, 0)
                        .with_key(key)
                        .with_language(locale),
                    );
                }
            }
        }
        diagnostics
    }
}
