//! Empty translation detection.

use crate::{
    diagnostics::{I18nDiagnostic, RuleId, Severity},
    rules::{HealthRule, HealthRuleContext},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyTranslations;

impl HealthRule for EmptyTranslations {
    fn id(&self) -> RuleId {
        RuleId::EmptyTranslation
    }

    fn check(&self, ctx: &HealthRuleContext) -> Vec<I18nDiagnostic> {
        let Some(source) = ctx.source_table() else {
            return Vec::new();
        };
        let mut diagnostics = Vec::new();
        for (locale, target) in ctx.target_tables() {
            let path = ctx.locale_path(locale);
            for (key, value) in target {
                let source_has_text = source
                    .get(key)
                    .is_some_and(|v| !v.trim().is_empty());
                if value.trim().is_empty() && source_has_text {
                    diagnostics.push(
                        I18nDiagnostic::new(
                            RuleId::EmptyTranslation,
                            Severity::Warning,
                            format!("\"{}\" is empty in \"{}\"", key, locale),
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
