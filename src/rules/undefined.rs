//! Keys referenced in code that the source locale does not define.

use crate::{
    diagnostics::{I18nDiagnostic, RuleId, Severity},
    rules::{HealthRule, HealthRuleContext},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct UndefinedKeys;

impl HealthRule for UndefinedKeys {
    fn id(&self) -> RuleId {
        RuleId::UndefinedKey
    }

    /// Only keys with a verified namespace are checked, and nothing is reported when the
    /// source table is empty or was not loaded.
    fn check(&self, ctx: &HealthRuleContext) -> Vec<I18nDiagnostic> {
        let Some(source) = ctx.source_table().filter(|t| !t.is_empty()) else {
            return Vec::new();
        };
        let path = ctx.locale_path(&ctx.source_locale);

        let mut undefined: Vec<&String> = ctx
            .verified_keys
            .iter()
            .filter(|key| !source.contains_key(*key))
            .collect();
        undefined.sort();

        undefined
            .into_iter()
            .map(|key| {
                I18nDiagnostic::new(
                    RuleId::UndefinedKey,
                    Severity::Error,
                    format!(
                        "\"{}\" is used in code but missing from \"{}\"",
                        key, ctx.source_locale
                    ),
                )
                .at(&path, 0, 0)
                .with_key(key)
                .with_language(&ctx.source_locale)
            })
            .collect()
    }
}
