//! Keys present in a target locale but not in the source locale.

use crate::{
    diagnostics::{I18nDiagnostic, RuleId, Severity},
    rules::{HealthRule, HealthRuleContext},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ExtraKeys;

impl HealthRule for ExtraKeys {
    fn id(&self) -> RuleId {
        RuleId::ExtraKey
    }

    fn check(&self, ctx: &HealthRuleContext) -> Vec<I18nDiagnostic> {
        let Some(source) = ctx.source_table() else {
            return Vec::new();
        };
        ctx.target_tables()
            .flat_map(|(locale, target)| {
                let path = ctx.locale_path(locale);
                target
                    .keys()
                    .filter(|key| !source.contains_key(*key))
                    .map(move |key| {
                        I18nDiagnostic::new(
                            RuleId::ExtraKey,
                            Severity::Warning,
                            format!(
                                "\"{}\" exists in \"{}\" but not in \"{}\"",
                                key, locale, ctx.source_locale
                            ),
                        )
                        .at(&path, 0, 0)
                        .with_key(key)
                        .with_language(locale)
                    })
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}
