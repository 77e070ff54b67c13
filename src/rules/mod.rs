//! Health rules over whole translation tables.
//!
//! Each rule reads a [`HealthRuleContext`] and returns new diagnostics; no rule mutates
//! the context or depends on another rule's output. Category and help text come from
//! the rule registry, rules only choose severity and message.
//!
//! ## Module Structure
//!
//! - `context`: HealthRuleContext (read-only snapshot)
//! - `placeholders`: placeholder token extraction
//! - `missing`: source keys absent from a target locale
//! - `undefined`: keys used in code but absent from the source locale
//! - `placeholder`: placeholder differences between source and target values
//! - `empty`: empty target values
//! - `untranslated`: target values identical to the source value
//! - `extra`: target keys absent from the source locale
//! - `orphan`: source keys never referenced from code

pub mod context;
pub mod empty;
pub mod extra;
pub mod missing;
pub mod orphan;
pub mod placeholder;
pub mod placeholders;
pub mod undefined;
pub mod untranslated;

use enum_dispatch::enum_dispatch;

use crate::diagnostics::{I18nDiagnostic, RuleId};

pub use context::HealthRuleContext;
pub use empty::EmptyTranslations;
pub use extra::ExtraKeys;
pub use missing::MissingTranslations;
pub use orphan::OrphanKeys;
pub use placeholder::PlaceholderMismatch;
pub use placeholders::extract_placeholders;
pub use undefined::UndefinedKeys;
pub use untranslated::UntranslatedValues;

#[enum_dispatch]
pub trait HealthRule {
    fn id(&self) -> RuleId;

    fn check(&self, ctx: &HealthRuleContext) -> Vec<I18nDiagnostic>;
}

#[enum_dispatch(HealthRule)]
#[derive(Debug, Clone, Copy)]
pub enum HealthRules {
    MissingTranslations(MissingTranslations),
    UndefinedKeys(UndefinedKeys),
    PlaceholderMismatch(PlaceholderMismatch),
    EmptyTranslations(EmptyTranslations),
    UntranslatedValues(UntranslatedValues),
    ExtraKeys(ExtraKeys),
    OrphanKeys(OrphanKeys),
}

/// Rules in report order: coverage, quality, structure, performance.
pub const PIPELINE: [HealthRules; 7] = [
    HealthRules::MissingTranslations(MissingTranslations),
    HealthRules::UndefinedKeys(UndefinedKeys),
    HealthRules::PlaceholderMismatch(PlaceholderMismatch),
    HealthRules::EmptyTranslations(EmptyTranslations),
    HealthRules::UntranslatedValues(UntranslatedValues),
    HealthRules::ExtraKeys(ExtraKeys),
    HealthRules::OrphanKeys(OrphanKeys),
];

pub fn run_health_rules(ctx: &HealthRuleContext) -> Vec<I18nDiagnostic> {
    let mut diagnostics = Vec::new();
    for rule in PIPELINE {
        let found = rule.check(ctx);
        tracing::debug!(rule = %rule.id(), count = found.len(), "health rule finished");
        diagnostics.extend(found);
    }
    diagnostics
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::parsers::json::{LocaleTable, LocaleTables};

    pub fn table(entries: &[(&str, &str)]) -> LocaleTable {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    pub fn tables(locales: &[(&str, LocaleTable)]) -> LocaleTables {
        locales
            .iter()
            .map(|(locale, table)| (locale.to_string(), table.clone()))
            .collect()
    }
}
