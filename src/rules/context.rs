use std::{
    collections::{HashMap, HashSet},
    path::PathBuf,
};

use crate::{
    config::Config,
    core::parsers::json::{LocaleTable, LocaleTables},
};

/// Read-only snapshot every health rule runs against.
#[derive(Debug, Clone, Default)]
pub struct HealthRuleContext {
    pub source_locale: String,
    /// Sorted; never contains the source locale.
    pub target_locales: Vec<String>,
    pub translations: LocaleTables,
    /// Display path per locale for diagnostics.
    pub locale_paths: HashMap<String, String>,
    /// Every key observed in code, including keys matched by dynamic patterns.
    pub code_keys: HashSet<String>,
    /// Subset of `code_keys` whose namespace was resolved with certainty.
    pub verified_keys: HashSet<String>,
    pub project_root: PathBuf,
    pub config: Option<Config>,
}

impl HealthRuleContext {
    /// Targets default to every loaded locale other than `source_locale`.
    pub fn new(source_locale: impl Into<String>, translations: LocaleTables) -> Self {
        let source_locale = source_locale.into();
        let mut target_locales: Vec<String> = translations
            .keys()
            .filter(|locale| **locale != source_locale)
            .cloned()
            .collect();
        target_locales.sort();
        Self {
            source_locale,
            target_locales,
            translations,
            ..Default::default()
        }
    }

    pub fn with_target_locales(mut self, mut locales: Vec<String>) -> Self {
        locales.retain(|l| *l != self.source_locale);
        locales.sort();
        locales.dedup();
        self.target_locales = locales;
        self
    }

    pub fn with_code_keys(mut self, code_keys: HashSet<String>) -> Self {
        self.code_keys = code_keys;
        self
    }

    pub fn with_verified_keys(mut self, verified_keys: HashSet<String>) -> Self {
        self.verified_keys = verified_keys;
        self
    }

    pub fn with_locale_paths(mut self, locale_paths: HashMap<String, String>) -> Self {
        self.locale_paths = locale_paths;
        self
    }

    pub fn with_project_root(mut self, project_root: impl Into<PathBuf>) -> Self {
        self.project_root = project_root.into();
        self
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    pub fn source_table(&self) -> Option<&LocaleTable> {
        self.translations.get(&self.source_locale)
    }

    /// Target locales that have a loaded table, in sorted order.
    pub fn target_tables(&self) -> impl Iterator<Item = (&str, &LocaleTable)> {
        self.target_locales.iter().filter_map(|locale| {
            self.translations
                .get(locale)
                .map(|table| (locale.as_str(), table))
        })
    }

    pub fn locale_path(&self, locale: &str) -> String {
        self.locale_paths
            .get(locale)
            .cloned()
            .unwrap_or_else(|| format!("{}.json", locale))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> LocaleTable {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_targets_exclude_source() {
        let translations = LocaleTables::from([
            ("en".to_string(), table(&[("a", "A")])),
            ("fr".to_string(), table(&[])),
            ("de".to_string(), table(&[])),
        ]);
        let ctx = HealthRuleContext::new("en", translations);
        assert_eq!(ctx.target_locales, vec!["de", "fr"]);
        assert!(ctx.source_table().is_some());
    }

    #[test]
    fn test_target_tables_skip_unloaded_locales() {
        let translations = LocaleTables::from([
            ("en".to_string(), table(&[("a", "A")])),
            ("de".to_string(), table(&[])),
        ]);
        let ctx = HealthRuleContext::new("en", translations)
            .with_target_locales(vec!["ja".to_string(), "de".to_string(), "en".to_string()]);
        assert_eq!(ctx.target_locales, vec!["de", "ja"]);
        let loaded: Vec<&str> = ctx.target_tables().map(|(l, _)| l).collect();
        assert_eq!(loaded, vec!["de"]);
    }

    #[test]
    fn test_locale_path_fallback() {
        let ctx = HealthRuleContext::new("en", LocaleTables::new()).with_locale_paths(
            HashMap::from([("en".to_string(), "messages/en".to_string())]),
        );
        assert_eq!(ctx.locale_path("en"), "messages/en");
        assert_eq!(ctx.locale_path("de"), "de.json");
    }
}
