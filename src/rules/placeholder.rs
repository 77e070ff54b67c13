//! Placeholder mismatch detection.
//!
//! A source placeholder missing from the translation is an error (the value would be
//! lost at runtime); a placeholder only the translation has is a warning.

use crate::{
    diagnostics::{I18nDiagnostic, RuleId, Severity},
    rules::{HealthRule, HealthRuleContext, extract_placeholders},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderMismatch;

impl HealthRule for PlaceholderMismatch {
    fn id(&self) -> RuleId {
        RuleId::PlaceholderMismatch
    }

    fn check(&self, ctx: &HealthRuleContext) -> Vec<I18nDiagnostic> {
        let Some(source) = ctx.source_table() else {
            return Vec::new();
        };
        let mut diagnostics = Vec::new();

        for (locale, target) in ctx.target_tables() {
            let path = ctx.locale_path(locale);
            for (key, source_value) in source {
                let Some(target_value) = target.get(key) else {
                    continue;
                };
                let expected = extract_placeholders(source_value);
                let actual = extract_placeholders(target_value);
                if expected.is_empty() && actual.is_empty() {
                    continue;
                }

                let missing: Vec<&String> =
                    expected.iter().filter(|p| !actual.contains(*p)).collect();
                let extra: Vec<&String> =
                    actual.iter().filter(|p| !expected.contains(*p)).collect();

                if !missing.is_empty() {
                    diagnostics.push(
                        I18nDiagnostic::new(
                            RuleId::PlaceholderMismatch,
                            Severity::Error,
                            format!(
                                "\"{}\" in \"{}\" is missing placeholder {}",
                                key,
                                locale,
                                join(&missing)
                            ),
                        )
                        .at(&path, 0, 0)
                        .with_key(key)
                        .with_language(locale),
                    );
                }
                if !extra.is_empty() {
                    diagnostics.push(
                        I18nDiagnostic::new(
                            RuleId::PlaceholderMismatch,
                            Severity::Warning,
                            format!(
                                "\"{}\" in \"{}\" has unexpected placeholder {}",
                                key,
                                locale,
                                join(&extra)
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

fn join(tokens: &[&String]) -> String {
    tokens
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::{table, tables};

    fn run(source: &str, target: &str) -> Vec<I18nDiagnostic> {
        let ctx = HealthRuleContext::new(
            "en",
            tables(&[
                ("en", table(&[("greeting", source)])),
                ("de", table(&[("greeting", target)])),
            ]),
        );
        PlaceholderMismatch.check(&ctx)
    }

    #[test]
    fn test_matching_placeholders() {
        assert!(run("Hello {name}", "Hallo {name}").is_empty());
        assert!(run("{count} of {total}", "{total} / {count}").is_empty());
    }

    #[test]
    fn test_missing_placeholder_is_error() {
        let diags = run("Hello {{name}}, you have {count} items", "Hallo {{name}}");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Error);
        assert!(diags[0].message.contains("{count}"));
        assert_eq!(diags[0].language.as_deref(), Some("de"));
    }

    #[test]
    fn test_extra_placeholder_is_warning() {
        let diags = run("Saved", "Gespeichert {name}");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
    }

    #[test]
    fn test_both_directions() {
        let diags = run("Hi %s", "Hallo {name}");
        let severities: Vec<Severity> = diags.iter().map(|d| d.severity).collect();
        assert_eq!(severities, vec![Severity::Error, Severity::Warning]);
    }

    #[test]
    fn test_plain_values_skipped() {
        assert!(run("Save", "Speichern").is_empty());
    }
}
