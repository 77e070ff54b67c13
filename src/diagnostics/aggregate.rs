//! Conversion of code-level issues and pattern outcomes into diagnostics.

use std::collections::BTreeMap;

use crate::{
    config::SeverityOverride,
    core::pattern::Reconciliation,
    issues::{Issue, IssueKind},
};

use super::{I18nDiagnostic, RuleId, Severity};

impl From<IssueKind> for RuleId {
    fn from(kind: IssueKind) -> Self {
        match kind {
            IssueKind::MarkupText => RuleId::HardcodedText,
            IssueKind::MarkupAttribute => RuleId::HardcodedAttribute,
            IssueKind::LocaleTernary => RuleId::LocaleTernary,
            IssueKind::NotificationMessage => RuleId::HardcodedNotification,
            IssueKind::StringVariable => RuleId::HardcodedVariable,
            IssueKind::TranslationKey => RuleId::TranslationKey,
        }
    }
}

impl From<&Issue> for I18nDiagnostic {
    fn from(issue: &Issue) -> Self {
        let mut diag = I18nDiagnostic::new(issue.kind.into(), issue.severity, &issue.message)
            .at(issue.file_path(), issue.line(), issue.col())
            .with_namespace(issue.namespace.clone());

        if !issue.context.source_line.is_empty() {
            diag = diag.with_source_line(&issue.context.source_line);
        }

        // Hardcoded findings carry the suggested key so reports can propose it.
        let key = issue
            .resolved_key
            .as_ref()
            .or(issue.pattern.as_ref())
            .or(issue.suggested_key.as_ref());
        if let Some(key) = key {
            diag = diag.with_key(key);
        }
        diag
    }
}

/// Diagnostics for ambiguous and unmatched dynamic key patterns.
pub fn pattern_diagnostics(reconciliation: &Reconciliation, threshold: usize) -> Vec<I18nDiagnostic> {
    let ambiguous = reconciliation.ambiguous.iter().map(|entry| {
        let pattern = &entry.pattern;
        I18nDiagnostic::new(
            RuleId::DynamicKeyAmbiguous,
            Severity::Warning,
            format!(
                "Dynamic key \"{}\" matches {} keys (limit {}); none are counted as used",
                pattern.pattern, entry.match_count, threshold
            ),
        )
        .at(
            &pattern.location.file_path,
            pattern.location.line,
            pattern.location.col,
        )
        .with_key(&pattern.pattern)
        .with_namespace(pattern.namespace.clone())
    });

    let unmatched = reconciliation.unmatched.iter().map(|pattern| {
        I18nDiagnostic::new(
            RuleId::DynamicKeyUnmatched,
            Severity::Warning,
            format!("Dynamic key \"{}\" matches no known key", pattern.pattern),
        )
        .at(
            &pattern.location.file_path,
            pattern.location.line,
            pattern.location.col,
        )
        .with_key(&pattern.pattern)
        .with_namespace(pattern.namespace.clone())
    });

    ambiguous.chain(unmatched).collect()
}

/// Apply configured severities by rule id; `off` drops the diagnostic.
pub fn apply_severity_overrides(
    diagnostics: Vec<I18nDiagnostic>,
    overrides: &BTreeMap<RuleId, SeverityOverride>,
) -> Vec<I18nDiagnostic> {
    if overrides.is_empty() {
        return diagnostics;
    }
    diagnostics
        .into_iter()
        .filter_map(|mut diag| {
            match overrides.get(&diag.rule) {
                None => {}
                Some(SeverityOverride::Off) => return None,
                Some(SeverityOverride::Error) => diag.severity = Severity::Error,
                Some(SeverityOverride::Warning) => diag.severity = Severity::Warning,
                Some(SeverityOverride::Info) => diag.severity = Severity::Info,
            }
            Some(diag)
        })
        .collect()
}

/// Concatenate code issues, pattern diagnostics and health rule diagnostics, in that order,
/// then apply severity overrides. Nothing is deduplicated.
pub fn aggregate(
    issues: &[Issue],
    pattern_diags: Vec<I18nDiagnostic>,
    health_diags: Vec<I18nDiagnostic>,
    overrides: &BTreeMap<RuleId, SeverityOverride>,
) -> Vec<I18nDiagnostic> {
    let mut all: Vec<I18nDiagnostic> = issues.iter().map(I18nDiagnostic::from).collect();
    all.extend(pattern_diags);
    all.extend(health_diags);
    apply_severity_overrides(all, overrides)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        BindingKind, DynamicPattern, NamespaceBinding, SourceContext, SourceLocation,
        pattern::AmbiguousPattern,
    };
    use crate::diagnostics::Category;

    fn context(line: usize) -> SourceContext {
        SourceContext::new(
            SourceLocation::new("src/app/page.tsx", line, 5),
            "    <h1>Welcome back</h1>",
        )
    }

    fn hardcoded(kind: IssueKind) -> Issue {
        Issue::hardcoded(
            kind,
            context(3),
            "Welcome back",
            "Hardcoded text \"Welcome back\"",
            Some("page.welcomeBack".to_string()),
        )
    }

    fn pattern(text: &str) -> DynamicPattern {
        DynamicPattern::new(
            text,
            SourceLocation::new("src/app/pricing.tsx", 7, 12),
            Some("pricing".to_string()),
            BindingKind::BoundScoped,
        )
    }

    #[test]
    fn test_issue_kind_maps_to_rule() {
        assert_eq!(RuleId::from(IssueKind::MarkupText), RuleId::HardcodedText);
        assert_eq!(
            RuleId::from(IssueKind::NotificationMessage),
            RuleId::HardcodedNotification
        );
        assert_eq!(RuleId::from(IssueKind::StringVariable), RuleId::HardcodedVariable);
    }

    #[test]
    fn test_issue_conversion() {
        let diag = I18nDiagnostic::from(&hardcoded(IssueKind::MarkupText));
        assert_eq!(diag.rule, RuleId::HardcodedText);
        assert_eq!(diag.category, Category::Code);
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!((diag.line, diag.column), (3, 5));
        assert_eq!(diag.key.as_deref(), Some("page.welcomeBack"));
        assert!(diag.source_line.is_some());
    }

    #[test]
    fn test_translation_key_conversion() {
        let binding = NamespaceBinding::BoundScoped("auth".to_string());
        let issue = Issue::translation_key(context(1), "title", &binding);
        let diag = I18nDiagnostic::from(&issue);
        assert_eq!(diag.rule, RuleId::TranslationKey);
        assert_eq!(diag.severity, Severity::Info);
        assert_eq!(diag.key.as_deref(), Some("auth.title"));
        assert_eq!(diag.namespace.as_deref(), Some("auth"));
    }

    #[test]
    fn test_pattern_diagnostics() {
        let reconciliation = Reconciliation {
            ambiguous: vec![AmbiguousPattern {
                pattern: pattern("pricing.${id}"),
                match_count: 80,
            }],
            unmatched: vec![pattern("pricing.missing.${id}")],
            ..Default::default()
        };
        let diags = pattern_diagnostics(&reconciliation, 50);
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].rule, RuleId::DynamicKeyAmbiguous);
        assert_eq!(diags[0].category, Category::Code);
        assert!(diags[0].message.contains("80"));
        assert_eq!(diags[1].rule, RuleId::DynamicKeyUnmatched);
        assert_eq!(diags[1].category, Category::Coverage);
        assert_eq!(diags[1].line, 7);
    }

    #[test]
    fn test_severity_overrides() {
        let diags = vec![
            I18nDiagnostic::from(&hardcoded(IssueKind::StringVariable)),
            I18nDiagnostic::from(&hardcoded(IssueKind::MarkupText)),
            I18nDiagnostic::new(RuleId::OrphanKey, Severity::Warning, "unused"),
        ];
        let overrides = BTreeMap::from([
            (RuleId::HardcodedVariable, SeverityOverride::Off),
            (RuleId::OrphanKey, SeverityOverride::Error),
        ]);
        let result = apply_severity_overrides(diags, &overrides);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].rule, RuleId::HardcodedText);
        assert_eq!(result[0].severity, Severity::Warning);
        assert_eq!(result[1].severity, Severity::Error);
    }

    #[test]
    fn test_aggregate_keeps_duplicates_and_order() {
        let issues = vec![
            hardcoded(IssueKind::MarkupText),
            hardcoded(IssueKind::MarkupText),
        ];
        let health = vec![I18nDiagnostic::new(
            RuleId::MissingTranslation,
            Severity::Error,
            "missing",
        )];
        let all = aggregate(&issues, Vec::new(), health, &BTreeMap::new());
        assert_eq!(all.len(), 3);
        assert_eq!(all[2].rule, RuleId::MissingTranslation);
    }
}
