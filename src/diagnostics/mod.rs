//! Unified diagnostics and health scoring.
//!
//! Every finding of a run, whether it comes from a source-file detector, the dynamic key
//! matcher or a locale health rule, ends up as an [`I18nDiagnostic`]. Category and help
//! text come only from the rule registry in [`metadata`].
//!
//! ## Module Structure
//!
//! - `metadata`: static rule registry (category, help, title)
//! - `aggregate`: issue conversion, severity overrides, concatenation
//! - `score`: occurrence-weighted health score

pub mod aggregate;
pub mod metadata;
pub mod score;

use std::{fmt, str::FromStr};

use serde::Serialize;

pub use crate::issues::Severity;
pub use aggregate::{aggregate, apply_severity_overrides, pattern_diagnostics};
pub use metadata::{RuleMeta, rule_meta};
pub use score::{DEFAULT_THRESHOLD, HealthScore};

// ============================================================
// Category
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Coverage,
    Quality,
    Structure,
    Code,
    Performance,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Coverage,
        Category::Quality,
        Category::Structure,
        Category::Code,
        Category::Performance,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Coverage => "coverage",
            Category::Quality => "quality",
            Category::Structure => "structure",
            Category::Code => "code",
            Category::Performance => "performance",
        };
        f.write_str(name)
    }
}

// ============================================================
// Rule ids
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    HardcodedText,
    HardcodedAttribute,
    LocaleTernary,
    HardcodedNotification,
    HardcodedVariable,
    TranslationKey,
    DynamicKeyAmbiguous,
    DynamicKeyUnmatched,
    MissingTranslation,
    PlaceholderMismatch,
    OrphanKey,
    UndefinedKey,
    EmptyTranslation,
    UntranslatedValue,
    ExtraKey,
}

impl RuleId {
    pub const ALL: [RuleId; 15] = [
        RuleId::HardcodedText,
        RuleId::HardcodedAttribute,
        RuleId::LocaleTernary,
        RuleId::HardcodedNotification,
        RuleId::HardcodedVariable,
        RuleId::TranslationKey,
        RuleId::DynamicKeyAmbiguous,
        RuleId::DynamicKeyUnmatched,
        RuleId::MissingTranslation,
        RuleId::PlaceholderMismatch,
        RuleId::OrphanKey,
        RuleId::UndefinedKey,
        RuleId::EmptyTranslation,
        RuleId::UntranslatedValue,
        RuleId::ExtraKey,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleId::HardcodedText => "hardcoded-text",
            RuleId::HardcodedAttribute => "hardcoded-attribute",
            RuleId::LocaleTernary => "locale-ternary",
            RuleId::HardcodedNotification => "hardcoded-notification",
            RuleId::HardcodedVariable => "hardcoded-variable",
            RuleId::TranslationKey => "translation-key",
            RuleId::DynamicKeyAmbiguous => "dynamic-key-ambiguous",
            RuleId::DynamicKeyUnmatched => "dynamic-key-unmatched",
            RuleId::MissingTranslation => "missing-translation",
            RuleId::PlaceholderMismatch => "placeholder-mismatch",
            RuleId::OrphanKey => "orphan-key",
            RuleId::UndefinedKey => "undefined-key",
            RuleId::EmptyTranslation => "empty-translation",
            RuleId::UntranslatedValue => "untranslated-value",
            RuleId::ExtraKey => "extra-key",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown rule: {}", s))
    }
}

// ============================================================
// Diagnostic
// ============================================================

/// One finding in the unified report.
///
/// `line`/`column` are 1-based, or 0 when the finding has no source position
/// (most locale health rules).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct I18nDiagnostic {
    pub file_path: String,
    pub line: usize,
    pub column: usize,
    pub rule: RuleId,
    pub category: Category,
    pub severity: Severity,
    pub message: String,
    pub help: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Source line for caret rendering; not part of the serialized report.
    #[serde(skip)]
    pub source_line: Option<String>,
}

impl I18nDiagnostic {
    /// Create a diagnostic; category and help come from the rule registry.
    pub fn new(rule: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        let meta = rule_meta(rule);
        Self {
            file_path: String::new(),
            line: 0,
            column: 0,
            rule,
            category: meta.category,
            severity,
            message: message.into(),
            help: meta.help.to_string(),
            key: None,
            namespace: None,
            language: None,
            source_line: None,
        }
    }

    pub fn at(mut self, file_path: impl Into<String>, line: usize, column: usize) -> Self {
        self.file_path = file_path.into();
        self.line = line;
        self.column = column;
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        self.namespace = namespace;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_source_line(mut self, source_line: impl Into<String>) -> Self {
        self.source_line = Some(source_line.into());
        self
    }

    pub fn has_location(&self) -> bool {
        self.line > 0
    }
}
