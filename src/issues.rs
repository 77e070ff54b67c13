//! Issue types produced by code-level detectors.
//!
//! An [`Issue`] is a single finding attached to one AST node of one source file.
//! Issues are converted into [`crate::diagnostics::I18nDiagnostic`] values when the
//! project-level report is assembled.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{BindingKind, NamespaceBinding, SourceContext};

// ============================================================
// Severity
// ============================================================

/// Severity level of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

// ============================================================
// Issue kind
// ============================================================

/// Which detector produced an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueKind {
    /// Text content between JSX tags.
    MarkupText,
    /// User-facing JSX attribute value (`title`, `alt`, ...).
    MarkupAttribute,
    /// `locale === "en" ? "Hello" : "Hallo"` style branching.
    LocaleTernary,
    /// Literal message passed to a toast/notification call.
    NotificationMessage,
    /// `const label = "Save changes"`.
    StringVariable,
    /// A translation call whose key was extracted.
    TranslationKey,
}

impl IssueKind {
    /// Default severity before configuration overrides.
    pub fn default_severity(self) -> Severity {
        match self {
            IssueKind::LocaleTernary => Severity::Error,
            IssueKind::MarkupText
            | IssueKind::MarkupAttribute
            | IssueKind::NotificationMessage
            | IssueKind::StringVariable => Severity::Warning,
            IssueKind::TranslationKey => Severity::Info,
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IssueKind::MarkupText => "markup-text",
            IssueKind::MarkupAttribute => "markup-attribute",
            IssueKind::LocaleTernary => "locale-ternary",
            IssueKind::NotificationMessage => "notification-message",
            IssueKind::StringVariable => "string-variable",
            IssueKind::TranslationKey => "translation-key",
        };
        f.write_str(name)
    }
}

// ============================================================
// Issue
// ============================================================

/// One finding from a code-level detector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub context: SourceContext,
    /// The offending text (hardcoded string or raw key).
    pub text: String,
    pub kind: IssueKind,
    pub severity: Severity,
    pub message: String,
    /// Key the text could move to, derived from the file path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_key: Option<String>,
    /// Fully-qualified key of a translation call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding: Option<BindingKind>,
    pub is_dynamic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl Issue {
    /// Create a hardcoded-text issue with the detector's default severity.
    pub fn hardcoded(
        kind: IssueKind,
        context: SourceContext,
        text: impl Into<String>,
        message: impl Into<String>,
        suggested_key: Option<String>,
    ) -> Self {
        Self {
            context,
            text: text.into(),
            kind,
            severity: kind.default_severity(),
            message: message.into(),
            suggested_key,
            resolved_key: None,
            namespace: None,
            binding: None,
            is_dynamic: false,
            pattern: None,
        }
    }

    /// A translation call with a statically known key.
    pub fn translation_key(
        context: SourceContext,
        raw_key: impl Into<String>,
        binding: &NamespaceBinding,
    ) -> Self {
        let raw_key = raw_key.into();
        let resolved = binding.qualify(&raw_key);
        Self {
            context,
            message: format!("Translation key \"{}\"", resolved),
            text: raw_key,
            kind: IssueKind::TranslationKey,
            severity: Severity::Info,
            suggested_key: None,
            resolved_key: Some(resolved),
            namespace: binding.namespace().map(str::to_string),
            binding: Some(binding.kind()),
            is_dynamic: false,
            pattern: None,
        }
    }

    /// A translation call whose key is built at runtime.
    pub fn dynamic_key(
        context: SourceContext,
        raw_pattern: impl Into<String>,
        binding: &NamespaceBinding,
    ) -> Self {
        let raw_pattern = raw_pattern.into();
        let pattern = binding.qualify(&raw_pattern);
        Self {
            context,
            message: format!("Dynamic translation key \"{}\"", pattern),
            text: raw_pattern,
            kind: IssueKind::TranslationKey,
            severity: Severity::Info,
            suggested_key: None,
            resolved_key: None,
            namespace: binding.namespace().map(str::to_string),
            binding: Some(binding.kind()),
            is_dynamic: true,
            pattern: Some(pattern),
        }
    }

    pub fn file_path(&self) -> &str {
        self.context.file_path()
    }

    pub fn line(&self) -> usize {
        self.context.line()
    }

    pub fn col(&self) -> usize {
        self.context.col()
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.context
            .location
            .cmp(&other.context.location)
            .then_with(|| self.kind.cmp(&other.kind))
            .then_with(|| self.text.cmp(&other.text))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
