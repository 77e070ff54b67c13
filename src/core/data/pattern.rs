use serde::Serialize;

use super::{BindingKind, SourceLocation};

/// A translation key built at runtime, recorded as a pattern.
///
/// Placeholders keep the interpolated expression's own text, e.g. `plans.${planKey}.name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicPattern {
    pub pattern: String,
    pub location: SourceLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub binding: BindingKind,
}

impl DynamicPattern {
    pub fn new(
        pattern: impl Into<String>,
        location: SourceLocation,
        namespace: Option<String>,
        binding: BindingKind,
    ) -> Self {
        Self {
            pattern: pattern.into(),
            location,
            namespace,
            binding,
        }
    }
}
