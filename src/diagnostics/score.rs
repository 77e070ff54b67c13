//! Health score.
//!
//! Penalties are counted in hundredths of a point so the result does not depend on
//! floating-point rounding:
//!
//! - overall: `100 - 3.0 * errors - 0.15 * warnings`
//! - per category: `100 - 5.0 * errors - 0.5 * warnings`
//!
//! Info diagnostics never count. Scores round half-up and clamp to `0..=100`.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{Category, I18nDiagnostic, Severity};

/// Default pass/fail threshold for the overall score.
pub const DEFAULT_THRESHOLD: u32 = 70;

const OVERALL_ERROR_PENALTY: u64 = 300;
const OVERALL_WARNING_PENALTY: u64 = 15;
const CATEGORY_ERROR_PENALTY: u64 = 500;
const CATEGORY_WARNING_PENALTY: u64 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthScore {
    pub overall: u32,
    pub categories: BTreeMap<Category, u32>,
    pub passed: bool,
    pub threshold: u32,
}

#[derive(Debug, Clone, Copy, Default)]
struct Counts {
    errors: u64,
    warnings: u64,
}

impl Counts {
    fn add(&mut self, severity: Severity) {
        match severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
            Severity::Info => {}
        }
    }
}

/// `100 - penalty`, rounded half-up from hundredths and clamped.
fn score(counts: Counts, error_penalty: u64, warning_penalty: u64) -> u32 {
    let penalty = counts
        .errors
        .saturating_mul(error_penalty)
        .saturating_add(counts.warnings.saturating_mul(warning_penalty));
    let remaining = 10_000u64.saturating_sub(penalty);
    ((remaining + 50) / 100).min(100) as u32
}

impl HealthScore {
    pub fn compute(diagnostics: &[I18nDiagnostic], threshold: u32) -> Self {
        let mut overall = Counts::default();
        let mut per_category: BTreeMap<Category, Counts> =
            Category::ALL.iter().map(|c| (*c, Counts::default())).collect();

        for diag in diagnostics {
            overall.add(diag.severity);
            per_category
                .entry(diag.category)
                .or_default()
                .add(diag.severity);
        }

        let overall = score(overall, OVERALL_ERROR_PENALTY, OVERALL_WARNING_PENALTY);
        let categories = per_category
            .into_iter()
            .map(|(category, counts)| {
                (
                    category,
                    score(counts, CATEGORY_ERROR_PENALTY, CATEGORY_WARNING_PENALTY),
                )
            })
            .collect();

        Self {
            overall,
            categories,
            passed: overall >= threshold,
            threshold,
        }
    }

    pub fn category(&self, category: Category) -> u32 {
        self.categories.get(&category).copied().unwrap_or(100)
    }
}
