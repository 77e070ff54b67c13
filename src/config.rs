use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::diagnostics::RuleId;

pub const CONFIG_FILE_NAME: &str = ".intlcheckrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

/// Severity assigned to a rule by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityOverride {
    Error,
    Warning,
    Info,
    /// Drop the rule's diagnostics entirely.
    Off,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    #[serde(default)]
    pub ignore_texts: Vec<String>,
    /// Regular expressions; matching texts are never reported as hardcoded.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
    /// Extra global translator function names (always root-scoped).
    #[serde(default)]
    pub translator_functions: Vec<String>,
    #[serde(default = "default_name_shape_fallback")]
    pub name_shape_fallback: bool,
    #[serde(default)]
    pub severity_overrides: BTreeMap<String, SeverityOverride>,
    #[serde(default = "default_source_locale", alias = "primaryLocale")]
    pub source_locale: String,
    #[serde(default = "default_messages_root", alias = "messagesDir")]
    pub messages_root: String,
    #[serde(default = "default_threshold")]
    pub threshold: u32,
    #[serde(default = "default_ambiguity_threshold")]
    pub ambiguity_threshold: usize,
}

fn default_ignore_test_files() -> bool {
    true
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_min_length() -> usize {
    crate::core::detect::DEFAULT_MIN_LENGTH
}

fn default_name_shape_fallback() -> bool {
    true
}

fn default_source_locale() -> String {
    "en".to_string()
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

fn default_threshold() -> u32 {
    crate::diagnostics::DEFAULT_THRESHOLD
}

fn default_ambiguity_threshold() -> usize {
    crate::core::pattern::DEFAULT_AMBIGUITY_THRESHOLD
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            includes: Vec::new(),
            ignore_test_files: default_ignore_test_files(),
            source_root: default_source_root(),
            min_length: default_min_length(),
            ignore_texts: Vec::new(),
            ignore_patterns: Vec::new(),
            translator_functions: Vec::new(),
            name_shape_fallback: default_name_shape_fallback(),
            severity_overrides: BTreeMap::new(),
            source_locale: default_source_locale(),
            messages_root: default_messages_root(),
            threshold: default_threshold(),
            ambiguity_threshold: default_ambiguity_threshold(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects invalid glob patterns, invalid `ignorePatterns` regexes, unknown rule ids
    /// in `severityOverrides` and thresholds above 100.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Patterns without wildcards are literal directories, so `app/[locale]` is valid.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        self.compiled_ignore_patterns()?;

        for rule in self.severity_overrides.keys() {
            if rule.parse::<RuleId>().is_err() {
                bail!("Unknown rule in 'severityOverrides': \"{}\"", rule);
            }
        }

        if self.threshold > 100 {
            bail!("'threshold' must be between 0 and 100, got {}", self.threshold);
        }

        Ok(())
    }

    /// Compile `ignorePatterns`.
    pub fn compiled_ignore_patterns(&self) -> Result<Vec<Regex>> {
        self.ignore_patterns
            .iter()
            .map(|p| {
                Regex::new(p)
                    .with_context(|| format!("Invalid regex in 'ignorePatterns': \"{}\"", p))
            })
            .collect()
    }

    /// Parsed severity overrides; unknown rule names are skipped.
    pub fn rule_overrides(&self) -> BTreeMap<RuleId, SeverityOverride> {
        self.severity_overrides
            .iter()
            .filter_map(|(rule, sev)| rule.parse::<RuleId>().ok().map(|id| (id, *sev)))
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
