use std::{
    collections::{BTreeSet, HashSet},
    path::{Component, Path, PathBuf},
};

use anyhow::Result;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        BindingKind, ScanStats,
        file_scanner::discover_files,
        parsers::json::{LoadLocalesResult, LocaleLoadWarning, load_locale_tables},
        pattern::{Reconciliation, reconcile},
        scan::{BatchScanResult, ScanError, ScanOptions, scan_files},
    },
    diagnostics::{HealthScore, I18nDiagnostic, aggregate, pattern_diagnostics},
    issues::Issue,
    rules::{HealthRuleContext, run_health_rules},
};

/// Everything one `check` run produced.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub diagnostics: Vec<I18nDiagnostic>,
    pub score: HealthScore,
    pub stats: ScanStats,
    pub files_scanned: usize,
    pub files_failed: usize,
    pub scan_errors: Vec<ScanError>,
    pub locale_warnings: Vec<LocaleLoadWarning>,
}

/// Project-level orchestration of one run.
///
/// Pipeline: discover files, scan them in parallel, load locale tables, reconcile
/// dynamic key patterns against the source locale, run the health rules, then
/// aggregate and score.
///
/// Configuration priority (highest first): CLI arguments, `.intlcheckrc.json`,
/// built-in defaults.
pub struct CheckContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,
    /// Config file in effect, `None` when using defaults.
    pub config_path: Option<PathBuf>,
    /// Project root; reported paths are relative to it.
    pub root_dir: PathBuf,
    /// Source files to analyze, sorted.
    pub files: Vec<PathBuf>,
    /// Paths that could not be accessed during discovery.
    pub skipped_paths: usize,
}

impl CheckContext {
    /// Load configuration, apply CLI overrides and discover source files.
    ///
    /// # Errors
    ///
    /// Returns an error when the config file cannot be read, parsed or validated.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let loaded = load_config(&root_dir)?;
        if !loaded.from_file() {
            tracing::debug!("no .intlcheckrc.json found, using default configuration");
        }
        let mut config = loaded.config;

        if let Some(source_locale) = &common_args.source_locale {
            config.source_locale = source_locale.clone();
        }
        if let Some(messages_root) = &common_args.messages_root {
            config.messages_root = messages_root.to_string_lossy().to_string();
        }
        if let Some(threshold) = common_args.threshold {
            config.threshold = threshold;
        }
        config.validate()?;

        let scan_dir = resolve_relative(&root_dir, &config.source_root);
        let discovery = discover_files(
            &scan_dir,
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
        );
        if discovery.skipped_count > 0 {
            tracing::warn!(
                count = discovery.skipped_count,
                "paths skipped due to access errors"
            );
        }

        Ok(Self {
            config,
            config_path: loaded.path,
            root_dir,
            files: discovery.files.into_iter().collect(),
            skipped_paths: discovery.skipped_count,
        })
    }

    /// Resolve the messages directory relative to `root_dir`.
    pub fn resolved_messages_dir(&self) -> PathBuf {
        resolve_relative(&self.root_dir, &self.config.messages_root)
    }

    pub fn scan_options(&self) -> Result<ScanOptions> {
        Ok(ScanOptions::from_config(&self.config)?.with_base_dir(&self.root_dir))
    }

    /// Load locale tables; a missing messages directory means no tables.
    pub fn load_locales(&self) -> LoadLocalesResult {
        let dir = self.resolved_messages_dir();
        match load_locale_tables(&dir) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(error = %format!("{:#}", e), "no locale tables loaded");
                LoadLocalesResult::default()
            }
        }
    }

    pub fn run(&self) -> Result<CheckReport> {
        let options = self.scan_options()?;
        let scan = scan_files(&self.files, &options);
        let mut locales = self.load_locales();
        tracing::debug!(locales = ?locales.locales(), "loaded locale tables");

        let source_keys: BTreeSet<String> = locales
            .tables
            .get(&self.config.source_locale)
            .map(|table| table.keys().cloned().collect())
            .unwrap_or_default();

        // Without source keys every pattern would look unmatched.
        let reconciliation = if source_keys.is_empty() {
            Reconciliation::default()
        } else {
            reconcile(&scan.patterns, &source_keys, self.config.ambiguity_threshold)
        };

        let (code_keys, verified_keys) = collect_code_keys(&scan.issues, &reconciliation);

        let locale_paths = locales
            .paths
            .drain()
            .map(|(locale, path)| {
                let display = options.display_path(Path::new(&path));
                (locale, display)
            })
            .collect();

        let health_ctx = HealthRuleContext::new(
            self.config.source_locale.clone(),
            std::mem::take(&mut locales.tables),
        )
        .with_code_keys(code_keys)
        .with_verified_keys(verified_keys)
        .with_locale_paths(locale_paths)
        .with_project_root(&self.root_dir)
        .with_config(self.config.clone());

        let health = run_health_rules(&health_ctx);
        let patterns = pattern_diagnostics(&reconciliation, self.config.ambiguity_threshold);

        let BatchScanResult {
            issues,
            stats,
            files_scanned,
            files_failed,
            errors,
            ..
        } = scan;

        let diagnostics = aggregate(&issues, patterns, health, &self.config.rule_overrides());
        let score = HealthScore::compute(&diagnostics, self.config.threshold);

        Ok(CheckReport {
            diagnostics,
            score,
            stats,
            files_scanned,
            files_failed,
            scan_errors: errors,
            locale_warnings: locales.warnings,
        })
    }
}

/// Keys observed in code: `(all, verified)`.
///
/// `all` holds every statically resolved key plus the keys matched by non-ambiguous
/// patterns; `verified` only keys whose namespace is known for certain.
pub fn collect_code_keys(
    issues: &[Issue],
    reconciliation: &Reconciliation,
) -> (HashSet<String>, HashSet<String>) {
    let mut all: HashSet<String> = reconciliation.matched_keys.iter().cloned().collect();
    let mut verified = HashSet::new();
    for issue in issues {
        let Some(key) = &issue.resolved_key else {
            continue;
        };
        all.insert(key.clone());
        if matches!(
            issue.binding,
            Some(BindingKind::BoundScoped | BindingKind::RootScoped)
        ) {
            verified.insert(key.clone());
        }
    }
    (all, verified)
}

/// Join a configured path onto `root_dir`.
///
/// With `root_dir == "."` the configured path is kept as written so reported paths
/// read `./messages` rather than `././messages`.
fn resolve_relative(root_dir: &Path, configured: &str) -> PathBuf {
    let p = Path::new(configured);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        root_dir.join(rel)
    }
}
