//! Per-file and batch scanning.
//!
//! Each file is parsed with its own `SourceMap` and walked by one [`FileAnalyzer`];
//! batch results are merged sequentially after the parallel section.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;

use crate::{
    config::Config,
    core::{
        DynamicPattern, ScanStats,
        detect::DetectorOptions,
        extract::FileAnalyzer,
        parsers::jsx::{ParsedModule, parse_source},
    },
    issues::Issue,
};

/// Everything that tunes a scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub detector: DetectorOptions,
    /// Extra global translator names, always root-scoped.
    pub translator_functions: Vec<String>,
    /// Treat unbound `t`/`tFoo` callees as translators with an unknown namespace.
    pub name_shape_fallback: bool,
    /// Reported file paths are made relative to this directory.
    pub base_dir: Option<PathBuf>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            detector: DetectorOptions::default(),
            translator_functions: Vec::new(),
            name_shape_fallback: true,
            base_dir: None,
        }
    }
}

impl ScanOptions {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            detector: DetectorOptions {
                min_length: config.min_length,
                ignore_texts: config.ignore_texts.iter().cloned().collect(),
                ignore_patterns: config.compiled_ignore_patterns()?,
            },
            translator_functions: config.translator_functions.clone(),
            name_shape_fallback: config.name_shape_fallback,
            base_dir: None,
        })
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    /// Path as shown in reports: relative to `base_dir`, with `/` separators.
    pub fn display_path(&self, path: &Path) -> String {
        let relative = self
            .base_dir
            .as_deref()
            .and_then(|base| path.strip_prefix(base).ok())
            .unwrap_or(path);
        relative.to_string_lossy().replace('\\', "/")
    }
}

/// Findings of one file.
#[derive(Debug, Clone, Default)]
pub struct FileScanResult {
    pub issues: Vec<Issue>,
    pub stats: ScanStats,
    pub patterns: Vec<DynamicPattern>,
}

fn analyze_parsed(parsed: &ParsedModule, file_path: &str, options: &ScanOptions) -> FileScanResult {
    FileAnalyzer::new(file_path, &parsed.source_map, options).analyze(&parsed.module)
}

/// Parse and analyze one file's source, failing on syntax errors.
pub fn try_scan_source(code: &str, file_path: &str, options: &ScanOptions) -> Result<FileScanResult> {
    let parsed = parse_source(code.to_string(), file_path, Arc::default())?;
    Ok(analyze_parsed(&parsed, file_path, options))
}

/// Parse and analyze one file's source.
///
/// A file that does not parse yields an empty result.
pub fn scan_source(code: &str, file_path: &str, options: &ScanOptions) -> FileScanResult {
    match try_scan_source(code, file_path, options) {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!(file = file_path, error = %format!("{:#}", e), "skipping unparsable file");
            FileScanResult::default()
        }
    }
}

/// A file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanError {
    pub file_path: String,
    pub error: String,
}

/// Merged findings of many files.
#[derive(Debug, Clone, Default)]
pub struct BatchScanResult {
    pub issues: Vec<Issue>,
    pub stats: ScanStats,
    pub patterns: Vec<DynamicPattern>,
    pub files_scanned: usize,
    pub files_failed: usize,
    pub errors: Vec<ScanError>,
}

fn scan_file(path: &Path, options: &ScanOptions) -> Result<FileScanResult> {
    let display_path = options.display_path(path);
    let code = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", display_path))?;
    try_scan_source(&code, &display_path, options)
}

/// Scan files in parallel. Unreadable or unparsable files are counted, never fatal.
pub fn scan_files(files: &[PathBuf], options: &ScanOptions) -> BatchScanResult {
    let results: Vec<(String, Result<FileScanResult>)> = files
        .par_iter()
        .map(|path| (options.display_path(path), scan_file(path, options)))
        .collect();

    let mut batch = BatchScanResult::default();
    for (file_path, result) in results {
        match result {
            Ok(file) => {
                batch.files_scanned += 1;
                batch.issues.extend(file.issues);
                batch.patterns.extend(file.patterns);
                batch.stats += file.stats;
            }
            Err(e) => {
                let error = format!("{:#}", e);
                tracing::warn!(file = %file_path, error = %error, "skipping file");
                batch.files_failed += 1;
                batch.errors.push(ScanError { file_path, error });
            }
        }
    }

    tracing::debug!(
        scanned = batch.files_scanned,
        failed = batch.files_failed,
        issues = batch.issues.len(),
        patterns = batch.patterns.len(),
        "scan finished"
    );
    batch
}
