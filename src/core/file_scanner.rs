//! Source file discovery.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use glob::{Pattern, glob};
use walkdir::{DirEntry, WalkDir};

use crate::config::TEST_FILE_PATTERNS;

/// Directories never worth descending into.
pub const SKIPPED_DIRS: &[&str] = &["node_modules", ".next", "dist", "build", ".git"];

/// Patterns without wildcards are literal directory paths, so `app/[locale]` is not a glob.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

pub struct DiscoveryResult {
    /// Sorted, deduplicated source files.
    pub files: BTreeSet<PathBuf>,
    /// Paths that could not be read while walking.
    pub skipped_count: usize,
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIPPED_DIRS.contains(&name))
}

fn is_scannable_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("tsx" | "ts" | "jsx" | "js")
    )
}

/// Roots to walk: `base_dir` itself, or every include below it.
fn include_roots(base_dir: &Path, includes: &[String]) -> Vec<PathBuf> {
    if includes.is_empty() {
        return vec![base_dir.to_path_buf()];
    }

    let mut roots = Vec::new();
    for include in includes {
        if is_glob_pattern(include) {
            let full_pattern = base_dir.join(include);
            match glob(&full_pattern.to_string_lossy()) {
                Ok(entries) => roots.extend(entries.flatten().filter(|p| p.is_dir())),
                Err(e) => tracing::warn!(pattern = %include, error = %e, "invalid include pattern"),
            }
        } else {
            let path = base_dir.join(include);
            if path.exists() {
                roots.push(path);
            } else {
                tracing::debug!(path = %path.display(), "include path does not exist");
            }
        }
    }
    roots
}

/// Find every `.tsx/.ts/.jsx/.js` file under `base_dir`.
///
/// `ignores` entries are globs when they contain `*` or `?`, otherwise directory paths
/// relative to `base_dir`.
pub fn discover_files(
    base_dir: &Path,
    includes: &[String],
    ignores: &[String],
    ignore_test_files: bool,
) -> DiscoveryResult {
    let mut files = BTreeSet::new();
    let mut skipped_count = 0;

    let mut literal_ignores: Vec<PathBuf> = Vec::new();
    let mut glob_ignores: Vec<Pattern> = Vec::new();

    for ignore in ignores {
        if is_glob_pattern(ignore) {
            match Pattern::new(ignore) {
                Ok(pattern) => glob_ignores.push(pattern),
                Err(e) => tracing::warn!(pattern = %ignore, error = %e, "invalid ignore pattern"),
            }
        } else {
            literal_ignores.push(base_dir.join(ignore));
        }
    }

    if ignore_test_files {
        glob_ignores.extend(TEST_FILE_PATTERNS.iter().filter_map(|p| Pattern::new(p).ok()));
    }

    for root in include_roots(base_dir, includes) {
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| !is_skipped_dir(entry));
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    tracing::warn!(error = %e, "cannot access path");
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file() || !is_scannable_file(path) {
                continue;
            }
            if literal_ignores.iter().any(|ignore| path.starts_with(ignore)) {
                continue;
            }
            let path_str = path.to_string_lossy();
            if glob_ignores.iter().any(|p| p.matches(&path_str)) {
                continue;
            }
            files.insert(path.to_path_buf());
        }
    }

    tracing::debug!(files = files.len(), skipped = skipped_count, "discovered source files");
    DiscoveryResult {
        files,
        skipped_count,
    }
}
