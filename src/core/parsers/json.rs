//! Locale file loading.
//!
//! Two layouts are recognized under the messages root, and may be mixed:
//!
//! ```text
//! messages/en.json              -> keys as written
//! messages/de/auth.json         -> keys prefixed with "auth."
//! messages/de/settings/team.json -> keys prefixed with "settings.team."
//! ```

use std::{
    collections::{BTreeMap, HashMap},
    fs,
    path::Path,
};

use anyhow::{Context, Result, bail};
use serde_json::Value;
use walkdir::WalkDir;

/// Flattened `key -> value` table of one locale.
pub type LocaleTable = BTreeMap<String, String>;

/// All loaded locales.
pub type LocaleTables = HashMap<String, LocaleTable>;

/// A locale file that could not be read or parsed.
#[derive(Debug, Clone)]
pub struct LocaleLoadWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct LoadLocalesResult {
    pub tables: LocaleTables,
    /// Display path per locale: the `<locale>.json` file or the `<locale>/` directory.
    pub paths: HashMap<String, String>,
    pub warnings: Vec<LocaleLoadWarning>,
}

impl LoadLocalesResult {
    /// Locale names in sorted order.
    pub fn locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.tables.keys().cloned().collect();
        locales.sort();
        locales
    }
}

/// Read and flatten one JSON file, prefixing every key with `prefix`.
pub fn parse_locale_file(path: &Path, prefix: &str) -> Result<LocaleTable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

    let mut table = LocaleTable::new();
    flatten_json(&json, prefix.to_string(), &mut table);
    Ok(table)
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Flatten nested JSON into dotted keys.
///
/// - objects nest: `{"a": {"b": "x"}}` -> `a.b`
/// - string arrays are one value, joined with `, `
/// - other arrays expand by index: `items.0.question`
/// - numbers and booleans are stringified; `null` is dropped
pub fn flatten_json(value: &Value, prefix: String, out: &mut LocaleTable) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                flatten_json(val, join_key(&prefix, key), out);
            }
        }
        Value::String(s) => {
            out.insert(prefix, s.clone());
        }
        Value::Number(n) => {
            out.insert(prefix, n.to_string());
        }
        Value::Bool(b) => {
            out.insert(prefix, b.to_string());
        }
        Value::Array(arr) => {
            if arr.is_empty() {
                return;
            }
            let is_string_array = arr.iter().all(Value::is_string);
            if is_string_array && !prefix.is_empty() {
                let values: Vec<&str> = arr.iter().filter_map(Value::as_str).collect();
                out.insert(prefix, values.join(", "));
            } else {
                for (index, val) in arr.iter().enumerate() {
                    flatten_json(val, join_key(&prefix, &index.to_string()), out);
                }
            }
        }
        Value::Null => {}
    }
}

/// Locale name from a file or directory name: `zh-CN.json` -> `zh-CN`.
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Key prefix for a namespace file relative to its locale directory.
fn namespace_prefix(relative: &Path) -> String {
    let mut segments: Vec<String> = relative
        .parent()
        .map(|p| {
            p.components()
                .filter_map(|c| c.as_os_str().to_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();
    if let Some(stem) = extract_locale(relative) {
        segments.push(stem);
    }
    segments.join(".")
}

/// Load every locale under `messages_root`.
///
/// Unreadable or malformed files are skipped and reported in `warnings`.
pub fn load_locale_tables(messages_root: impl AsRef<Path>) -> Result<LoadLocalesResult> {
    let messages_root = messages_root.as_ref();
    let mut result = LoadLocalesResult::default();

    if !messages_root.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check your .intlcheckrc.json 'messagesRoot' setting.",
            messages_root.display()
        );
    }
    if !messages_root.is_dir() {
        bail!("'{}' is not a directory.", messages_root.display());
    }

    let mut entries: Vec<_> = fs::read_dir(messages_root)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .collect();
    entries.sort();

    for path in entries {
        let Some(locale) = extract_locale(&path) else {
            continue;
        };
        let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
        if path.is_dir() || is_json {
            result
                .paths
                .entry(locale.clone())
                .or_insert_with(|| path.display().to_string());
        }

        if path.is_dir() {
            let mut files: Vec<_> = WalkDir::new(&path)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
                .map(|e| e.into_path())
                .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("json"))
                .collect();
            files.sort();
            for file in files {
                let relative = file.strip_prefix(&path).unwrap_or(&file);
                let prefix = namespace_prefix(relative);
                result.merge_file(&locale, &file, &prefix);
            }
        } else if is_json {
            result.merge_file(&locale, &path, "");
        }
    }

    Ok(result)
}

impl LoadLocalesResult {
    fn merge_file(&mut self, locale: &str, path: &Path, prefix: &str) {
        match parse_locale_file(path, prefix) {
            Ok(table) => {
                self.tables
                    .entry(locale.to_string())
                    .or_default()
                    .extend(table);
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %format!("{:#}", e), "skipping locale file");
                self.warnings.push(LocaleLoadWarning {
                    file_path: path.to_string_lossy().to_string(),
                    error: format!("{:#}", e),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::core::parsers::json::*;

    fn flatten(content: &str) -> LocaleTable {
        let json: Value = serde_json::from_str(content).unwrap();
        let mut table = LocaleTable::new();
        flatten_json(&json, String::new(), &mut table);
        table
    }

    #[test]
    fn test_flatten_nested() {
        let table = flatten(r#"{"Auth": {"Login": {"title": "Login", "button": "Submit"}}}"#);
        assert_eq!(table.get("Auth.Login.title").map(String::as_str), Some("Login"));
        assert_eq!(table.get("Auth.Login.button").map(String::as_str), Some("Submit"));
    }

    #[test]
    fn test_flatten_arrays_and_scalars() {
        let table = flatten(
            r#"{"tags": ["a", "b"], "faq": [{"q": "Why?"}], "count": 3, "beta": true, "gone": null}"#,
        );
        assert_eq!(table.get("tags").map(String::as_str), Some("a, b"));
        assert_eq!(table.get("faq.0.q").map(String::as_str), Some("Why?"));
        assert_eq!(table.get("count").map(String::as_str), Some("3"));
        assert_eq!(table.get("beta").map(String::as_str), Some("true"));
        assert!(!table.contains_key("gone"));
    }

    #[test]
    fn test_extract_locale() {
        assert_eq!(extract_locale(Path::new("en.json")), Some("en".to_string()));
        assert_eq!(
            extract_locale(Path::new("/path/to/messages/zh-CN.json")),
            Some("zh-CN".to_string())
        );
    }

    #[test]
    fn test_load_both_layouts() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("en.json"), r#"{"home": {"title": "Home"}}"#).unwrap();
        fs::create_dir_all(dir.path().join("de/settings")).unwrap();
        fs::write(dir.path().join("de/home.json"), r#"{"title": "Start"}"#).unwrap();
        fs::write(dir.path().join("de/settings/team.json"), r#"{"name": "Team"}"#).unwrap();

        let result = load_locale_tables(dir.path()).unwrap();
        assert_eq!(result.locales(), vec!["de".to_string(), "en".to_string()]);
        assert_eq!(
            result.tables["en"].get("home.title").map(String::as_str),
            Some("Home")
        );
        assert_eq!(
            result.tables["de"].get("home.title").map(String::as_str),
            Some("Start")
        );
        assert_eq!(
            result.tables["de"].get("settings.team.name").map(String::as_str),
            Some("Team")
        );
        assert!(result.warnings.is_empty());
        assert!(result.paths["en"].ends_with("en.json"));
        assert!(result.paths["de"].ends_with("de"));
    }

    #[test]
    fn test_malformed_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("en.json"), r#"{"ok": "Fine"}"#).unwrap();
        fs::write(dir.path().join("fr.json"), "{ not json").unwrap();

        let result = load_locale_tables(dir.path()).unwrap();
        assert_eq!(result.locales(), vec!["en".to_string()]);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].file_path.ends_with("fr.json"));
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = load_locale_tables(dir.path().join("nope")).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }
}
