//! Hardcoded-string detectors.
//!
//! Each detector is a free function taking one AST node and the shared
//! [`DetectorContext`], returning at most one [`Issue`]. Detectors never look at each
//! other's output; the `FileAnalyzer` decides which nodes to hand to which detector.
//!
//! ## Module Structure
//!
//! - `markup_text`: text between JSX tags
//! - `markup_attr`: user-facing JSX attributes
//! - `locale_ternary`: `locale === "en" ? "..." : "..."`
//! - `notification`: `toast("...")`, `toast.error("...")`
//! - `string_variable`: `const label = "Save changes"`
//! - `suggest`: suggested-key derivation
//! - `text_shape`: shared technical-string heuristics

pub mod locale_ternary;
pub mod markup_attr;
pub mod markup_text;
pub mod notification;
pub mod string_variable;
pub mod suggest;
pub mod text_shape;

use std::collections::HashSet;

use regex::Regex;
use swc_common::{BytePos, SourceMap};

use crate::core::{SourceContext, SourceLocation};
use crate::issues::{Issue, IssueKind};

pub use locale_ternary::detect_locale_ternary;
pub use markup_attr::detect_markup_attr;
pub use markup_text::detect_markup_text;
pub use notification::detect_notification;
pub use string_variable::detect_string_variable;

/// Minimum trimmed length for markup text.
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Text filters shared by every detector.
#[derive(Debug, Clone)]
pub struct DetectorOptions {
    pub min_length: usize,
    pub ignore_texts: HashSet<String>,
    pub ignore_patterns: Vec<Regex>,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            ignore_texts: HashSet::new(),
            ignore_patterns: Vec::new(),
        }
    }
}

/// Read-only state handed to every detector for one file.
pub struct DetectorContext<'a> {
    file_path: &'a str,
    source_map: &'a SourceMap,
    options: &'a DetectorOptions,
    key_prefix: String,
}

impl<'a> DetectorContext<'a> {
    pub fn new(file_path: &'a str, source_map: &'a SourceMap, options: &'a DetectorOptions) -> Self {
        Self {
            file_path,
            source_map,
            options,
            key_prefix: suggest::path_prefix(file_path),
        }
    }

    pub fn file_path(&self) -> &str {
        self.file_path
    }

    pub fn min_length(&self) -> usize {
        self.options.min_length
    }

    /// True if the user configured this text to be ignored.
    pub fn is_ignored(&self, text: &str) -> bool {
        let text = text.trim();
        self.options.ignore_texts.contains(text)
            || self.options.ignore_patterns.iter().any(|re| re.is_match(text))
    }

    /// Location and source line for a byte position.
    pub fn source_context(&self, pos: BytePos) -> SourceContext {
        let loc = self.source_map.lookup_char_pos(pos);
        let source_line = loc
            .file
            .get_line(loc.line - 1)
            .map(|cow| cow.to_string())
            .unwrap_or_default();
        SourceContext::new(
            SourceLocation::new(self.file_path, loc.line, loc.col_display + 1),
            source_line,
        )
    }

    pub fn suggest_key(&self, text: &str) -> Option<String> {
        suggest::suggest_key(&self.key_prefix, text)
    }

    /// Build a hardcoded-text issue at `pos` with a suggested key.
    pub fn issue(&self, kind: IssueKind, pos: BytePos, text: &str, message: String) -> Issue {
        Issue::hardcoded(
            kind,
            self.source_context(pos),
            text,
            message,
            self.suggest_key(text),
        )
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use swc_common::{FileName, SourceMap, sync::Lrc};
    use swc_ecma_ast::Module;
    use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

    /// Parse TSX for detector tests.
    pub fn parse(code: &str) -> (Lrc<SourceMap>, Module) {
        let cm: Lrc<SourceMap> = Default::default();
        let fm = cm.new_source_file(
            FileName::Custom("src/app/settings/page.tsx".into()).into(),
            code.to_string(),
        );
        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });
        let mut parser = Parser::new(syntax, StringInput::from(&*fm), None);
        let module = parser.parse_module().unwrap();
        (cm, module)
    }
}

#[cfg(test)]
mod tests {
    use swc_common::{FileName, SourceMap, sync::Lrc};

    use super::*;

    #[test]
    fn test_is_ignored_by_text_and_pattern() {
        let cm: Lrc<SourceMap> = Default::default();
        let options = DetectorOptions {
            ignore_texts: HashSet::from(["Acme Inc".to_string()]),
            ignore_patterns: vec![Regex::new(r"^v\d+").unwrap()],
            ..Default::default()
        };
        let ctx = DetectorContext::new("src/app/page.tsx", &cm, &options);
        assert!(ctx.is_ignored("Acme Inc"));
        assert!(ctx.is_ignored("  Acme Inc "));
        assert!(ctx.is_ignored("v2 release"));
        assert!(!ctx.is_ignored("Welcome back"));
    }

    #[test]
    fn test_source_context_is_one_based() {
        let cm: Lrc<SourceMap> = Default::default();
        let fm = cm.new_source_file(
            FileName::Anon.into(),
            "let a = 1;\nlet b = \"Hi\";".to_string(),
        );
        let options = DetectorOptions::default();
        let ctx = DetectorContext::new("a.ts", &cm, &options);
        let pos = fm.start_pos + BytePos(19);
        let sc = ctx.source_context(pos);
        assert_eq!(sc.line(), 2);
        assert_eq!(sc.col(), 9);
        assert_eq!(sc.source_line, "let b = \"Hi\";");
    }
}
