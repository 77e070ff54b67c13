use swc_common::BytePos;
use swc_ecma_ast::JSXText;

use super::{DetectorContext, text_shape};
use crate::issues::{Issue, IssueKind};
use crate::utils::contains_alphabetic;

/// Flag user-facing text between JSX tags.
///
/// The caller is responsible for not descending into `<style>` and `<script>`.
pub fn detect_markup_text(node: &JSXText, ctx: &DetectorContext) -> Option<Issue> {
    let raw_value: &str = &node.value;
    let trimmed = raw_value.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Multi-line JSX text collapses to single spaces when rendered.
    let text = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");
    if !looks_like_markup_text(&text, ctx.min_length()) || ctx.is_ignored(&text) {
        return None;
    }

    let trim_start_offset = raw_value.len() - raw_value.trim_start().len();
    let pos = node.span.lo + BytePos(trim_start_offset as u32);
    Some(ctx.issue(
        IssueKind::MarkupText,
        pos,
        &text,
        format!("Hardcoded text \"{}\" in markup", text),
    ))
}

fn looks_like_markup_text(text: &str, min_length: usize) -> bool {
    text.chars().count() >= min_length
        && contains_alphabetic(text)
        && !text_shape::is_numeric_with_suffix(text)
        && !text_shape::is_all_caps_token(text)
        && !text_shape::is_url(text)
        && !text_shape::is_path_like(text)
        && !text_shape::is_kebab_token(text)
        && !text_shape::is_html_entity(text)
}

#[cfg(test)]
mod tests {
    use swc_ecma_ast::JSXText;
    use swc_ecma_visit::{Visit, VisitWith};

    use super::*;
    use crate::core::detect::{DetectorOptions, test_support::parse};

    struct Collect<'a> {
        ctx: &'a DetectorContext<'a>,
        issues: Vec<Issue>,
    }

    impl Visit for Collect<'_> {
        fn visit_jsx_text(&mut self, node: &JSXText) {
            self.issues.extend(detect_markup_text(node, self.ctx));
        }
    }

    fn detect(code: &str) -> Vec<Issue> {
        let (cm, module) = parse(code);
        let options = DetectorOptions::default();
        let ctx = DetectorContext::new("src/app/settings/page.tsx", &cm, &options);
        let mut collect = Collect {
            ctx: &ctx,
            issues: Vec::new(),
        };
        module.visit_with(&mut collect);
        collect.issues
    }

    #[test]
    fn test_flags_plain_text() {
        let issues = detect("const a = <div>  Welcome back </div>;");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].text, "Welcome back");
        assert_eq!(issues[0].kind, IssueKind::MarkupText);
        assert_eq!(issues[0].col(), 18);
        assert_eq!(
            issues[0].suggested_key.as_deref(),
            Some("settings.welcomeBack")
        );
    }

    #[test]
    fn test_collapses_multiline_text() {
        let issues = detect("const a = <p>\n  Read the\n  docs\n</p>;");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].text, "Read the docs");
        assert_eq!(issues[0].line(), 2);
    }

    #[test]
    fn test_skips_technical_text() {
        for text in [
            "", "   ", "--", "42px", "OK", "https://x.io", "/about", "btn-primary", "&nbsp;", "Hi",
        ] {
            let code = format!("const a = <span>{}</span>;", text);
            assert!(detect(&code).is_empty(), "should skip {:?}", text);
        }
    }
}
