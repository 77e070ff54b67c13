use swc_ecma_ast::{Expr, Lit, Pat, VarDeclarator};

use super::{DetectorContext, text_shape};
use crate::core::extract::unwrap_expr;
use crate::issues::{Issue, IssueKind};
use crate::utils::contains_alphabetic;

const MIN_VARIABLE_TEXT_LENGTH: usize = 5;

/// Variable names whose values are never display text.
pub const TECHNICAL_NAMES: &[&str] = &[
    "id",
    "key",
    "type",
    "className",
    "variant",
    "size",
    "color",
    "href",
    "src",
    "url",
    "path",
    "method",
    "mode",
    "status",
];

pub const TECHNICAL_SUFFIXES: &[&str] = &["Id", "Key", "Class", "Style", "Url", "Path", "Type"];

/// Capitalized single words that usually name a variant or state, not a message.
const UI_WORDS: &[&str] = &[
    "Primary",
    "Secondary",
    "Tertiary",
    "Default",
    "Disabled",
    "Enabled",
    "Loading",
    "Active",
    "Inactive",
    "Pending",
    "Success",
    "Error",
    "Warning",
    "Danger",
    "Destructive",
    "Outline",
    "Ghost",
    "Small",
    "Medium",
    "Large",
    "Center",
    "Bottom",
    "Horizontal",
    "Vertical",
    "Light",
    "System",
    "Undefined",
];

fn is_technical_name(name: &str) -> bool {
    TECHNICAL_NAMES.contains(&name) || TECHNICAL_SUFFIXES.iter().any(|s| name.ends_with(s))
}

fn looks_user_facing(text: &str) -> bool {
    if text.chars().count() < MIN_VARIABLE_TEXT_LENGTH || !contains_alphabetic(text) {
        return false;
    }
    if text_shape::is_screaming_case(text)
        || text_shape::is_snake_case(text)
        || text_shape::is_css_like(text)
        || text_shape::is_url(text)
        || text_shape::is_path_like(text)
        || text_shape::is_numeric_with_suffix(text)
        || text_shape::is_color(text)
    {
        return false;
    }
    let has_whitespace = text.chars().any(char::is_whitespace);
    let starts_upper = text.chars().next().is_some_and(char::is_uppercase);
    if !has_whitespace && (!starts_upper || UI_WORDS.contains(&text)) {
        return false;
    }
    true
}

/// Flag `const label = "Save changes"`.
pub fn detect_string_variable(node: &VarDeclarator, ctx: &DetectorContext) -> Option<Issue> {
    let Pat::Ident(binding) = &node.name else {
        return None;
    };
    let name = binding.id.sym.as_str();
    if is_technical_name(name) {
        return None;
    }
    let Expr::Lit(Lit::Str(s)) = unwrap_expr(node.init.as_deref()?) else {
        return None;
    };
    let value = s.value.as_str()?;
    let text = value.trim();
    if !looks_user_facing(text) || ctx.is_ignored(text) {
        return None;
    }

    Some(ctx.issue(
        IssueKind::StringVariable,
        s.span.lo,
        text,
        format!("Hardcoded text \"{}\" assigned to `{}`", text, name),
    ))
}
