use swc_common::BytePos;
use swc_ecma_ast::{Expr, JSXAttr, JSXAttrName, JSXAttrValue, JSXExpr, Lit};

use super::DetectorContext;
use crate::issues::{Issue, IssueKind};
use crate::utils::contains_alphabetic;

/// Attributes whose values are shown to users.
pub const USER_FACING_ATTRIBUTES: &[&str] = &["title", "alt", "placeholder", "aria-label", "label"];

/// Attributes never inspected, even if also listed as user-facing.
pub const TECHNICAL_ATTRIBUTES: &[&str] = &[
    "className",
    "class",
    "id",
    "href",
    "src",
    "key",
    "style",
    "type",
    "name",
    "role",
    "htmlFor",
    "rel",
    "target",
    "data-testid",
];

pub fn attr_name(node: &JSXAttr) -> String {
    match &node.name {
        JSXAttrName::Ident(ident) => ident.sym.to_string(),
        JSXAttrName::JSXNamespacedName(ns) => format!("{}:{}", ns.ns.sym, ns.name.sym),
    }
}

/// Flag a literal value on a user-facing attribute.
pub fn detect_markup_attr(node: &JSXAttr, ctx: &DetectorContext) -> Option<Issue> {
    let name = attr_name(node);
    if TECHNICAL_ATTRIBUTES.contains(&name.as_str())
        || !USER_FACING_ATTRIBUTES.contains(&name.as_str())
    {
        return None;
    }

    let (value, pos) = literal_value(node.value.as_ref()?)?;
    let text = value.trim();
    if text.is_empty()
        || !contains_alphabetic(text)
        || text.starts_with("http")
        || text.starts_with('/')
        || ctx.is_ignored(text)
    {
        return None;
    }

    Some(ctx.issue(
        IssueKind::MarkupAttribute,
        pos,
        text,
        format!("Hardcoded text \"{}\" in `{}` attribute", text, name),
    ))
}

/// `title="x"`, `title={"x"}` or `` title={`x`} ``.
fn literal_value(value: &JSXAttrValue) -> Option<(String, BytePos)> {
    match value {
        JSXAttrValue::Str(s) => Some((s.value.as_str()?.to_string(), s.span.lo)),
        JSXAttrValue::JSXExprContainer(container) => {
            let JSXExpr::Expr(expr) = &container.expr else {
                return None;
            };
            match &**expr {
                Expr::Lit(Lit::Str(s)) => Some((s.value.as_str()?.to_string(), s.span.lo)),
                Expr::Tpl(tpl) if tpl.exprs.is_empty() => {
                    let quasi = tpl.quasis.first()?;
                    let cooked = quasi.cooked.as_ref()?.as_str()?;
                    Some((cooked.to_string(), tpl.span.lo))
                }
                _ => None,
            }
        }
        _ => None,
    }
}
