use swc_ecma_ast::{BinaryOp, CondExpr, Expr, Lit, MemberProp, OptChainBase};

use super::DetectorContext;
use crate::core::extract::unwrap_expr;
use crate::issues::{Issue, IssueKind};

/// Flag `locale === "en" ? "Hello" : "Hallo"`.
///
/// Branching on the active locale to pick display text bypasses the translation layer.
/// Empty-string branches are common in URL prefixes and do not count.
pub fn detect_locale_ternary(node: &CondExpr, ctx: &DetectorContext) -> Option<Issue> {
    let Expr::Bin(test) = unwrap_expr(&node.test) else {
        return None;
    };
    if !matches!(
        test.op,
        BinaryOp::EqEq | BinaryOp::EqEqEq | BinaryOp::NotEq | BinaryOp::NotEqEq
    ) {
        return None;
    }
    if !is_locale_ref(&test.left) && !is_locale_ref(&test.right) {
        return None;
    }

    let text = [&node.cons, &node.alt]
        .into_iter()
        .filter_map(|branch| branch_text(branch))
        .find(|text| !text.trim().is_empty())?;
    if ctx.is_ignored(&text) {
        return None;
    }

    Some(ctx.issue(
        IssueKind::LocaleTernary,
        node.span.lo,
        &text,
        format!(
            "Locale-dependent text \"{}\" selected with a ternary; use a translation key",
            text
        ),
    ))
}

fn branch_text(expr: &Expr) -> Option<String> {
    match unwrap_expr(expr) {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(str::to_string),
        _ => None,
    }
}

/// `locale`, `router.locale`, `params.locale`, `i18n?.locale`
fn is_locale_ref(expr: &Expr) -> bool {
    match unwrap_expr(expr) {
        Expr::Ident(ident) => ident.sym.as_str() == "locale",
        Expr::Member(member) => {
            matches!(&member.prop, MemberProp::Ident(prop) if prop.sym.as_str() == "locale")
        }
        Expr::OptChain(opt) => match &*opt.base {
            OptChainBase::Member(member) => {
                matches!(&member.prop, MemberProp::Ident(prop) if prop.sym.as_str() == "locale")
            }
            OptChainBase::Call(_) => false,
        },
        _ => false,
    }
}
