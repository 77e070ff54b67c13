use swc_ecma_ast::{CallExpr, Expr, Lit};

use super::{DetectorContext, text_shape};
use crate::core::extract::{callee_ident, callee_member, unwrap_expr};
use crate::issues::{Issue, IssueKind};
use crate::utils::contains_alphabetic;

/// Bare calls that display their first argument.
pub const NOTIFICATION_FUNCTIONS: &[&str] = &[
    "toast",
    "alert",
    "notify",
    "showToast",
    "showNotification",
    "showError",
    "showSuccess",
];

/// Methods on an object named `toast`.
pub const TOAST_METHODS: &[&str] = &["success", "error", "warning", "info", "loading", "message"];

fn is_notification_call(call: &CallExpr) -> bool {
    if let Some(name) = callee_ident(call) {
        return NOTIFICATION_FUNCTIONS.contains(&name);
    }
    if let Some((Expr::Ident(obj), method)) = callee_member(call) {
        return obj.sym.as_str() == "toast" && TOAST_METHODS.contains(&method);
    }
    false
}

/// Flag a literal message passed to a toast or notification call.
pub fn detect_notification(node: &CallExpr, ctx: &DetectorContext) -> Option<Issue> {
    if !is_notification_call(node) {
        return None;
    }
    let arg = node.args.first()?;
    if arg.spread.is_some() {
        return None;
    }
    let (text, pos) = match unwrap_expr(&arg.expr) {
        Expr::Lit(Lit::Str(s)) => (s.value.as_str()?.to_string(), s.span.lo),
        Expr::Tpl(tpl) if tpl.exprs.is_empty() => {
            let cooked = tpl.quasis.first()?.cooked.as_ref()?.as_str()?;
            (cooked.to_string(), tpl.span.lo)
        }
        _ => return None,
    };
    let text = text.trim();
    if text.is_empty()
        || !contains_alphabetic(text)
        || text_shape::is_snake_case(text)
        || ctx.is_ignored(text)
    {
        return None;
    }

    Some(ctx.issue(
        IssueKind::NotificationMessage,
        pos,
        text,
        format!("Hardcoded notification message \"{}\"", text),
    ))
}

#[cfg(test)]
mod tests {
    use swc_ecma_ast::CallExpr;
    use swc_ecma_visit::{Visit, VisitWith};

    use super::*;
    use crate::core::detect::{DetectorOptions, test_support::parse};

    struct Collect<'a> {
        ctx: &'a DetectorContext<'a>,
        issues: Vec<Issue>,
    }

    impl Visit for Collect<'_> {
        fn visit_call_expr(&mut self, node: &CallExpr) {
            self.issues.extend(detect_notification(node, self.ctx));
            node.visit_children_with(self);
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
    fn test_flags_toast_calls() {
        let issues = detect(
            r#"toast("Saved!"); toast.error(`Could not save`); showSuccess("Profile updated");"#,
        );
        let texts: Vec<&str> = issues.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["Saved!", "Could not save", "Profile updated"]);
    }

    #[test]
    fn test_skips_error_codes_and_dynamic_messages() {
        let issues = detect(
            r#"toast.error("invalid_credentials"); toast(t("saved")); alert(`Hi ${name}`);"#,
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn test_ignores_other_receivers_and_methods() {
        let issues = detect(r#"logger.error("Request failed"); toast.dismiss("Later");"#);
        assert!(issues.is_empty());
    }
}
