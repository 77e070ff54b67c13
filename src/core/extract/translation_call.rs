//! Translation call shapes and key argument analysis.
//!
//! Pure functions over swc AST nodes. The `FileAnalyzer` uses these to decide whether a
//! call creates a translator, whether a call is a translation invocation, and what key the
//! invocation refers to.

use swc_ecma_ast::{
    CallExpr, Callee, Expr, Lit, MemberProp, OptChainBase, Prop, PropName, PropOrSpread, Tpl,
};

use crate::core::NamespaceBinding;

/// Calls that return a translator function.
pub const TRANSLATOR_FACTORIES: &[&str] = &[
    "useTranslations",
    "getTranslations",
    "useTranslation",
    "getTranslation",
    "createTranslator",
    "getFixedT",
];

/// Globally available translator functions (always root-scoped).
pub const GLOBAL_TRANSLATORS: &[&str] = &["$t", "__", "translate"];

/// Methods that may be called on a translator: `t.rich("key")`.
pub const MODIFIER_METHODS: &[&str] = &["raw", "rich", "markup", "has"];

/// Placeholder used when an interpolated expression has no simple path.
pub const GENERIC_PLACEHOLDER: &str = "${expr}";

pub fn is_translator_factory(name: &str) -> bool {
    TRANSLATOR_FACTORIES.contains(&name)
}

pub fn is_modifier_method(name: &str) -> bool {
    MODIFIER_METHODS.contains(&name)
}

/// Name-shape fallback: `t`, or `t` followed by an uppercase letter (`tCommon`).
///
/// ```
/// use intlcheck::core::extract::matches_translator_shape;
///
/// assert!(matches_translator_shape("t"));
/// assert!(matches_translator_shape("tAuth"));
/// assert!(!matches_translator_shape("tab"));
/// assert!(!matches_translator_shape("T"));
/// ```
pub fn matches_translator_shape(name: &str) -> bool {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some('t'), None) => true,
        (Some('t'), Some(second)) => second.is_ascii_uppercase(),
        _ => false,
    }
}

/// Strip TypeScript wrappers, parentheses and `await`.
pub fn unwrap_expr(expr: &Expr) -> &Expr {
    match expr {
        Expr::TsAs(ts_as) => unwrap_expr(&ts_as.expr),
        Expr::TsConstAssertion(ts_const) => unwrap_expr(&ts_const.expr),
        Expr::TsSatisfies(ts_sat) => unwrap_expr(&ts_sat.expr),
        Expr::TsNonNull(ts_nn) => unwrap_expr(&ts_nn.expr),
        Expr::Paren(paren) => unwrap_expr(&paren.expr),
        Expr::Await(await_expr) => unwrap_expr(&await_expr.arg),
        _ => expr,
    }
}

/// Name of the callee when it is a bare identifier.
pub fn callee_ident(call: &CallExpr) -> Option<&str> {
    if let Callee::Expr(expr) = &call.callee
        && let Expr::Ident(ident) = unwrap_expr(expr)
    {
        return Some(ident.sym.as_str());
    }
    None
}

/// `(object, method)` when the callee is `object.method`.
pub fn callee_member(call: &CallExpr) -> Option<(&Expr, &str)> {
    if let Callee::Expr(expr) = &call.callee
        && let Expr::Member(member) = unwrap_expr(expr)
        && let MemberProp::Ident(prop) = &member.prop
    {
        return Some((unwrap_expr(&member.obj), prop.sym.as_str()));
    }
    None
}

/// If `expr` is a translator factory call, the binding it produces.
pub fn factory_binding(expr: &Expr) -> Option<NamespaceBinding> {
    let Expr::Call(call) = unwrap_expr(expr) else {
        return None;
    };
    let name = callee_ident(call)?;
    if !is_translator_factory(name) {
        return None;
    }
    Some(match call.args.first() {
        None => NamespaceBinding::RootScoped,
        Some(arg) if arg.spread.is_some() => NamespaceBinding::UnknownScoped,
        Some(arg) => namespace_binding(&arg.expr),
    })
}

/// Classify a factory's namespace argument.
fn namespace_binding(expr: &Expr) -> NamespaceBinding {
    match unwrap_expr(expr) {
        Expr::Object(obj) => {
            for prop in &obj.props {
                let PropOrSpread::Prop(prop) = prop else {
                    continue;
                };
                match &**prop {
                    Prop::KeyValue(kv) if prop_name_is(&kv.key, "namespace") => {
                        return namespace_binding(&kv.value);
                    }
                    Prop::Shorthand(ident) if ident.sym.as_str() == "namespace" => {
                        return NamespaceBinding::UnknownScoped;
                    }
                    _ => {}
                }
            }
            // `getTranslations({ locale })`
            NamespaceBinding::RootScoped
        }
        Expr::Array(arr) => match arr.elems.first() {
            Some(Some(first)) if first.spread.is_none() => namespace_binding(&first.expr),
            _ => NamespaceBinding::UnknownScoped,
        },
        other => match static_string(other) {
            Some(ns) if ns.is_empty() => NamespaceBinding::RootScoped,
            Some(ns) => NamespaceBinding::BoundScoped(ns),
            None => NamespaceBinding::UnknownScoped,
        },
    }
}

fn prop_name_is(name: &PropName, expected: &str) -> bool {
    match name {
        PropName::Ident(ident) => ident.sym.as_str() == expected,
        PropName::Str(s) => s.value.as_str() == Some(expected),
        _ => false,
    }
}

/// Value of a string literal or an interpolation-free template.
pub fn static_string(expr: &Expr) -> Option<String> {
    match unwrap_expr(expr) {
        Expr::Lit(Lit::Str(s)) => s.value.as_str().map(str::to_string),
        Expr::Tpl(tpl) if tpl.exprs.is_empty() => Some(tpl_quasi_text(tpl, 0)),
        _ => None,
    }
}

fn tpl_quasi_text(tpl: &Tpl, idx: usize) -> String {
    tpl.quasis
        .get(idx)
        .map(|q| match q.cooked.as_ref().and_then(|c| c.as_str()) {
            Some(cooked) => cooked.to_string(),
            None => q.raw.to_string(),
        })
        .unwrap_or_default()
}

/// Result of analyzing a translation call's key argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyArgument {
    /// `t("home.title")`
    Literal(String),
    /// `` t(`plans.${planKey}.name`) `` or `t("plans." + planKey)`
    Pattern(String),
    /// `t(keys[i])`, `t(getKey())`, `t(key)`
    Unresolvable,
}

/// Analyze the first argument of a translation call.
pub fn analyze_key_argument(expr: &Expr) -> KeyArgument {
    let expr = unwrap_expr(expr);
    if let Some(literal) = static_string(expr) {
        return KeyArgument::Literal(literal);
    }
    match expr {
        Expr::Tpl(tpl) => {
            let mut pattern = String::new();
            for (idx, quasi_expr) in tpl.exprs.iter().enumerate() {
                pattern.push_str(&tpl_quasi_text(tpl, idx));
                pattern.push_str(&placeholder_for(quasi_expr));
            }
            pattern.push_str(&tpl_quasi_text(tpl, tpl.exprs.len()));
            KeyArgument::Pattern(pattern)
        }
        Expr::Bin(bin) if bin.op == swc_ecma_ast::BinaryOp::Add => {
            let mut segments = Vec::new();
            flatten_concat(expr, &mut segments);
            let has_literal = segments.iter().any(|s| matches!(s, Segment::Literal(_)));
            let has_expr = segments.iter().any(|s| matches!(s, Segment::Placeholder(_)));
            if !has_literal {
                return KeyArgument::Unresolvable;
            }
            let text: String = segments
                .into_iter()
                .map(|s| match s {
                    Segment::Literal(text) | Segment::Placeholder(text) => text,
                })
                .collect();
            if has_expr {
                KeyArgument::Pattern(text)
            } else {
                KeyArgument::Literal(text)
            }
        }
        _ => KeyArgument::Unresolvable,
    }
}

enum Segment {
    Literal(String),
    Placeholder(String),
}

fn flatten_concat(expr: &Expr, out: &mut Vec<Segment>) {
    let expr = unwrap_expr(expr);
    match expr {
        Expr::Bin(bin) if bin.op == swc_ecma_ast::BinaryOp::Add => {
            flatten_concat(&bin.left, out);
            flatten_concat(&bin.right, out);
        }
        _ => match static_string(expr) {
            Some(text) => out.push(Segment::Literal(text)),
            None => out.push(Segment::Placeholder(placeholder_for(expr))),
        },
    }
}

/// `${path}` for identifiers and dotted property paths, else the generic placeholder.
pub fn placeholder_for(expr: &Expr) -> String {
    match expr_path(expr) {
        Some(path) => format!("${{{}}}", path),
        None => GENERIC_PLACEHOLDER.to_string(),
    }
}

/// Dotted source path of an identifier or non-computed member chain.
pub fn expr_path(expr: &Expr) -> Option<String> {
    match unwrap_expr(expr) {
        Expr::Ident(ident) => Some(ident.sym.to_string()),
        Expr::This(_) => Some("this".to_string()),
        Expr::Member(member) => match &member.prop {
            MemberProp::Ident(prop) => {
                let obj = expr_path(&member.obj)?;
                Some(format!("{}.{}", obj, prop.sym))
            }
            _ => None,
        },
        Expr::OptChain(opt) => match &*opt.base {
            OptChainBase::Member(member) => match &member.prop {
                MemberProp::Ident(prop) => {
                    let obj = expr_path(&member.obj)?;
                    Some(format!("{}.{}", obj, prop.sym))
                }
                _ => None,
            },
            OptChainBase::Call(_) => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use swc_common::{FileName, SourceMap, sync::Lrc};
    use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

    use super::*;

    fn parse_expr(code: &str) -> Box<Expr> {
        let cm: Lrc<SourceMap> = Default::default();
        let fm = cm.new_source_file(FileName::Anon.into(), code.to_string());
        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });
        let mut parser = Parser::new(syntax, StringInput::from(&*fm), None);
        parser.parse_expr().unwrap()
    }

    #[test]
    fn test_factory_with_literal_namespace() {
        let expr = parse_expr(r#"useTranslations("home")"#);
        assert_eq!(
            factory_binding(&expr),
            Some(NamespaceBinding::BoundScoped("home".to_string()))
        );
    }

    #[test]
    fn test_factory_without_namespace() {
        let expr = parse_expr("useTranslations()");
        assert_eq!(factory_binding(&expr), Some(NamespaceBinding::RootScoped));
    }

    #[test]
    fn test_factory_with_variable_namespace() {
        let expr = parse_expr("useTranslations(ns)");
        assert_eq!(factory_binding(&expr), Some(NamespaceBinding::UnknownScoped));
    }

    #[test]
    fn test_factory_with_object_namespace() {
        let expr = parse_expr(r#"await getTranslations({ locale, namespace: "auth" })"#);
        assert_eq!(
            factory_binding(&expr),
            Some(NamespaceBinding::BoundScoped("auth".to_string()))
        );
        let expr = parse_expr("getTranslations({ locale })");
        assert_eq!(factory_binding(&expr), Some(NamespaceBinding::RootScoped));
    }

    #[test]
    fn test_non_factory_call() {
        let expr = parse_expr(r#"useState("home")"#);
        assert_eq!(factory_binding(&expr), None);
    }

    #[test]
    fn test_literal_key() {
        let expr = parse_expr(r#""home.title""#);
        assert_eq!(
            analyze_key_argument(&expr),
            KeyArgument::Literal("home.title".to_string())
        );
        let expr = parse_expr("`home.title`");
        assert_eq!(
            analyze_key_argument(&expr),
            KeyArgument::Literal("home.title".to_string())
        );
    }

    #[test]
    fn test_template_key_with_identifier() {
        let expr = parse_expr("`plans.${planKey}.name`");
        assert_eq!(
            analyze_key_argument(&expr),
            KeyArgument::Pattern("plans.${planKey}.name".to_string())
        );
    }

    #[test]
    fn test_template_key_with_member_path() {
        let expr = parse_expr("`status.${order.state}`");
        assert_eq!(
            analyze_key_argument(&expr),
            KeyArgument::Pattern("status.${order.state}".to_string())
        );
    }

    #[test]
    fn test_template_key_with_call_uses_generic_placeholder() {
        let expr = parse_expr("`status.${getState()}`");
        assert_eq!(
            analyze_key_argument(&expr),
            KeyArgument::Pattern("status.${expr}".to_string())
        );
    }

    #[test]
    fn test_concatenated_key() {
        let expr = parse_expr(r#""errors." + code + ".title""#);
        assert_eq!(
            analyze_key_argument(&expr),
            KeyArgument::Pattern("errors.${code}.title".to_string())
        );
    }

    #[test]
    fn test_concatenated_literals_are_literal() {
        let expr = parse_expr(r#""errors." + "network""#);
        assert_eq!(
            analyze_key_argument(&expr),
            KeyArgument::Literal("errors.network".to_string())
        );
    }

    #[test]
    fn test_unresolvable_keys() {
        for code in ["key", "keys[i]", "getKey()", "prefix + suffix"] {
            let expr = parse_expr(code);
            assert_eq!(analyze_key_argument(&expr), KeyArgument::Unresolvable, "{code}");
        }
    }

    #[test]
    fn test_translator_shape() {
        assert!(matches_translator_shape("tFooter"));
        assert!(!matches_translator_shape("toast"));
        assert!(!matches_translator_shape("x"));
        assert!(!matches_translator_shape(""));
    }
}
