//! Single-pass file analyzer.
//!
//! One `swc_ecma_visit::Visit` traversal per file that:
//! - tracks translator bindings per lexical scope,
//! - records translation keys and dynamic key patterns,
//! - runs the hardcoded-string detectors on the nodes they inspect.
//!
//! All state lives in the analyzer and is dropped with it; nothing crosses files.

use swc_common::SourceMap;
use swc_ecma_ast::{
    ArrowExpr, BlockStmt, BlockStmtOrExpr, CallExpr, Callee, CatchClause, CondExpr, Expr,
    ForInStmt, ForOfStmt, ForStmt, Function, JSXAttr, JSXElement, JSXElementName, JSXText,
    MemberProp, Module, ObjectPatProp, Pat, PropName, SwitchStmt, VarDeclarator,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::detect::{
    DetectorContext, detect_locale_ternary, detect_markup_attr, detect_markup_text,
    detect_notification, detect_string_variable,
};
use crate::core::extract::{
    BindingContext, GLOBAL_TRANSLATORS, KeyArgument, analyze_key_argument, callee_ident,
    callee_member, factory_binding, is_modifier_method, matches_translator_shape, unwrap_expr,
};
use crate::core::scan::{FileScanResult, ScanOptions};
use crate::core::{DynamicPattern, NamespaceBinding, ScanStats};
use crate::issues::Issue;

/// Elements whose children are code, not display text.
const RAW_TEXT_ELEMENTS: &[&str] = &["style", "script"];

/// Function value receiving a translator through one of its parameters.
enum SeededCallback<'n> {
    Arrow(&'n ArrowExpr),
    Function(&'n Function),
}

impl<'n> SeededCallback<'n> {
    fn from_expr(expr: &'n Expr) -> Option<Self> {
        match unwrap_expr(expr) {
            Expr::Arrow(arrow) => Some(Self::Arrow(arrow)),
            Expr::Fn(fn_expr) => Some(Self::Function(&fn_expr.function)),
            _ => None,
        }
    }
}

pub struct FileAnalyzer<'a> {
    detector: DetectorContext<'a>,
    options: &'a ScanOptions,

    /// Translator bindings visible at the current node.
    bindings: BindingContext,

    issues: Vec<Issue>,
    patterns: Vec<DynamicPattern>,
    stats: ScanStats,
}

impl<'a> FileAnalyzer<'a> {
    pub fn new(file_path: &'a str, source_map: &'a SourceMap, options: &'a ScanOptions) -> Self {
        Self {
            detector: DetectorContext::new(file_path, source_map, &options.detector),
            options,
            bindings: BindingContext::new(),
            issues: Vec::new(),
            patterns: Vec::new(),
            stats: ScanStats::default(),
        }
    }

    /// Walk `module` and return everything found in it.
    pub fn analyze(mut self, module: &Module) -> FileScanResult {
        self.visit_module(module);
        let mut issues = self.issues;
        issues.sort();
        FileScanResult {
            issues,
            stats: self.stats,
            patterns: self.patterns,
        }
    }

    // ============================================================
    // Scopes
    // ============================================================

    /// Run `f` inside a child scope, restoring the current scope afterwards.
    fn with_scope<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.bindings = std::mem::take(&mut self.bindings).child();
        f(self);
        self.bindings = std::mem::take(&mut self.bindings).into_parent();
    }

    /// Resolve an identifier used as a callee.
    ///
    /// Resolution order: scoped binding, global translator names, then the name-shape
    /// fallback. `None` means the identifier is not translator-like at all.
    fn resolve_translator(&self, name: &str) -> Option<NamespaceBinding> {
        if let Some(binding) = self.bindings.get(name) {
            return Some(binding.clone());
        }
        if self.is_global_translator(name) {
            return Some(NamespaceBinding::RootScoped);
        }
        if matches_translator_shape(name) {
            return Some(if self.options.name_shape_fallback {
                NamespaceBinding::UnknownScoped
            } else {
                NamespaceBinding::Unbound
            });
        }
        None
    }

    fn is_global_translator(&self, name: &str) -> bool {
        GLOBAL_TRANSLATORS.contains(&name)
            || self.options.translator_functions.iter().any(|f| f == name)
    }

    /// Translator binding produced by `expr`, if any: a factory call or a translator identifier.
    fn translator_value(&mut self, expr: &Expr) -> Option<NamespaceBinding> {
        if let Some(binding) = factory_binding(expr) {
            if binding == NamespaceBinding::UnknownScoped {
                self.stats.dynamic_namespaces += 1;
            }
            return Some(binding);
        }
        if let Expr::Ident(ident) = unwrap_expr(expr) {
            return self
                .resolve_translator(ident.sym.as_str())
                .filter(NamespaceBinding::is_translator);
        }
        None
    }

    /// Mark `name` as a non-translator if it hides a declared or global translator.
    ///
    /// Names that only pass the name-shape test are left alone so that translator props
    /// such as `function Card({ t })` keep resolving through the fallback.
    fn shadow(&mut self, name: &str) {
        let hides_translator = self
            .bindings
            .get(name)
            .is_some_and(NamespaceBinding::is_translator)
            || self.is_global_translator(name);
        if hides_translator {
            self.bindings.insert(name, NamespaceBinding::Unbound);
        }
    }

    fn shadow_pat(&mut self, pat: &Pat) {
        let mut names = Vec::new();
        collect_pat_names(pat, &mut names);
        for name in names {
            self.shadow(&name);
        }
    }

    /// Bind function parameters; `seeds[i]` is the translator passed at position `i`.
    fn bind_params<'p>(
        &mut self,
        params: impl Iterator<Item = &'p Pat>,
        seeds: &[Option<NamespaceBinding>],
    ) {
        for (idx, pat) in params.enumerate() {
            match (pat, seeds.get(idx).cloned().flatten()) {
                (Pat::Ident(ident), Some(binding)) => {
                    self.bindings.insert(ident.id.sym.as_str(), binding);
                }
                _ => self.shadow_pat(pat),
            }
        }
    }

    fn visit_arrow_seeded(&mut self, node: &ArrowExpr, seeds: &[Option<NamespaceBinding>]) {
        self.with_scope(|this| {
            this.bind_params(node.params.iter(), seeds);
            for param in &node.params {
                param.visit_with(this);
            }
            match &*node.body {
                BlockStmtOrExpr::BlockStmt(block) => block.visit_children_with(this),
                BlockStmtOrExpr::Expr(expr) => expr.visit_with(this),
            }
        });
    }

    fn visit_function_seeded(&mut self, node: &Function, seeds: &[Option<NamespaceBinding>]) {
        self.with_scope(|this| {
            this.bind_params(node.params.iter().map(|p| &p.pat), seeds);
            for param in &node.params {
                param.visit_with(this);
            }
            if let Some(body) = &node.body {
                body.visit_children_with(this);
            }
        });
    }

    fn visit_seeded(&mut self, callback: SeededCallback, seeds: &[Option<NamespaceBinding>]) {
        match callback {
            SeededCallback::Arrow(arrow) => self.visit_arrow_seeded(arrow, seeds),
            SeededCallback::Function(function) => self.visit_function_seeded(function, seeds),
        }
    }

    // ============================================================
    // Binding registration
    // ============================================================

    fn register_declarator(&mut self, node: &VarDeclarator) {
        let Some(init) = node.init.as_deref() else {
            self.shadow_pat(&node.name);
            return;
        };

        if factory_binding(init).is_some() {
            let Some(binding) = self.translator_value(init) else {
                return;
            };
            match &node.name {
                // const t = useTranslations("ns")
                Pat::Ident(ident) => self.bindings.insert(ident.id.sym.as_str(), binding),
                // const { t } = useTranslation("ns") / const { t: translate } = ...
                Pat::Object(obj) => {
                    for prop in &obj.props {
                        match prop {
                            ObjectPatProp::Assign(assign) if assign.key.sym.as_str() == "t" => {
                                self.bindings.insert("t", binding.clone());
                            }
                            ObjectPatProp::KeyValue(kv) => {
                                let is_t = matches!(&kv.key, PropName::Ident(k) if k.sym.as_str() == "t");
                                match (&*kv.value, is_t) {
                                    (Pat::Ident(alias), true) => {
                                        self.bindings.insert(alias.id.sym.as_str(), binding.clone());
                                    }
                                    (other, _) => self.shadow_pat(other),
                                }
                            }
                            ObjectPatProp::Assign(assign) => self.shadow(assign.key.sym.as_str()),
                            ObjectPatProp::Rest(rest) => self.shadow_pat(&rest.arg),
                        }
                    }
                }
                other => self.shadow_pat(other),
            }
            return;
        }

        // const translate = t
        if let Pat::Ident(ident) = &node.name
            && matches!(unwrap_expr(init), Expr::Ident(_))
            && let Some(binding) = self.translator_value(init)
        {
            self.bindings.insert(ident.id.sym.as_str(), binding);
            return;
        }

        self.shadow_pat(&node.name);
    }

    // ============================================================
    // Translation calls
    // ============================================================

    /// Translator binding for a call's callee: `t(...)` or `t.rich(...)`.
    fn translation_callee(&self, call: &CallExpr) -> Option<NamespaceBinding> {
        if let Some(name) = callee_ident(call) {
            return self.resolve_translator(name);
        }
        if let Some((Expr::Ident(obj), method)) = callee_member(call)
            && is_modifier_method(method)
        {
            return self.resolve_translator(obj.sym.as_str());
        }
        None
    }

    fn record_translation_call(&mut self, call: &CallExpr, binding: NamespaceBinding) {
        if !binding.is_translator() {
            self.stats.unbound_translator_calls += 1;
            return;
        }
        if binding == NamespaceBinding::RootScoped {
            self.stats.root_scoped_calls += 1;
        }

        let Some(arg) = call.args.first() else {
            return;
        };
        if arg.spread.is_some() {
            self.stats.dynamic_keys += 1;
            return;
        }

        match analyze_key_argument(&arg.expr) {
            KeyArgument::Literal(key) => {
                let context = self.detector.source_context(call.span.lo);
                self.issues
                    .push(Issue::translation_key(context, key, &binding));
            }
            KeyArgument::Pattern(raw_pattern) => {
                self.stats.dynamic_keys += 1;
                let context = self.detector.source_context(call.span.lo);
                let issue = Issue::dynamic_key(context, raw_pattern, &binding);
                if let Some(pattern) = &issue.pattern {
                    self.patterns.push(DynamicPattern::new(
                        pattern.clone(),
                        issue.context.location.clone(),
                        binding.namespace().map(str::to_string),
                        binding.kind(),
                    ));
                }
                self.issues.push(issue);
            }
            KeyArgument::Unresolvable => {
                self.stats.dynamic_keys += 1;
            }
        }
    }

    /// `((t) => ...)(useTranslations("ns"))` and `getTranslations("ns").then((t) => ...)`.
    ///
    /// Returns true when the call was fully visited here.
    fn visit_translator_callback(&mut self, node: &CallExpr) -> bool {
        let Callee::Expr(callee) = &node.callee else {
            return false;
        };

        if let Some(callback) = SeededCallback::from_expr(callee) {
            let seeds: Vec<Option<NamespaceBinding>> = node
                .args
                .iter()
                .map(|arg| {
                    if arg.spread.is_some() {
                        None
                    } else {
                        self.translator_value(&arg.expr)
                    }
                })
                .collect();
            if seeds.iter().all(Option::is_none) {
                return false;
            }
            for arg in &node.args {
                arg.visit_with(self);
            }
            self.visit_seeded(callback, &seeds);
            return true;
        }

        if let Expr::Member(member) = unwrap_expr(callee)
            && matches!(&member.prop, MemberProp::Ident(p) if p.sym.as_str() == "then")
            && factory_binding(&member.obj).is_some()
            && let Some(first) = node.args.first()
            && first.spread.is_none()
            && let Some(callback) = SeededCallback::from_expr(&first.expr)
        {
            member.obj.visit_with(self);
            let seed = self.translator_value(&member.obj);
            self.visit_seeded(callback, &[seed]);
            for arg in node.args.iter().skip(1) {
                arg.visit_with(self);
            }
            return true;
        }

        false
    }
}

impl<'a> Visit for FileAnalyzer<'a> {
    fn visit_function(&mut self, node: &Function) {
        self.visit_function_seeded(node, &[]);
    }

    fn visit_arrow_expr(&mut self, node: &ArrowExpr) {
        self.visit_arrow_seeded(node, &[]);
    }

    fn visit_block_stmt(&mut self, node: &BlockStmt) {
        self.with_scope(|this| node.visit_children_with(this));
    }

    fn visit_for_stmt(&mut self, node: &ForStmt) {
        self.with_scope(|this| node.visit_children_with(this));
    }

    fn visit_for_of_stmt(&mut self, node: &ForOfStmt) {
        self.with_scope(|this| node.visit_children_with(this));
    }

    fn visit_for_in_stmt(&mut self, node: &ForInStmt) {
        self.with_scope(|this| node.visit_children_with(this));
    }

    fn visit_switch_stmt(&mut self, node: &SwitchStmt) {
        node.discriminant.visit_with(self);
        self.with_scope(|this| {
            for case in &node.cases {
                case.visit_with(this);
            }
        });
    }

    fn visit_catch_clause(&mut self, node: &CatchClause) {
        self.with_scope(|this| {
            if let Some(param) = &node.param {
                this.shadow_pat(param);
                param.visit_with(this);
            }
            node.body.visit_with(this);
        });
    }

    fn visit_var_declarator(&mut self, node: &VarDeclarator) {
        node.name.visit_with(self);
        if let Some(init) = &node.init {
            init.visit_with(self);
        }
        self.register_declarator(node);
        if let Some(issue) = detect_string_variable(node, &self.detector) {
            self.issues.push(issue);
        }
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Some(issue) = detect_notification(node, &self.detector) {
            self.issues.push(issue);
        }
        if let Some(binding) = self.translation_callee(node) {
            self.record_translation_call(node, binding);
        }
        if self.visit_translator_callback(node) {
            return;
        }
        node.visit_children_with(self);
    }

    fn visit_cond_expr(&mut self, node: &CondExpr) {
        if let Some(issue) = detect_locale_ternary(node, &self.detector) {
            self.issues.push(issue);
        }
        node.visit_children_with(self);
    }

    fn visit_jsx_element(&mut self, node: &JSXElement) {
        node.opening.visit_with(self);

        let is_raw_text = match &node.opening.name {
            JSXElementName::Ident(ident) => RAW_TEXT_ELEMENTS.contains(&ident.sym.as_str()),
            _ => false,
        };
        if !is_raw_text {
            for child in &node.children {
                child.visit_with(self);
            }
        }

        if let Some(closing) = &node.closing {
            closing.visit_with(self);
        }
    }

    fn visit_jsx_text(&mut self, node: &JSXText) {
        if let Some(issue) = detect_markup_text(node, &self.detector) {
            self.issues.push(issue);
        }
    }

    fn visit_jsx_attr(&mut self, node: &JSXAttr) {
        if let Some(issue) = detect_markup_attr(node, &self.detector) {
            self.issues.push(issue);
        }
        node.visit_children_with(self);
    }
}

/// Identifiers bound by a declaration or parameter pattern.
fn collect_pat_names(pat: &Pat, out: &mut Vec<String>) {
    match pat {
        Pat::Ident(ident) => out.push(ident.id.sym.to_string()),
        Pat::Array(arr) => {
            for elem in arr.elems.iter().flatten() {
                collect_pat_names(elem, out);
            }
        }
        Pat::Object(obj) => {
            for prop in &obj.props {
                match prop {
                    ObjectPatProp::KeyValue(kv) => collect_pat_names(&kv.value, out),
                    ObjectPatProp::Assign(assign) => out.push(assign.key.sym.to_string()),
                    ObjectPatProp::Rest(rest) => collect_pat_names(&rest.arg, out),
                }
            }
        }
        Pat::Assign(assign) => collect_pat_names(&assign.left, out),
        Pat::Rest(rest) => collect_pat_names(&rest.arg, out),
        Pat::Expr(_) | Pat::Invalid(_) => {}
    }
}
