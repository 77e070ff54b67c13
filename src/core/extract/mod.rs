//! Per-file extraction: translator bindings, translation calls and detector dispatch.
//!
//! - `binding_context`: persistent scope chain of translator bindings
//! - `translation_call`: factory/call shapes and key argument analysis
//! - `file_analyzer`: the single-pass AST visitor tying it together

pub mod binding_context;
pub mod file_analyzer;
pub mod translation_call;

pub use binding_context::BindingContext;
pub use file_analyzer::FileAnalyzer;
pub use translation_call::{
    GLOBAL_TRANSLATORS, KeyArgument, MODIFIER_METHODS, TRANSLATOR_FACTORIES, analyze_key_argument,
    callee_ident, callee_member, factory_binding, is_modifier_method, is_translator_factory,
    matches_translator_shape, static_string, unwrap_expr,
};
