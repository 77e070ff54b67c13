//! Translation function binding context.
//!
//! Tracks translator bindings (e.g., `const t = useTranslations("home")`) per lexical scope.
//!
//! A `BindingContext` is a value: entering a scope produces a child context that links
//! to a frozen snapshot of its parent, and leaving the scope simply drops the child and
//! restores the saved parent value. Bindings declared in one subtree can therefore
//! never leak into a sibling subtree.

use std::{collections::HashMap, rc::Rc};

use crate::core::NamespaceBinding;

/// Scoped translator bindings, innermost frame first.
///
/// # Example
/// ```ignore
/// const t = useTranslations("home");      // root frame: t -> home
/// function Footer() {                     // child frame
///     const t = useTranslations("footer"); // child frame: t -> footer
///     t("title");                          // resolves to footer.title
/// }                                        // child dropped
/// t("title");                              // resolves to home.title
/// ```
#[derive(Debug, Clone, Default)]
pub struct BindingContext {
    local: HashMap<String, NamespaceBinding>,
    parent: Option<Rc<BindingContext>>,
}

impl BindingContext {
    /// Create an empty file-level context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a nested scope whose lookups fall back to `self`.
    pub fn child(self) -> Self {
        Self {
            local: HashMap::new(),
            parent: Some(Rc::new(self)),
        }
    }

    /// Leave the current scope, returning the enclosing one.
    ///
    /// A file-level context has no parent and yields an empty context.
    pub fn into_parent(self) -> Self {
        match self.parent {
            Some(parent) => Rc::try_unwrap(parent).unwrap_or_else(|shared| (*shared).clone()),
            None => Self::default(),
        }
    }

    /// Declare `name` in the current (innermost) scope.
    pub fn insert(&mut self, name: impl Into<String>, binding: NamespaceBinding) {
        self.local.insert(name.into(), binding);
    }

    /// Innermost binding for `name`.
    pub fn get(&self, name: &str) -> Option<&NamespaceBinding> {
        let mut frame = self;
        loop {
            if let Some(binding) = frame.local.get(name) {
                return Some(binding);
            }
            frame = frame.parent.as_deref()?;
        }
    }
}
