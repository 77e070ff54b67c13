//! Translator binding facts.
//!
//! A binding records what the analyzer knows about an identifier that may be a
//! translation function:
//! - BoundScoped: `const t = useTranslations("auth")`
//! - RootScoped: `const t = useTranslations()`
//! - UnknownScoped: `const t = useTranslations(ns)` or the name-shape fallback
//! - Unbound: a declaration that shadows an outer translator with something else

use std::fmt;

use serde::Serialize;

/// Scope fact for one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NamespaceBinding {
    /// Created with a literal namespace.
    BoundScoped(String),
    /// Created without a namespace argument; keys are used as-is.
    RootScoped,
    /// Namespace is dynamic or could not be traced.
    UnknownScoped,
    /// Not a translator (shadows an outer translator binding).
    Unbound,
}

impl NamespaceBinding {
    pub fn kind(&self) -> BindingKind {
        match self {
            NamespaceBinding::BoundScoped(_) => BindingKind::BoundScoped,
            NamespaceBinding::RootScoped => BindingKind::RootScoped,
            NamespaceBinding::UnknownScoped => BindingKind::UnknownScoped,
            NamespaceBinding::Unbound => BindingKind::Unbound,
        }
    }

    /// The literal namespace, if any.
    pub fn namespace(&self) -> Option<&str> {
        match self {
            NamespaceBinding::BoundScoped(ns) => Some(ns),
            _ => None,
        }
    }

    /// True if calls through this binding are translation calls.
    pub fn is_translator(&self) -> bool {
        !matches!(self, NamespaceBinding::Unbound)
    }

    /// Prefix `key` with the bound namespace unless it already carries it.
    ///
    /// ```
    /// use intlcheck::core::NamespaceBinding;
    ///
    /// let b = NamespaceBinding::BoundScoped("home".to_string());
    /// assert_eq!(b.qualify("title"), "home.title");
    /// assert_eq!(b.qualify("home.title"), "home.title");
    /// assert_eq!(NamespaceBinding::RootScoped.qualify("title"), "title");
    /// ```
    pub fn qualify(&self, key: &str) -> String {
        match self {
            NamespaceBinding::BoundScoped(ns)
                if !key.starts_with(&format!("{}.", ns)) && !ns.is_empty() =>
            {
                format!("{}.{}", ns, key)
            }
            _ => key.to_string(),
        }
    }
}

/// Field-less classification carried on issues and patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BindingKind {
    BoundScoped,
    RootScoped,
    UnknownScoped,
    Unbound,
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingKind::BoundScoped => write!(f, "bound-scoped"),
            BindingKind::RootScoped => write!(f, "root-scoped"),
            BindingKind::UnknownScoped => write!(f, "unknown-scoped"),
            BindingKind::Unbound => write!(f, "unbound"),
        }
    }
}
