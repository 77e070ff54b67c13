//! Core data types shared by the extraction, matching and scan layers.
//!
//! ## Module Structure
//!
//! - `binding`: NamespaceBinding / BindingKind (translator scope facts)
//! - `pattern`: DynamicPattern (interpolated translation keys)
//! - `source`: SourceLocation / SourceContext
//! - `stats`: ScanStats (per-file counters)

pub mod binding;
pub mod pattern;
pub mod source;
pub mod stats;

pub use binding::{BindingKind, NamespaceBinding};
pub use pattern::DynamicPattern;
pub use source::{SourceContext, SourceLocation};
pub use stats::ScanStats;
