//! intlcheck - static i18n health checker for React/Next.js projects
//!
//! Scans JS/TS/JSX/TSX sources for hardcoded user-facing text and translation calls,
//! resolves translation keys through namespace bindings, reconciles dynamic keys against
//! the source locale, runs locale health rules and folds everything into one scored
//! diagnostic report.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Analysis engine (binding-aware extraction, detectors, dynamic key matching)
//! - `diagnostics`: Unified diagnostics, rule registry and health score
//! - `issues`: Code-level issue types
//! - `rules`: Locale health rules
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod issues;
pub mod rules;
pub mod utils;
