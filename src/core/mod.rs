//! Core analysis pipeline.
//!
//! ## Module Structure
//!
//! - `data`: shared data types (bindings, locations, stats, dynamic patterns)
//! - `detect`: hardcoded-string detectors
//! - `extract`: binding-aware single-pass file analyzer
//! - `parsers`: source (swc) and locale (JSON) parsing
//! - `pattern`: dynamic key pattern matching and reconciliation
//! - `scan`: per-file and parallel batch scanning
//! - `file_scanner`: source file discovery
//! - `context`: project-level orchestration of a check run

pub mod context;
pub mod data;
pub mod detect;
pub mod extract;
pub mod file_scanner;
pub mod parsers;
pub mod pattern;
pub mod scan;

pub use context::{CheckContext, CheckReport};
pub use data::*;
pub use scan::{
    BatchScanResult, FileScanResult, ScanError, ScanOptions, scan_files, scan_source,
};
