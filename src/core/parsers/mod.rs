//! File parsers for source code and locale files.
//!
//! - `json`: locale file loading and flattening
//! - `jsx`: JS/JSX/TS/TSX source parsing (swc)

pub mod json;
pub mod jsx;
