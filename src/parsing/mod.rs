//! Tolerant readers for the input shapes the surrounding app produces.
//!
//! This module parses:
//!
//! - **Detections**: a vision-API response object (`{"objects": [...]}`) or
//!   a bare JSON array; each entry carries its confidence under either a
//!   `confidence` or a `score` key (neither → `0.0`, which the confidence
//!   filter then drops)
//! - **Packing lists**: plain text (one item per line), a JSON array of
//!   item names, or a single exported list object with camelCase keys
//!
//! Per-entry problems (a nameless detection, a non-finite confidence) are
//! normalized or skipped with a `tracing` warning; only structurally
//! malformed input fails the parse.

use thiserror::Error;

pub mod detections;
pub mod list;

pub use detections::{parse_detections_file, parse_detections_json};
pub use list::{parse_list_file, parse_list_json, parse_list_str, parse_list_text};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input format: {0}")]
    InvalidFormat(String),

    #[error("File contains {0} lists; export a single list and retry")]
    MultipleLists(usize),
}
