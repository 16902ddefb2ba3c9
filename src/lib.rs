//! # packmatch
//!
//! A library for reconciling detected objects against packing lists.
//!
//! When a packing-list app analyzes a photo, the vision backend returns
//! loose labels ("Sunscreen bottle", "sandal") that rarely equal the
//! free-text item names a user typed ("sunscreen", "flip flops").
//! `packmatch` decides which list items were actually observed and which
//! are still missing.
//!
//! ## Features
//!
//! - **Fuzzy similarity**: case-insensitive exact, substring-containment,
//!   and word-overlap scoring between item names and detection labels
//! - **Confidence filtering**: low-confidence detections are ignored
//! - **Greedy reconciliation**: each list item claims its best detection
//!   above a threshold, partitioning the list into found and missing
//! - **Voice variant**: substring check-off against a spoken transcript
//! - **Tolerant inputs**: vision responses with `score` or `confidence`
//!   keys, exported list objects, or plain text
//!
//! ## Example
//!
//! ```rust
//! use packmatch::{Detection, MatchEngine};
//!
//! let list = vec![
//!     "sunscreen".to_string(),
//!     "sunglasses".to_string(),
//!     "passport".to_string(),
//! ];
//! let detections = vec![
//!     Detection::new("Sunscreen", 0.9),
//!     Detection::new("glasses", 0.8),
//!     Detection::new("towel", 0.3),
//! ];
//!
//! let report = MatchEngine::new().reconcile(&list, &detections);
//! assert_eq!(report.found, vec!["sunscreen", "sunglasses"]);
//! assert_eq!(report.missing, vec!["passport"]);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Domain types for detections, lists, and match results
//! - [`matching`]: Similarity scoring, filters, and the reconciliation engine
//! - [`parsing`]: Tolerant readers for the upstream JSON shapes
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;

// Re-export commonly used types for convenience
pub use crate::core::detection::{Detection, DetectionMatch};
pub use crate::core::item::{PackingItem, PackingList};
pub use crate::core::types::{MatchKind, MatchStrength};
pub use crate::matching::engine::{
    MatchConfig, MatchEngine, MatchReport, DEFAULT_CONFIDENCE_THRESHOLD,
    DEFAULT_SIMILARITY_THRESHOLD,
};
pub use crate::matching::filter::{
    drop_generic_labels, filter_by_confidence, top_by_confidence, GENERIC_LABELS,
};
pub use crate::matching::similarity::{similarity, similarity_detailed, Similarity};
pub use crate::matching::transcript::match_transcript;
pub use crate::parsing::ParseError;
