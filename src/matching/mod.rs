//! Item matching: similarity scoring, detection filtering, and
//! reconciliation.
//!
//! This module provides the core matching functionality:
//!
//! - [`similarity`]: String similarity in `[0, 1]` between two item names
//! - [`MatchEngine`]: Reconciles list items against detections
//! - [`match_transcript`]: The voice-input variant (substring containment)
//! - [`filter`]: Confidence filtering and generic-label pruning
//!
//! ## Matching Algorithm
//!
//! Similarity between a list item and a detection label is computed in
//! three steps, taking the first that applies:
//!
//! 1. **Exact match**: equal after lower-casing scores `1.0`
//! 2. **Containment**: substring containment scores by length ratio
//! 3. **Word overlap**: fraction of words shared, greedy first hit
//!
//! Reconciliation is greedy per list item: each item claims the
//! highest-scoring detection strictly above the similarity threshold. By
//! default a claimed detection stays available to later items; the
//! `exclusive` config flag switches to greedy-with-removal.
//!
//! ## Example
//!
//! ```rust
//! use packmatch::{Detection, MatchEngine};
//!
//! let engine = MatchEngine::new();
//! let list = vec!["sunglasses".to_string(), "passport".to_string()];
//! let detections = vec![Detection::new("glasses", 0.9)];
//!
//! let report = engine.reconcile(&list, &detections);
//! assert_eq!(report.found, vec!["sunglasses"]);
//! assert_eq!(report.missing, vec!["passport"]);
//! ```

pub mod engine;
pub mod filter;
pub mod similarity;
pub mod transcript;

pub use engine::{
    MatchConfig, MatchEngine, MatchReport, DEFAULT_CONFIDENCE_THRESHOLD,
    DEFAULT_SIMILARITY_THRESHOLD,
};
pub use similarity::{similarity, similarity_detailed, Similarity};
pub use transcript::match_transcript;
