use serde::{Deserialize, Serialize};

use crate::core::types::MatchKind;

/// A single object recognized from a photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Label assigned by the vision backend (e.g. "Sunscreen bottle")
    pub name: String,

    /// Recognition confidence in `[0, 1]`
    pub confidence: f64,
}

impl Detection {
    /// Create a detection, normalizing a non-finite confidence to `0.0`
    /// so it falls to the confidence filter instead of poisoning comparisons.
    pub fn new(name: impl Into<String>, confidence: f64) -> Self {
        Self {
            name: name.into(),
            confidence: if confidence.is_finite() {
                confidence
            } else {
                0.0
            },
        }
    }
}

/// A detection annotated with the outcome of one reconciliation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionMatch {
    /// Label assigned by the vision backend
    pub name: String,

    /// Recognition confidence in `[0, 1]`
    pub confidence: f64,

    /// Whether some list item claimed this detection
    pub in_list: bool,

    /// The list item that claimed this detection, if any.
    /// When several list items match the same detection (non-exclusive
    /// mode), this records the last one that claimed it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_item: Option<String>,

    /// Similarity score of the recorded match (0 when unmatched)
    pub similarity: f64,

    /// How the recorded score was produced
    pub kind: MatchKind,
}

impl DetectionMatch {
    /// Annotation for a detection no list item has claimed (yet)
    #[must_use]
    pub fn unmatched(detection: &Detection) -> Self {
        Self {
            name: detection.name.clone(),
            confidence: detection.confidence,
            in_list: false,
            matched_item: None,
            similarity: 0.0,
            kind: MatchKind::NoMatch,
        }
    }
}
