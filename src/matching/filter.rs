use tracing::debug;

use crate::core::detection::Detection;

/// Broad labels the vision backend emits for almost any photo. Matching
/// against these would produce junk correspondences, so they are dropped
/// before reconciliation.
pub const GENERIC_LABELS: &[&str] = &[
    "plastic",
    "metal",
    "cylinder",
    "material",
    "product",
    "liquid",
    "fluid",
    "container",
    "device",
    "object",
    "item",
    "gadget",
    "accessory",
    "silver",
    "black",
    "white",
    "personal care",
    "carbon fibers",
    "bottled and jarred packaged goods",
    "hardware",
    "electronic device",
    "technology",
    "electronics",
    "household hardware",
];

/// Keep detections whose confidence is at or above `threshold`.
///
/// Order-preserving and side-effect free. Detections whose raw input carried
/// no usable confidence arrive here as `0.0` and are dropped by any positive
/// threshold.
#[must_use]
pub fn filter_by_confidence(detections: &[Detection], threshold: f64) -> Vec<Detection> {
    detections
        .iter()
        .filter(|d| d.confidence >= threshold)
        .cloned()
        .collect()
}

/// Drop detections whose name contains any of the [`GENERIC_LABELS`]
/// (case-insensitive). Order-preserving.
#[must_use]
pub fn drop_generic_labels(detections: &[Detection]) -> Vec<Detection> {
    detections
        .iter()
        .filter(|d| {
            let name = d.name.to_lowercase();
            let generic = GENERIC_LABELS.iter().any(|term| name.contains(term));
            if generic {
                debug!(label = %d.name, "dropping generic label");
            }
            !generic
        })
        .cloned()
        .collect()
}

/// The `limit` highest-confidence detections, sorted descending.
///
/// The sort is stable, so equal-confidence detections keep their input
/// order.
#[must_use]
pub fn top_by_confidence(detections: &[Detection], limit: usize) -> Vec<Detection> {
    let mut sorted = detections.to_vec();
    sorted.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(limit);
    sorted
}
