use serde::{Deserialize, Serialize};

use crate::core::detection::{Detection, DetectionMatch};
use crate::matching::filter::filter_by_confidence;
use crate::matching::similarity::{similarity_detailed, Similarity};

/// Default minimum confidence for a detection to participate in matching
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Default minimum similarity (strict) for accepting a match
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Configuration for the matching engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Detections below this confidence are ignored (inclusive keep)
    pub confidence_threshold: f64,

    /// A match is accepted only when similarity is strictly above this
    pub similarity_threshold: f64,

    /// When true, a matched detection is consumed and cannot be claimed by
    /// a later list item. By default a detection stays available, so one
    /// strong detection may satisfy several list items.
    pub exclusive: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            exclusive: false,
        }
    }
}

/// Result of reconciling a list against a set of detections
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// List items a detection was accepted for, in list order
    pub found: Vec<String>,

    /// List items no detection cleared the threshold for, in list order
    pub missing: Vec<String>,

    /// The confidence-filtered detections, annotated with match metadata
    pub detections: Vec<DetectionMatch>,
}

/// The matching engine: assigns at most one detection per list item and
/// partitions the list into found and missing.
///
/// Matching is greedy per list item, not a globally optimal bipartite
/// assignment. For tens of items and tens of detections the difference is
/// immaterial, and the greedy pass keeps results easy to reason about.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    config: MatchConfig,
}

impl MatchEngine {
    /// Engine with default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with custom configuration
    #[must_use]
    pub fn with_config(config: MatchConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Reconcile `list_items` against `detections`.
    ///
    /// Detections are confidence-filtered first. Each list item then claims
    /// the highest-scoring detection whose similarity is strictly above the
    /// threshold; ties break toward the first-encountered detection. Every
    /// input item lands in exactly one of `found` / `missing`, both in
    /// input order.
    ///
    /// Never panics on well-formed input: empty `list_items` yields empty
    /// partitions, and empty `detections` marks every item missing.
    #[must_use]
    pub fn reconcile(&self, list_items: &[String], detections: &[Detection]) -> MatchReport {
        let kept = filter_by_confidence(detections, self.config.confidence_threshold);

        let mut annotated: Vec<DetectionMatch> =
            kept.iter().map(DetectionMatch::unmatched).collect();
        let mut consumed = vec![false; kept.len()];
        let mut found = Vec::new();
        let mut missing = Vec::new();

        for item in list_items {
            let best = self.best_match(item, &kept, &consumed);

            match best {
                Some((idx, sim)) => {
                    consumed[idx] = true;
                    let slot = &mut annotated[idx];
                    slot.in_list = true;
                    slot.matched_item = Some(item.clone());
                    slot.similarity = sim.score;
                    slot.kind = sim.kind;
                    found.push(item.clone());
                }
                None => missing.push(item.clone()),
            }
        }

        MatchReport {
            found,
            missing,
            detections: annotated,
        }
    }

    /// Highest-scoring detection strictly above the similarity threshold,
    /// ties broken toward the first encountered.
    fn best_match(
        &self,
        item: &str,
        detections: &[Detection],
        consumed: &[bool],
    ) -> Option<(usize, Similarity)> {
        let mut best: Option<(usize, Similarity)> = None;

        for (idx, detection) in detections.iter().enumerate() {
            if self.config.exclusive && consumed[idx] {
                continue;
            }

            let sim = similarity_detailed(item, &detection.name);
            if sim.score <= self.config.similarity_threshold {
                continue;
            }

            let improves = match &best {
                None => true,
                Some((_, current)) => sim.score > current.score,
            };
            if improves {
                best = Some((idx, sim));
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::MatchKind;

    fn items(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    fn det(name: &str, confidence: f64) -> Detection {
        Detection::new(name, confidence)
    }

    #[test]
    fn test_partition_invariant() {
        let engine = MatchEngine::new();
        let list = items(&["sunscreen", "flip flops", "passport", "sunglasses"]);
        let detections = vec![det("sunscreen", 0.9), det("glasses", 0.8)];

        let report = engine.reconcile(&list, &detections);
        assert_eq!(report.found.len() + report.missing.len(), list.len());

        let mut all: Vec<String> = report
            .found
            .iter()
            .chain(report.missing.iter())
            .cloned()
            .collect();
        all.sort();
        let mut expected = list.clone();
        expected.sort();
        assert_eq!(all, expected);
    }

    #[test]
    fn test_exact_match_found() {
        let engine = MatchEngine::new();
        let report = engine.reconcile(&items(&["sunscreen"]), &[det("Sunscreen", 0.9)]);
        assert_eq!(report.found, vec!["sunscreen"]);
        assert!(report.missing.is_empty());

        let m = &report.detections[0];
        assert!(m.in_list);
        assert_eq!(m.matched_item.as_deref(), Some("sunscreen"));
        assert_eq!(m.similarity, 1.0);
        assert_eq!(m.kind, MatchKind::Exact);
    }

    #[test]
    fn test_threshold_is_strict() {
        // "sunglasses" vs "sunglasse" scores 9/10 = 0.9 (containment);
        // exercise strictness with a custom threshold at exactly that score.
        let at_threshold = MatchEngine::with_config(MatchConfig {
            similarity_threshold: 0.9,
            ..MatchConfig::default()
        });
        let report = at_threshold.reconcile(&items(&["sunglasses"]), &[det("sunglasse", 0.9)]);
        assert_eq!(report.missing, vec!["sunglasses"]);

        let below_threshold = MatchEngine::with_config(MatchConfig {
            similarity_threshold: 0.89,
            ..MatchConfig::default()
        });
        let report = below_threshold.reconcile(&items(&["sunglasses"]), &[det("sunglasse", 0.9)]);
        assert_eq!(report.found, vec!["sunglasses"]);
    }

    #[test]
    fn test_containment_at_default_threshold_boundary() {
        // "glasses"/"sunglasses" = 0.7 > 0.6: accepted.
        let engine = MatchEngine::new();
        let report = engine.reconcile(&items(&["sunglasses"]), &[det("glasses", 0.9)]);
        assert_eq!(report.found, vec!["sunglasses"]);

        // "abc"/"abcde" = 0.6 exactly: rejected under strict >.
        let report = engine.reconcile(&items(&["abcde"]), &[det("abc", 0.9)]);
        assert_eq!(report.missing, vec!["abcde"]);
    }

    #[test]
    fn test_low_confidence_detection_ignored() {
        let engine = MatchEngine::new();
        let report = engine.reconcile(&items(&["sunscreen"]), &[det("sunscreen", 0.49)]);
        assert_eq!(report.missing, vec!["sunscreen"]);
        // The filtered detection does not appear in the annotations either
        assert!(report.detections.is_empty());
    }

    #[test]
    fn test_confidence_at_threshold_kept() {
        let engine = MatchEngine::new();
        let report = engine.reconcile(&items(&["sunscreen"]), &[det("sunscreen", 0.5)]);
        assert_eq!(report.found, vec!["sunscreen"]);
    }

    #[test]
    fn test_best_of_several_detections() {
        let engine = MatchEngine::new();
        let report = engine.reconcile(
            &items(&["sunglasses"]),
            &[det("glasses", 0.9), det("sunglasses", 0.8)],
        );
        assert_eq!(report.found, vec!["sunglasses"]);

        // The exact match (1.0) wins over containment (0.7)
        let m = &report.detections[1];
        assert!(m.in_list);
        assert_eq!(m.similarity, 1.0);
        assert!(!report.detections[0].in_list);
    }

    #[test]
    fn test_tie_breaks_to_first_detection() {
        let engine = MatchEngine::new();
        // Two identical labels, both scoring 1.0; the first wins
        let report = engine.reconcile(
            &items(&["towel"]),
            &[det("towel", 0.8), det("towel", 0.95)],
        );
        assert!(report.detections[0].in_list);
        assert!(!report.detections[1].in_list);
    }

    #[test]
    fn test_shared_detection_default_mode() {
        // Both items independently claim the single "sunglasses" detection;
        // its metadata records the last claimant.
        let engine = MatchEngine::new();
        let report = engine.reconcile(
            &items(&["sunglasses", "glasses"]),
            &[det("sunglasses", 0.9)],
        );
        assert_eq!(report.found, vec!["sunglasses", "glasses"]);
        assert!(report.missing.is_empty());
        assert_eq!(
            report.detections[0].matched_item.as_deref(),
            Some("glasses")
        );
    }

    #[test]
    fn test_shared_detection_exclusive_mode() {
        let engine = MatchEngine::with_config(MatchConfig {
            exclusive: true,
            ..MatchConfig::default()
        });
        let report = engine.reconcile(
            &items(&["sunglasses", "glasses"]),
            &[det("sunglasses", 0.9)],
        );
        assert_eq!(report.found, vec!["sunglasses"]);
        assert_eq!(report.missing, vec!["glasses"]);
        assert_eq!(
            report.detections[0].matched_item.as_deref(),
            Some("sunglasses")
        );
    }

    #[test]
    fn test_beach_trip_scenario() {
        // At the default 0.6 threshold "Sunscreen bottle" scores 9/16 for
        // "sunscreen" and is rejected; at 0.5 the containment match holds
        // while sandal/plastic still match nothing.
        let engine = MatchEngine::with_config(MatchConfig {
            similarity_threshold: 0.5,
            ..MatchConfig::default()
        });
        let list = items(&["sunscreen", "flip flops", "passport"]);
        let detections = vec![
            det("Sunscreen bottle", 0.9),
            det("sandal", 0.8),
            det("plastic", 0.95),
        ];

        let report = engine.reconcile(&list, &detections);
        assert_eq!(report.found, vec!["sunscreen"]);
        assert_eq!(report.missing, vec!["flip flops", "passport"]);

        let m = &report.detections[0];
        assert_eq!(m.kind, MatchKind::Containment);
        assert!((m.similarity - 9.0 / 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_beach_trip_scenario_default_threshold() {
        let engine = MatchEngine::new();
        let list = items(&["sunscreen", "flip flops", "passport"]);
        let detections = vec![
            det("Sunscreen bottle", 0.9),
            det("sandal", 0.8),
            det("plastic", 0.95),
        ];

        let report = engine.reconcile(&list, &detections);
        assert!(report.found.is_empty());
        assert_eq!(report.missing.len(), 3);
    }

    #[test]
    fn test_empty_list() {
        let engine = MatchEngine::new();
        let report = engine.reconcile(&[], &[det("sunscreen", 0.9)]);
        assert!(report.found.is_empty());
        assert!(report.missing.is_empty());
        assert_eq!(report.detections.len(), 1);
    }

    #[test]
    fn test_empty_detections() {
        let engine = MatchEngine::new();
        let list = items(&["sunscreen", "passport"]);
        let report = engine.reconcile(&list, &[]);
        assert!(report.found.is_empty());
        assert_eq!(report.missing, list);
        assert!(report.detections.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let engine = MatchEngine::new();
        let list = items(&["sunscreen", "sunglasses", "towel"]);
        let detections = vec![det("sunscreen", 0.9), det("glasses", 0.8), det("towel", 0.7)];

        let a = engine.reconcile(&list, &detections);
        let b = engine.reconcile(&list, &detections);
        assert_eq!(a.found, b.found);
        assert_eq!(a.missing, b.missing);
    }
}
