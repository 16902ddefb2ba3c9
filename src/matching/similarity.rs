use crate::core::types::MatchKind;

/// Safely convert usize to f64 for ratio calculations
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// A similarity score together with the strategy that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Similarity {
    /// Score in `[0, 1]`
    pub score: f64,

    /// Which step of the scorer produced the score
    pub kind: MatchKind,
}

impl Similarity {
    const NONE: Self = Self {
        score: 0.0,
        kind: MatchKind::NoMatch,
    };
}

/// Similarity in `[0, 1]` between two item names.
///
/// Comparison is case-insensitive and proceeds in three steps, returning at
/// the first that applies:
///
/// 1. **Exact**: equal after lower-casing → `1.0`.
/// 2. **Containment**: one contains the other → `shorter_len / longer_len`.
///    Near-equal-length containment scores high; a short word trivially
///    contained in a long phrase scores low.
/// 3. **Word overlap**: a word of `a` counts as matched as soon as some word
///    of `b` is equal to it, contains it, or is contained by it. Score is
///    `matched / max(word_count(a), word_count(b))`.
///
/// Pure and total: never panics, and returns `0.0` for empty input rather
/// than erroring (empty names are a caller contract violation).
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    similarity_detailed(a, b).score
}

/// [`similarity`], also reporting which step produced the score.
#[must_use]
pub fn similarity_detailed(a: &str, b: &str) -> Similarity {
    if a.is_empty() || b.is_empty() {
        return Similarity::NONE;
    }

    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a == b {
        return Similarity {
            score: 1.0,
            kind: MatchKind::Exact,
        };
    }

    if a.contains(&b) || b.contains(&a) {
        let a_len = a.chars().count();
        let b_len = b.chars().count();
        return Similarity {
            score: count_to_f64(a_len.min(b_len)) / count_to_f64(a_len.max(b_len)),
            kind: MatchKind::Containment,
        };
    }

    word_overlap(&a, &b)
}

/// Step 3: greedy per-word overlap.
///
/// Each word of `a` is counted at most once, on the first word of `b` that
/// is equal to it, contains it, or is contained by it; there is no search
/// for a better alternative. The `max` denominator keeps a short generic
/// label from cheaply matching a long multi-word item.
fn word_overlap(a: &str, b: &str) -> Similarity {
    let a_words: Vec<&str> = a.split_whitespace().collect();
    let b_words: Vec<&str> = b.split_whitespace().collect();

    if a_words.is_empty() || b_words.is_empty() {
        return Similarity::NONE;
    }

    let matched = a_words
        .iter()
        .filter(|&&a_word| {
            b_words
                .iter()
                .any(|&b_word| a_word == b_word || a_word.contains(b_word) || b_word.contains(a_word))
        })
        .count();

    if matched == 0 {
        return Similarity::NONE;
    }

    Similarity {
        score: count_to_f64(matched) / count_to_f64(a_words.len().max(b_words.len())),
        kind: MatchKind::WordOverlap,
    }
}
