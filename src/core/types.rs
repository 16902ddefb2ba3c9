use serde::{Deserialize, Serialize};

/// How a similarity score between a list item and a detection was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Strings are equal after lower-casing
    Exact,
    /// One string contains the other; scored by length ratio
    Containment,
    /// Scored by whitespace-word overlap
    WordOverlap,
    /// No textual overlap at all
    #[default]
    NoMatch,
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Containment => write!(f, "containment"),
            Self::WordOverlap => write!(f, "word overlap"),
            Self::NoMatch => write!(f, "no match"),
        }
    }
}

/// Strength band for a similarity score, used for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrength {
    Low,
    Medium,
    High,
    Exact,
}

impl MatchStrength {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 1.0 {
            Self::Exact
        } else if score >= 0.8 {
            Self::High
        } else if score >= 0.6 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl std::fmt::Display for MatchStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Exact => write!(f, "exact"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_from_score() {
        assert_eq!(MatchStrength::from_score(1.0), MatchStrength::Exact);
        assert_eq!(MatchStrength::from_score(0.9), MatchStrength::High);
        assert_eq!(MatchStrength::from_score(0.7), MatchStrength::Medium);
        assert_eq!(MatchStrength::from_score(0.3), MatchStrength::Low);
    }

    #[test]
    fn test_strength_ordering() {
        assert!(MatchStrength::Low < MatchStrength::Medium);
        assert!(MatchStrength::Medium < MatchStrength::High);
        assert!(MatchStrength::High < MatchStrength::Exact);
    }
}
