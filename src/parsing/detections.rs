use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::core::detection::Detection;
use crate::parsing::ParseError;

/// A detection as it appears in upstream JSON. The vision backend has
/// emitted the confidence under both `score` and `confidence` at different
/// times, so both are accepted; `confidence` wins when both are present.
#[derive(Debug, Deserialize)]
struct RawDetection {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    confidence: Option<f64>,

    #[serde(default)]
    score: Option<f64>,
}

impl RawDetection {
    /// Normalize to a [`Detection`]. Entries without a name are unusable
    /// and dropped; a missing or non-finite confidence becomes `0.0`, which
    /// the confidence filter then discards.
    fn normalize(self) -> Option<Detection> {
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => {
                warn!("skipping detection without a name");
                return None;
            }
        };

        let confidence = self
            .confidence
            .or(self.score)
            .filter(|c| c.is_finite())
            .unwrap_or(0.0);

        Some(Detection::new(name, confidence))
    }
}

/// Response wrapper shape: `{"objects": [...]}`
#[derive(Debug, Deserialize)]
struct VisionResponse {
    objects: Vec<RawDetection>,
}

/// Parse detections from JSON text.
///
/// Accepts either the vision-API response object (`{"objects": [...]}`) or
/// a bare array of detections. Entries without a usable name are skipped
/// with a warning rather than failing the whole parse.
///
/// # Errors
///
/// Returns [`ParseError::Json`] for malformed JSON and
/// [`ParseError::InvalidFormat`] for JSON of an unrecognized shape.
pub fn parse_detections_json(json: &str) -> Result<Vec<Detection>, ParseError> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    let raw: Vec<RawDetection> = if value.is_array() {
        serde_json::from_value(value)?
    } else if value.is_object() && value.get("objects").is_some() {
        serde_json::from_value::<VisionResponse>(value)?.objects
    } else {
        return Err(ParseError::InvalidFormat(
            "expected a detection array or an object with an \"objects\" field".to_string(),
        ));
    };

    Ok(raw.into_iter().filter_map(RawDetection::normalize).collect())
}

/// Parse detections from a file.
///
/// # Errors
///
/// Returns [`ParseError::Io`] if the file cannot be read, otherwise the
/// errors of [`parse_detections_json`].
pub fn parse_detections_file(path: &Path) -> Result<Vec<Detection>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_detections_json(&content)
}
