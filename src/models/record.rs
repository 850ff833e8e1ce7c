//! Record types and identifiers.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The categorical impact magnitudes a record may carry.
///
/// Follows the RICE convention: 3 = massive, 2 = high, 1 = medium,
/// 0.5 = low, 0.25 = minimal.
pub const IMPACT_LEVELS: [f64; 5] = [0.25, 0.5, 1.0, 2.0, 3.0];

/// Unique identifier for a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Creates a record ID from an existing string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh random record ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A prioritization record.
///
/// Numeric fields are stored as entered; the scoring functions clamp
/// confidence into [0,100] and floor effort to a positive epsilon at
/// computation time, never at storage time. The derived score is not a
/// field; it is recomputed on every render and export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier, stable for the record's lifetime.
    #[serde(default = "RecordId::generate")]
    pub id: RecordId,
    /// Free-form title, may be empty.
    #[serde(default)]
    pub title: String,
    /// Free-form owner label, may be empty.
    #[serde(default)]
    pub owner: String,
    /// Estimated users/events affected per period.
    #[serde(default)]
    pub reach: f64,
    /// Categorical impact magnitude, one of [`IMPACT_LEVELS`].
    #[serde(default = "default_impact")]
    pub impact: f64,
    /// Confidence percentage, semantically in [0,100].
    #[serde(default = "default_confidence")]
    pub confidence: f64,
    /// Estimated cost; semantically positive.
    #[serde(default = "default_effort")]
    pub effort: f64,
}

const fn default_impact() -> f64 {
    1.0
}

const fn default_confidence() -> f64 {
    50.0
}

const fn default_effort() -> f64 {
    1.0
}

impl Record {
    /// Creates a record with a fresh ID and default field values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: RecordId::generate(),
            title: String::new(),
            owner: String::new(),
            reach: 0.0,
            impact: default_impact(),
            confidence: default_confidence(),
            effort: default_effort(),
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the owner.
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

/// A partial update to a record.
///
/// Each populated field replaces the corresponding record field; identity is
/// preserved via the record's `id`, which a patch can never touch.
#[derive(Debug, Clone, Default)]
pub struct RecordPatch {
    /// New title, if set.
    pub title: Option<String>,
    /// New owner, if set.
    pub owner: Option<String>,
    /// New reach, if set.
    pub reach: Option<f64>,
    /// New impact, if set.
    pub impact: Option<f64>,
    /// New confidence, if set.
    pub confidence: Option<f64>,
    /// New effort, if set.
    pub effort: Option<f64>,
}

impl RecordPatch {
    /// Returns whether the patch changes nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.owner.is_none()
            && self.reach.is_none()
            && self.impact.is_none()
            && self.confidence.is_none()
            && self.effort.is_none()
    }

    /// Applies the patch to a record in place.
    pub fn apply(&self, record: &mut Record) {
        if let Some(title) = &self.title {
            record.title.clone_from(title);
        }
        if let Some(owner) = &self.owner {
            record.owner.clone_from(owner);
        }
        if let Some(reach) = self.reach {
            record.reach = reach;
        }
        if let Some(impact) = self.impact {
            record.impact = impact;
        }
        if let Some(confidence) = self.confidence {
            record.confidence = confidence;
        }
        if let Some(effort) = self.effort {
            record.effort = effort;
        }
    }
}

/// Parses an impact level from CLI input.
///
/// Accepts either the numeric value (`0.25`, `0.5`, `1`, `2`, `3`) or the
/// conventional label (`minimal`, `low`, `medium`, `high`, `massive`).
///
/// # Errors
///
/// Returns an error if the input is neither a listed value nor a label.
pub fn parse_impact(s: &str) -> Result<f64> {
    match s.trim().to_lowercase().as_str() {
        "minimal" => return Ok(0.25),
        "low" => return Ok(0.5),
        "medium" => return Ok(1.0),
        "high" => return Ok(2.0),
        "massive" => return Ok(3.0),
        _ => {}
    }

    if let Ok(value) = s.trim().parse::<f64>() {
        if IMPACT_LEVELS.contains(&value) {
            return Ok(value);
        }
    }

    Err(Error::InvalidInput(format!(
        "impact must be one of 0.25, 0.5, 1, 2, 3 (or minimal/low/medium/high/massive), got '{s}'"
    )))
}

/// Returns the built-in seed records used when no persisted state exists.
#[must_use]
pub fn seed_records() -> Vec<Record> {
    vec![
        Record {
            id: RecordId::generate(),
            title: "Improve onboarding flow".to_string(),
            owner: "PM".to_string(),
            reach: 500.0,
            impact: 2.0,
            confidence: 80.0,
            effort: 3.0,
        },
        Record {
            id: RecordId::generate(),
            title: "Fix checkout latency".to_string(),
            owner: "Eng".to_string(),
            reach: 1200.0,
            impact: 1.0,
            confidence: 70.0,
            effort: 2.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_record_id_generate_unique() {
        let a = RecordId::generate();
        let b = RecordId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_new_record_defaults() {
        let record = Record::new();
        assert!(record.title.is_empty());
        assert!(record.owner.is_empty());
        assert!((record.reach - 0.0).abs() < f64::EPSILON);
        assert!((record.impact - 1.0).abs() < f64::EPSILON);
        assert!((record.confidence - 50.0).abs() < f64::EPSILON);
        assert!((record.effort - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_patch_replaces_only_set_fields() {
        let mut record = Record::new().with_title("before").with_owner("alice");
        let id = record.id.clone();

        let patch = RecordPatch {
            title: Some("after".to_string()),
            ..RecordPatch::default()
        };
        patch.apply(&mut record);

        assert_eq!(record.title, "after");
        assert_eq!(record.owner, "alice");
        assert_eq!(record.id, id);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut record = Record::new().with_title("unchanged");
        let before = record.clone();

        let patch = RecordPatch::default();
        assert!(patch.is_empty());
        patch.apply(&mut record);

        assert_eq!(record, before);
    }

    #[test_case("0.25", 0.25)]
    #[test_case("0.5", 0.5)]
    #[test_case("1", 1.0)]
    #[test_case("2", 2.0)]
    #[test_case("3", 3.0)]
    #[test_case("minimal", 0.25)]
    #[test_case("Massive", 3.0)]
    fn test_parse_impact_accepts(input: &str, expected: f64) {
        assert!((parse_impact(input).unwrap() - expected).abs() < f64::EPSILON);
    }

    #[test_case("0.75")]
    #[test_case("huge")]
    #[test_case("")]
    fn test_parse_impact_rejects(input: &str) {
        assert!(parse_impact(input).is_err());
    }

    #[test]
    fn test_record_deserializes_with_missing_fields() {
        let record: Record = serde_json::from_str(r#"{"title": "partial"}"#).unwrap();
        assert_eq!(record.title, "partial");
        assert!((record.impact - 1.0).abs() < f64::EPSILON);
        assert!((record.effort - 1.0).abs() < f64::EPSILON);
        assert!(!record.id.as_str().is_empty());
    }

    #[test]
    fn test_seed_records() {
        let seeds = seed_records();
        assert_eq!(seeds.len(), 2);
        assert_ne!(seeds[0].id, seeds[1].id);
    }
}
