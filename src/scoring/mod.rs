//! Scoring engine.
//!
//! Pure functions from a record and a mode to a numeric score, plus the
//! derived display ordering. The numeric contract: confidence is clamped
//! into [0,100] and effort is floored to [`EFFORT_EPSILON`] before use, so
//! every finite input yields a finite score.

use crate::models::Record;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Floor applied to effort before division.
///
/// Small enough not to visibly distort scores for any effort >= 0.1.
pub const EFFORT_EPSILON: f64 = 1e-4;

/// Scoring formula selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreMode {
    /// Reach × Impact × Confidence / Effort.
    Rice,
    /// Impact × Confidence / Effort (reach is ignored).
    Ice,
}

impl ScoreMode {
    /// Returns the lowercase mode name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rice => "rice",
            Self::Ice => "ice",
        }
    }

    /// Returns the uppercase label used in table headers.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Rice => "RICE",
            Self::Ice => "ICE",
        }
    }
}

impl FromStr for ScoreMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "rice" => Ok(Self::Rice),
            "ice" => Ok(Self::Ice),
            _ => Err(Error::InvalidInput(format!("unknown scoring mode: {s}"))),
        }
    }
}

impl fmt::Display for ScoreMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sort key for the displayed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Score, descending.
    Score,
    /// Title, ascending.
    Title,
    /// Owner, ascending.
    Owner,
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "score" => Ok(Self::Score),
            "title" => Ok(Self::Title),
            "owner" => Ok(Self::Owner),
            _ => Err(Error::InvalidInput(format!("unknown sort key: {s}"))),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Score => write!(f, "score"),
            Self::Title => write!(f, "title"),
            Self::Owner => write!(f, "owner"),
        }
    }
}

/// A record paired with its computed score.
///
/// Borrowed view: the underlying collection is never mutated by ranking.
#[derive(Debug, Clone, Copy)]
pub struct ScoredRecord<'a> {
    /// The scored record.
    pub record: &'a Record,
    /// The computed score for the active mode.
    pub score: f64,
}

fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Computes the score of a record under the given mode.
///
/// Total over finite inputs: confidence is clamped, effort is floored, and
/// no branch divides by zero. Negative reach or impact produce negative
/// scores rather than errors.
#[must_use]
pub fn score(record: &Record, mode: ScoreMode) -> f64 {
    let confidence = clamp01(record.confidence / 100.0);
    let effort = record.effort.max(EFFORT_EPSILON);

    match mode {
        ScoreMode::Rice => record.reach * record.impact * confidence / effort,
        ScoreMode::Ice => record.impact * confidence / effort,
    }
}

// Unicode lowercase fold; ties between equal-folded strings stay in list order.
fn cmp_folded(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Scores every record and returns them in display order.
///
/// The sort is stable: records comparing equal under the key keep their
/// original relative order. The input slice is not modified.
#[must_use]
pub fn rank(records: &[Record], mode: ScoreMode, key: SortKey) -> Vec<ScoredRecord<'_>> {
    let mut ranked: Vec<ScoredRecord<'_>> = records
        .iter()
        .map(|record| ScoredRecord {
            record,
            score: score(record, mode),
        })
        .collect();

    match key {
        SortKey::Score => ranked.sort_by(|a, b| b.score.total_cmp(&a.score)),
        SortKey::Title => ranked.sort_by(|a, b| cmp_folded(&a.record.title, &b.record.title)),
        SortKey::Owner => ranked.sort_by(|a, b| cmp_folded(&a.record.owner, &b.record.owner)),
    }

    ranked
}
