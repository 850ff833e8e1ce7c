//! CSV export.
//!
//! RFC4180-style minimal quoting: a field is quoted, with internal quotes
//! doubled, only when it contains a comma, newline, or double quote. Numeric
//! values are emitted raw (no `%` suffix, no placeholder substitution), the
//! score fixed to two decimals.

use super::fmt_num;
use crate::scoring::{ScoreMode, ScoredRecord};
use crate::{Error, Result};

/// Renders the scored, sorted list as CSV text.
///
/// Header row `Title,Owner,Reach,Impact,Confidence,Effort,<MODE>` followed by
/// one data row per record in the given order. Titles and owners containing
/// embedded newlines survive a round trip through a compliant CSV parser.
///
/// # Errors
///
/// Returns an error if the writer fails, which for an in-memory buffer only
/// happens on a serialization defect.
pub fn export(rows: &[ScoredRecord<'_>], mode: ScoreMode) -> Result<String> {
    let map_err = |e: csv::Error| Error::OperationFailed {
        operation: "write_csv".to_string(),
        cause: e.to_string(),
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer
        .write_record([
            "Title",
            "Owner",
            "Reach",
            "Impact",
            "Confidence",
            "Effort",
            mode.label(),
        ])
        .map_err(map_err)?;

    for row in rows {
        let record = row.record;
        writer
            .write_record([
                record.title.as_str(),
                record.owner.as_str(),
                &fmt_num(record.reach),
                &fmt_num(record.impact),
                &fmt_num(record.confidence),
                &fmt_num(record.effort),
                &format!("{:.2}", row.score),
            ])
            .map_err(map_err)?;
    }

    let bytes = writer.into_inner().map_err(|e| Error::OperationFailed {
        operation: "flush_csv".to_string(),
        cause: e.to_string(),
    })?;

    String::from_utf8(bytes).map_err(|e| Error::OperationFailed {
        operation: "encode_csv".to_string(),
        cause: e.to_string(),
    })
}
