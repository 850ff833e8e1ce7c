//! Format adapters for export/import.

pub mod csv;
pub mod json;
pub mod markdown;

use crate::scoring::ScoreMode;
use crate::{Error, Result};
use std::path::Path;
use std::str::FromStr;

/// Supported file formats for export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Markdown table (display format).
    Markdown,
    /// CSV with RFC4180 minimal quoting.
    Csv,
    /// JSON array of raw records (backup format, also the import format).
    Json,
}

impl Format {
    /// Returns all export formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Markdown, Self::Csv, Self::Json]
    }

    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Returns the MIME type for this format.
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Markdown => "text/markdown",
            Self::Csv => "text/csv",
            Self::Json => "application/json",
        }
    }

    /// Detects format from file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is not recognized.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some("md" | "markdown") => Ok(Self::Markdown),
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            Some(ext) => Err(Error::InvalidInput(format!(
                "unsupported file extension: .{ext}"
            ))),
            None => Err(Error::InvalidInput(
                "cannot determine format: file has no extension".to_string(),
            )),
        }
    }

    /// Returns the deterministic export filename for this format.
    ///
    /// Markdown and CSV names carry the active mode; the JSON backup name
    /// does not vary by mode.
    #[must_use]
    pub fn export_filename(&self, mode: ScoreMode) -> String {
        match self {
            Self::Markdown => format!("prioritization-{}.md", mode.as_str()),
            Self::Csv => format!("prioritization-{}.csv", mode.as_str()),
            Self::Json => "prioritization.json".to_string(),
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "md" | "markdown" => Ok(Self::Markdown),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(Error::InvalidInput(format!("unknown format: {s}"))),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Formats a numeric field the way it was entered: integral values print
/// without a fractional part.
#[must_use]
pub(crate) fn fmt_num(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!(Format::from_str("markdown").unwrap(), Format::Markdown);
        assert_eq!(Format::from_str("MD").unwrap(), Format::Markdown);
        assert_eq!(Format::from_str("csv").unwrap(), Format::Csv);
        assert_eq!(Format::from_str("json").unwrap(), Format::Json);
        assert!(Format::from_str("yaml").is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            Format::from_path(Path::new("table.md")).unwrap(),
            Format::Markdown
        );
        assert_eq!(
            Format::from_path(Path::new("backup.json")).unwrap(),
            Format::Json
        );
        assert!(Format::from_path(Path::new("notes.txt")).is_err());
        assert!(Format::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_export_filenames() {
        assert_eq!(
            Format::Markdown.export_filename(ScoreMode::Rice),
            "prioritization-rice.md"
        );
        assert_eq!(
            Format::Csv.export_filename(ScoreMode::Ice),
            "prioritization-ice.csv"
        );
        // The JSON backup name does not vary by mode.
        assert_eq!(
            Format::Json.export_filename(ScoreMode::Rice),
            Format::Json.export_filename(ScoreMode::Ice)
        );
    }

    #[test]
    fn test_fmt_num_trims_integral() {
        assert_eq!(fmt_num(200.0), "200");
        assert_eq!(fmt_num(0.25), "0.25");
        assert_eq!(fmt_num(-1.5), "-1.5");
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(Format::Markdown.mime_type(), "text/markdown");
        assert_eq!(Format::Csv.mime_type(), "text/csv");
        assert_eq!(Format::Json.mime_type(), "application/json");
    }
}
