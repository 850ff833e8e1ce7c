//! # Prio
//!
//! A RICE/ICE prioritization table and PRD drafting tool for the command line.
//!
//! Prio keeps a small list of initiative records, scores each one with the
//! RICE or ICE formula, and renders the ranked table as Markdown, CSV, or
//! JSON. A parallel pipeline drafts a Product Requirements Document from a
//! fixed set of named sections.
//!
//! ## Features
//!
//! - Deterministic scoring with total numeric functions (clamped confidence,
//!   epsilon-floored effort)
//! - Stable ranked ordering by score, title, or owner
//! - Markdown, CSV, and JSON export with deterministic filenames
//! - JSON import that fully replaces the collection
//! - Single-file JSON persistence with silent fallback to seed data
//!
//! ## Example
//!
//! ```rust
//! use prio::models::Record;
//! use prio::scoring::{self, ScoreMode, SortKey};
//!
//! let records = vec![Record::new()];
//! let ranked = scoring::rank(&records, ScoreMode::Rice, SortKey::Score);
//! assert_eq!(ranked.len(), 1);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use thiserror::Error as ThisError;

// Module declarations
pub mod config;
pub mod io;
pub mod models;
pub mod observability;
pub mod prd;
pub mod scoring;
pub mod store;

// Re-exports for convenience
pub use config::PrioConfig;
pub use models::{PrdDocument, PrdSection, Record, RecordId, RecordPatch};
pub use scoring::{ScoreMode, ScoredRecord, SortKey};
pub use store::{PrdStore, RecordStore};

/// Error type for prio operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - An unknown record id is referenced
    /// - Import content is not a JSON array of records
    /// - A CLI value does not parse (mode, sort key, impact level, format)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - Filesystem I/O errors occur on an explicit export or persist path
    /// - Serialization to an output format fails
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for prio operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("test error".to_string());
        assert_eq!(err.to_string(), "invalid input: test error");

        let err = Error::OperationFailed {
            operation: "test".to_string(),
            cause: "failed".to_string(),
        };
        assert_eq!(err.to_string(), "operation 'test' failed: failed");
    }
}
