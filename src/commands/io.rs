//! Import and export command handlers.

use std::path::PathBuf;

use prio::config::PrioConfig;
use prio::io::formats::{Format, csv, json, markdown};
use prio::scoring::{self, SortKey};
use prio::store::RecordStore;
use prio::{Error, Result};

/// Executes the export command.
///
/// Format comes from `--format`, or the output path extension, defaulting to
/// Markdown. Without `--output` the deterministic filename for the format
/// and mode is used in the current directory.
pub fn cmd_export(
    config: &PrioConfig,
    format: Option<String>,
    mode: Option<String>,
    output: Option<PathBuf>,
) -> Result<()> {
    let mode = mode
        .as_deref()
        .map_or(Ok(config.default_mode), str::parse)?;

    let format = match (&format, &output) {
        (Some(f), _) => f.parse::<Format>()?,
        (None, Some(path)) => Format::from_path(path)?,
        (None, None) => Format::Markdown,
    };

    let store = RecordStore::open(config.records_path());
    let content = match format {
        Format::Markdown => {
            let ranked = scoring::rank(store.records(), mode, SortKey::Score);
            markdown::export(&ranked, mode)
        }
        Format::Csv => {
            let ranked = scoring::rank(store.records(), mode, SortKey::Score);
            csv::export(&ranked, mode)?
        }
        // The JSON backup carries the raw unscored list.
        Format::Json => json::export(store.records())?,
    };

    let path = output.unwrap_or_else(|| PathBuf::from(format.export_filename(mode)));
    std::fs::write(&path, &content).map_err(|e| Error::OperationFailed {
        operation: "write_export_file".to_string(),
        cause: e.to_string(),
    })?;

    println!("Export completed:");
    println!("  Records:      {}", store.records().len());
    println!("  Format:       {} ({})", format, format.mime_type());
    println!("  Output:       {}", path.display());
    Ok(())
}

/// Executes the import command.
///
/// The file is read as text and must contain a JSON array of records, which
/// fully replaces the collection. Content of any other shape is dropped
/// silently: the collection stays untouched and the exit code stays zero.
pub fn cmd_import(config: &PrioConfig, file: PathBuf) -> Result<()> {
    let text = std::fs::read_to_string(&file).map_err(|e| Error::OperationFailed {
        operation: "read_import_file".to_string(),
        cause: e.to_string(),
    })?;

    let mut store = RecordStore::open(config.records_path());
    match json::import(&text) {
        Ok(records) => {
            let count = records.len();
            store.replace_all(records)?;
            println!("Import completed:");
            println!("  Records:      {count}");
        }
        Err(e) => {
            // Fail-silent contract: keep last-known-good state, exit zero.
            tracing::warn!(file = %file.display(), error = %e, "import dropped");
        }
    }

    Ok(())
}
