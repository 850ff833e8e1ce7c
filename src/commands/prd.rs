//! PRD command handlers.

use std::path::PathBuf;

use prio::config::PrioConfig;
use prio::models::PrdSection;
use prio::prd;
use prio::store::PrdStore;
use prio::{Error, Result};

fn parse_section(s: &str) -> Result<PrdSection> {
    PrdSection::parse(s).ok_or_else(|| {
        let names: Vec<&str> = PrdSection::all().iter().map(PrdSection::as_str).collect();
        Error::InvalidInput(format!(
            "unknown section '{s}', expected one of: {}",
            names.join(", ")
        ))
    })
}

/// Sets the document title.
pub fn cmd_prd_title(config: &PrioConfig, title: String) -> Result<()> {
    let mut store = PrdStore::open(config.prd_path());
    store.set_title(title)?;

    println!("Title updated.");
    Ok(())
}

/// Replaces a section's bullet items.
pub fn cmd_prd_set(config: &PrioConfig, section: String, items: Vec<String>) -> Result<()> {
    let section = parse_section(&section)?;

    let mut store = PrdStore::open(config.prd_path());
    store.set_section(section, items)?;

    println!("Section '{section}' updated.");
    Ok(())
}

/// Prints the rendered document.
pub fn cmd_prd_show(config: &PrioConfig) -> Result<()> {
    let store = PrdStore::open(config.prd_path());
    print!("{}", prd::render_markdown(store.document()));
    Ok(())
}

/// Writes the rendered document to a file.
///
/// Without `--output` the filename is the slugified title.
pub fn cmd_prd_export(config: &PrioConfig, output: Option<PathBuf>) -> Result<()> {
    let store = PrdStore::open(config.prd_path());
    let doc = store.document();

    let path = output.unwrap_or_else(|| PathBuf::from(prd::export_filename(doc)));
    std::fs::write(&path, prd::render_markdown(doc)).map_err(|e| Error::OperationFailed {
        operation: "write_prd_file".to_string(),
        cause: e.to_string(),
    })?;

    println!("PRD exported:");
    println!("  Output:       {}", path.display());
    Ok(())
}
