//! Record command handlers.

use prio::config::PrioConfig;
use prio::io::formats::markdown;
use prio::models::{Record, RecordId, RecordPatch, parse_impact};
use prio::scoring::{self, ScoreMode, SortKey};
use prio::store::RecordStore;
use prio::{Error, Result};

fn resolve_mode(config: &PrioConfig, mode: Option<&str>) -> Result<ScoreMode> {
    mode.map_or(Ok(config.default_mode), str::parse)
}

/// Executes the add command.
pub fn cmd_add(
    config: &PrioConfig,
    title: String,
    owner: Option<String>,
    reach: f64,
    impact: String,
    confidence: f64,
    effort: f64,
) -> Result<()> {
    let record = Record {
        id: RecordId::generate(),
        title,
        owner: owner.unwrap_or_default(),
        reach,
        impact: parse_impact(&impact)?,
        confidence,
        effort,
    };
    let id = record.id.clone();

    let mut store = RecordStore::open(config.records_path());
    store.add(record)?;

    println!("Record added:");
    println!("  ID: {id}");
    Ok(())
}

/// Executes the edit command.
///
/// Each provided flag replaces exactly one field; the id never changes.
#[allow(clippy::too_many_arguments)]
pub fn cmd_edit(
    config: &PrioConfig,
    id: String,
    title: Option<String>,
    owner: Option<String>,
    reach: Option<f64>,
    impact: Option<String>,
    confidence: Option<f64>,
    effort: Option<f64>,
) -> Result<()> {
    let impact = impact.as_deref().map(parse_impact).transpose()?;

    let patch = RecordPatch {
        title,
        owner,
        reach,
        impact,
        confidence,
        effort,
    };
    if patch.is_empty() {
        return Err(Error::InvalidInput(
            "nothing to change: pass at least one field flag".to_string(),
        ));
    }

    let mut store = RecordStore::open(config.records_path());
    store.update(&RecordId::new(id), &patch)?;

    println!("Record updated.");
    Ok(())
}

/// Executes the remove command.
pub fn cmd_remove(config: &PrioConfig, id: String) -> Result<()> {
    let mut store = RecordStore::open(config.records_path());
    store.remove(&RecordId::new(id))?;

    println!("Record removed.");
    Ok(())
}

/// Executes the list command: prints the ranked Markdown table.
pub fn cmd_list(config: &PrioConfig, mode: Option<String>, sort: Option<String>) -> Result<()> {
    let mode = resolve_mode(config, mode.as_deref())?;
    let sort = sort.as_deref().map_or(Ok(SortKey::Score), str::parse)?;

    let store = RecordStore::open(config.records_path());
    let ranked = scoring::rank(store.records(), mode, sort);

    println!("{}", markdown::export(&ranked, mode));
    Ok(())
}
