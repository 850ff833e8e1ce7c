//! Binary entry point for prio.
//!
//! This binary provides the CLI interface for the prioritization table and
//! the PRD generator.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow prints in the main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]

mod commands;

use clap::{Parser, Subcommand};
use prio::config::PrioConfig;
use prio::observability;
use std::path::PathBuf;
use std::process::ExitCode;

/// Prio - a RICE/ICE prioritization table and PRD drafting tool.
#[derive(Parser)]
#[command(name = "prio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Add a record.
    Add {
        /// Record title.
        title: String,

        /// Owner label.
        #[arg(short, long)]
        owner: Option<String>,

        /// Estimated users/events affected per period.
        #[arg(short, long, default_value = "0")]
        reach: f64,

        /// Impact level: 0.25, 0.5, 1, 2, 3 (or minimal/low/medium/high/massive).
        #[arg(short, long, default_value = "1")]
        impact: String,

        /// Confidence percentage.
        #[arg(long, default_value = "50")]
        confidence: f64,

        /// Effort estimate.
        #[arg(short, long, default_value = "1")]
        effort: f64,
    },

    /// Edit one or more fields of a record.
    Edit {
        /// Record id.
        id: String,

        /// New title.
        #[arg(short, long)]
        title: Option<String>,

        /// New owner label.
        #[arg(short, long)]
        owner: Option<String>,

        /// New reach.
        #[arg(short, long)]
        reach: Option<f64>,

        /// New impact level.
        #[arg(short, long)]
        impact: Option<String>,

        /// New confidence percentage.
        #[arg(long)]
        confidence: Option<f64>,

        /// New effort estimate.
        #[arg(short, long)]
        effort: Option<f64>,
    },

    /// Remove a record.
    Remove {
        /// Record id.
        id: String,
    },

    /// Print the ranked table.
    List {
        /// Scoring mode: rice or ice.
        #[arg(short, long)]
        mode: Option<String>,

        /// Sort key: score, title, or owner.
        #[arg(short, long)]
        sort: Option<String>,
    },

    /// Export the table to a file.
    Export {
        /// Output format: markdown, csv, or json.
        #[arg(short, long)]
        format: Option<String>,

        /// Scoring mode: rice or ice.
        #[arg(short, long)]
        mode: Option<String>,

        /// Output path (defaults to the deterministic filename).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace the collection from a JSON file.
    Import {
        /// File containing a JSON array of records.
        file: PathBuf,
    },

    /// Manage the PRD document.
    Prd {
        /// PRD subcommand.
        #[command(subcommand)]
        action: PrdAction,
    },

    /// Show the effective configuration.
    Config,
}

/// PRD subcommands.
#[derive(Subcommand)]
enum PrdAction {
    /// Set the document title.
    Title {
        /// New title.
        title: String,
    },

    /// Replace a section's bullet items.
    Set {
        /// Section name (problem, goals, non-goals, personas, assumptions,
        /// metrics, requirements, risks).
        section: String,

        /// Bullet items.
        items: Vec<String>,
    },

    /// Print the rendered document.
    Show,

    /// Write the rendered document to a file.
    Export {
        /// Output path (defaults to the slugified title).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Main entry point.
fn main() -> ExitCode {
    let cli = Cli::parse();

    observability::init(cli.verbose);

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run_command(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the selected command.
fn run_command(cli: Cli, config: &PrioConfig) -> prio::Result<()> {
    match cli.command {
        Commands::Add {
            title,
            owner,
            reach,
            impact,
            confidence,
            effort,
        } => commands::cmd_add(config, title, owner, reach, impact, confidence, effort),

        Commands::Edit {
            id,
            title,
            owner,
            reach,
            impact,
            confidence,
            effort,
        } => commands::cmd_edit(config, id, title, owner, reach, impact, confidence, effort),

        Commands::Remove { id } => commands::cmd_remove(config, id),

        Commands::List { mode, sort } => commands::cmd_list(config, mode, sort),

        Commands::Export {
            format,
            mode,
            output,
        } => commands::cmd_export(config, format, mode, output),

        Commands::Import { file } => commands::cmd_import(config, file),

        Commands::Prd { action } => match action {
            PrdAction::Title { title } => commands::cmd_prd_title(config, title),
            PrdAction::Set { section, items } => commands::cmd_prd_set(config, section, items),
            PrdAction::Show => commands::cmd_prd_show(config),
            PrdAction::Export { output } => commands::cmd_prd_export(config, output),
        },

        Commands::Config => commands::cmd_config(config),
    }
}

/// Loads configuration.
fn load_config(path: Option<&str>) -> prio::Result<PrioConfig> {
    // If a path is provided, load from that file
    if let Some(config_path) = path {
        return PrioConfig::load_from_file(std::path::Path::new(config_path));
    }

    // Environment override for config path
    if let Ok(config_path) = std::env::var("PRIO_CONFIG_PATH") {
        if !config_path.trim().is_empty() {
            return PrioConfig::load_from_file(std::path::Path::new(&config_path));
        }
    }

    // Otherwise, load from default location
    Ok(PrioConfig::load_default())
}
