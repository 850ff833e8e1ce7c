//! Configuration display command handler.

use prio::config::PrioConfig;
use prio::Result;

/// Shows the effective configuration.
pub fn cmd_config(config: &PrioConfig) -> Result<()> {
    println!("Configuration:");
    println!("  Data dir:     {}", config.data_dir.display());
    println!("  Records:      {}", config.records_path().display());
    println!("  PRD:          {}", config.prd_path().display());
    println!("  Default mode: {}", config.default_mode);
    Ok(())
}
