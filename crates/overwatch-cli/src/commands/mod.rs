//! Command implementations

mod config;
mod restore;
mod route;
mod scan;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use overwatch_core::config::{CliConfigOverrides, LayeredConfig};

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Restore(args) => restore::execute(args, &config, &output).await,
        Commands::Scan(args) => scan::execute(args, &config, &output),
        Commands::Route(args) => route::execute(args, &output),
        Commands::Config => config::execute(&config, &output),
    }
}

/// Build the layered configuration: defaults, then file, environment, and flags
fn load_config(cli: &Cli) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    if let Some(path) = &cli.config {
        tracing::debug!(path = %path.display(), "Loading config file");
        config = config
            .load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?;
    }

    let mut config = config.load_from_env();
    config.update_from_cli(CliConfigOverrides {
        scanned_area_crs: cli.scanned_area_crs,
        ..Default::default()
    });

    Ok(config)
}
