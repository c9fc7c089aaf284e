use std::ffi::OsString;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use uptime_cli::render::{self, ERROR_OUTPUT};
use uptime_cli::{Cli, Config};
use uptime_core::{Fleet, compute_uptime};

fn init_tracing(config: &Config) {
    let filter = config
        .log_filter
        .as_deref()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(EnvFilter::from_default_env);
    // stdout carries only results, so diagnostics go to stderr.
    // try_init avoids a panic if tracing is already initialized.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Reads, validates and aggregates the report named by the sole argument.
fn run(args: Vec<OsString>) -> Result<String> {
    if args.len() != 2 {
        anyhow::bail!(
            "expected exactly one argument, got {}",
            args.len().saturating_sub(1)
        );
    }
    let cli = Cli::try_parse_from(args).context("invalid arguments")?;

    let input = std::fs::read_to_string(&cli.path)
        .with_context(|| format!("failed to read {}", cli.path.display()))?;
    let fleet = Fleet::parse(&input)
        .with_context(|| format!("invalid report {}", cli.path.display()))?;
    let results = compute_uptime(&fleet);

    render::format_text(&results)
}

fn main() {
    let (config, config_error) = Config::load_or_default();
    init_tracing(&config);
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "ignoring invalid configuration");
    }
    tracing::debug!(?config, "loaded configuration");

    match run(std::env::args_os().collect()) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            tracing::debug!("{err:#}");
            println!("{ERROR_OUTPUT}");
        }
    }
}
