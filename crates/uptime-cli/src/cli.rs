//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Charging station uptime calculator.
///
/// Takes exactly one argument, the path to a report. Help and version flags
/// are disabled so that every other invocation is a usage error.
#[derive(Debug, Parser)]
#[command(
    name = "uptime",
    about,
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Path to the availability report.
    #[arg(allow_hyphen_values = true)]
    pub path: PathBuf,
}
