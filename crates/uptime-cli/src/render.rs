//! Output formatting for station results.

use std::fmt::Write;

use anyhow::Result;
use uptime_core::StationUptime;

/// Literal printed on stdout for every failure.
pub const ERROR_OUTPUT: &str = "ERROR";

/// Formats results as `<station_id> <uptime_percent>` lines.
pub fn format_text(results: &[StationUptime]) -> Result<String> {
    let mut output = String::new();
    for station in results {
        writeln!(output, "{} {}", station.station_id, station.uptime_percent)?;
    }
    Ok(output)
}
