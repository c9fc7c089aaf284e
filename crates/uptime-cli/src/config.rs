//! Configuration loading and management.
//!
//! Configuration only tunes diagnostics on stderr. It never changes what is
//! printed on stdout, and a broken configuration is ignored.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// `tracing` filter directive for stderr diagnostics (e.g. `debug`).
    /// Falls back to `RUST_LOG` when unset.
    pub log_filter: Option<String>,
}

impl Config {
    /// Loads configuration from `config_dir/config.toml`, then `UPTIME_*`
    /// environment variables.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_dir: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(dir) = config_dir {
            figment = figment.merge(Toml::file(dir.join("config.toml")));
        }

        // Load from environment variables (UPTIME_*)
        figment = figment.merge(Env::prefixed("UPTIME_"));

        figment.extract()
    }

    /// Loads configuration from the platform config directory, falling back
    /// to defaults on any error. The error is returned for logging once
    /// tracing is up.
    pub fn load_or_default() -> (Self, Option<figment::Error>) {
        match Self::load_from(dirs_config_path().as_deref()) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }
}

/// Returns the platform-specific config directory for uptime.
///
/// On Linux: `~/.config/uptime`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("uptime"))
}
