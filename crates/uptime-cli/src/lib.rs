//! Charging station uptime CLI library.
//!
//! This crate provides the CLI interface over `uptime-core`.

mod cli;
mod config;
pub mod render;

pub use cli::Cli;
pub use config::Config;
