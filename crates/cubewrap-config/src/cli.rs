//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, OutputMode};

/// Cube wrap table generator and shading-curve checks.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "cubewrap", about = "Cube map seam wrap table generator")]
pub struct CliArgs {
    /// Report to produce.
    #[arg(long, value_enum)]
    pub mode: Option<OutputMode>,

    /// Write the report to this file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Name of the emitted C++ array.
    #[arg(long)]
    pub symbol: Option<String>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(mode) = args.mode {
            self.output.mode = mode;
        }
        if let Some(ref path) = args.output {
            self.output.path = Some(path.clone());
        }
        if let Some(ref symbol) = args.symbol {
            self.table.symbol = symbol.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
