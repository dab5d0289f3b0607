//! Configuration for the cube wrap table tools.
//!
//! Settings persist to disk as RON and can be overridden from the command
//! line via clap. Missing fields fall back to defaults, so older files keep
//! loading as settings are added.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, CurveConfig, DebugConfig, OutputConfig, OutputMode, TableConfig, default_config_dir,
};
pub use error::ConfigError;
