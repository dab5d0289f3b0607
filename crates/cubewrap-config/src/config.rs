//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const APP_NAME: &str = "cubewrap";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Wrap table construction.
    pub table: TableConfig,
    /// What to print and where.
    pub output: OutputConfig,
    /// sRGB and Fresnel comparison sampling.
    pub curves: CurveConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Probe construction constants, in pixels of the reference face.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TableConfig {
    /// Width of the reference face the table is derived on.
    pub face_width: u32,
    /// Centre the probe offsets are measured from.
    pub probe_center: f64,
    /// Distance from the centre to each probe.
    pub probe_offset: f64,
    /// Coordinate on the axis a probe does not move along.
    pub probe_rest: f64,
    /// Interior band start (inclusive).
    pub band_min: f64,
    /// Interior band end (exclusive).
    pub band_max: f64,
    /// Half-face threshold.
    pub band_mid: f64,
    /// Name of the emitted C++ array.
    pub symbol: String,
}

/// Which report to produce.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputMode {
    /// The cube wrap table as a C++ array.
    #[default]
    Table,
    /// sRGB approximation errors.
    Srgb,
    /// Fresnel approximation errors.
    Fresnel,
    /// Everything, one section after another.
    All,
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub mode: OutputMode,
    /// Write to this file instead of stdout.
    pub path: Option<PathBuf>,
}

/// Sampling of the curve comparisons.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CurveConfig {
    /// Intervals sampled across `[0, 1]` for the sRGB curves.
    pub srgb_samples: usize,
    /// Intervals sampled between 0° and 90° view angle.
    pub fresnel_angle_steps: usize,
    /// Light directions per GGX integration.
    pub fresnel_integration_steps: usize,
    /// Refractive index on the view side.
    pub fresnel_n1: f64,
    /// Refractive index of the surface.
    pub fresnel_n2: f64,
    /// Roughness values to sweep.
    pub roughness: Vec<f64>,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Directory for JSON log files in debug builds.
    pub log_dir: Option<PathBuf>,
}

// --- Default implementations ---

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            face_width: 256,
            probe_center: 127.75,
            probe_offset: 129.25,
            probe_rest: 64.0,
            band_min: 32.0,
            band_max: 224.0,
            band_mid: 128.0,
            symbol: "DDSTexture16::cubeWrapTable".to_string(),
        }
    }
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            srgb_samples: 1024,
            fresnel_angle_steps: 90,
            fresnel_integration_steps: 4096,
            fresnel_n1: 1.0,
            fresnel_n2: 1.5,
            roughness: vec![0.03125, 0.1875, 0.34375, 0.5, 0.65625, 0.8125, 0.96875],
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

/// Platform config directory for the tools, e.g. `~/.config/cubewrap` on Linux.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join(APP_NAME))
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Re-read the file: `Some(new_config)` if it differs from `self`, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
