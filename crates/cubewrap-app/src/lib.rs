//! Report generation behind the `cubewrap` binary.

use std::fmt::Write;
use std::io;
use std::path::{Path, PathBuf};

use cubewrap_config::{
    CliArgs, Config, ConfigError, CurveConfig, OutputMode, TableConfig, default_config_dir,
};
use cubewrap_shading::fresnel::FresnelSetup;
use cubewrap_shading::{fresnel_report, srgb_report};
use cubewrap_table::{TableError, TableParams, WrapTable, render_table};

/// Anything that stops a report from being produced.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid table parameters: {0}")]
    Table(#[from] TableError),

    #[error("failed to write {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Label used in [`AppError::Output`] when the report goes to stdout.
pub const STDOUT_LABEL: &str = "<stdout>";

/// Directory holding `config.ron`: `--config` when given, else the platform default.
pub fn config_dir(args: &CliArgs) -> Result<PathBuf, AppError> {
    match &args.config {
        Some(dir) => Ok(dir.clone()),
        None => Ok(default_config_dir()?),
    }
}

/// Table construction constants from the config file.
#[must_use]
pub fn table_params(config: &TableConfig) -> TableParams {
    TableParams {
        face_width: config.face_width,
        probe_center: config.probe_center,
        probe_offset: config.probe_offset,
        probe_rest: config.probe_rest,
        band_min: config.band_min,
        band_max: config.band_max,
        band_mid: config.band_mid,
    }
}

/// Fresnel sweep settings from the config file.
#[must_use]
pub fn fresnel_setup(config: &CurveConfig) -> FresnelSetup {
    FresnelSetup {
        n1: config.fresnel_n1,
        n2: config.fresnel_n2,
        angle_steps: config.fresnel_angle_steps,
        integration_steps: config.fresnel_integration_steps,
    }
}

/// Build the wrap table described by `config` and render it.
pub fn table_section(config: &TableConfig) -> Result<String, AppError> {
    let params = table_params(config);
    let table = WrapTable::build(&params)?;
    if table != WrapTable::reference() {
        tracing::warn!("table differs from the reference construction");
    }
    Ok(render_table(&table, &config.symbol))
}

fn srgb_section(config: &CurveConfig) -> String {
    let mut out = String::from("// sRGB approximation error\n");
    for row in srgb_report(config.srgb_samples) {
        let _ = writeln!(out, "{row}");
    }
    out
}

fn fresnel_section(config: &CurveConfig) -> String {
    let setup = fresnel_setup(config);
    let mut out = format!(
        "// Fresnel error against GGX reference (n1 = {}, n2 = {})\n",
        setup.n1, setup.n2
    );
    for row in fresnel_report(&setup, &config.roughness) {
        let _ = writeln!(out, "{row}");
    }
    out
}

/// Produce the text selected by `config.output.mode`.
pub fn run(config: &Config) -> Result<String, AppError> {
    let curves = &config.curves;
    let text = match config.output.mode {
        OutputMode::Table => table_section(&config.table)?,
        OutputMode::Srgb => srgb_section(curves),
        OutputMode::Fresnel => fresnel_section(curves),
        OutputMode::All => [
            table_section(&config.table)?,
            srgb_section(curves),
            fresnel_section(curves),
        ]
        .join("\n"),
    };
    tracing::info!(mode = ?config.output.mode, bytes = text.len(), "report ready");
    Ok(text)
}

/// Write `text` to `path`, or to stdout when no path is configured.
///
/// A closed stdout (e.g. piping into `head`) is reported as
/// [`AppError::Output`] like any other write failure.
pub fn emit(text: &str, path: Option<&Path>) -> Result<(), AppError> {
    match path {
        Some(path) => {
            std::fs::write(path, text).map_err(|source| AppError::Output {
                path: path.display().to_string(),
                source,
            })?;
            tracing::info!("wrote {}", path.display());
            Ok(())
        }
        None => write_report(&mut io::stdout().lock(), text, STDOUT_LABEL),
    }
}

/// Write `text` to `out` and flush it.
pub fn write_report(out: &mut impl io::Write, text: &str, label: &str) -> Result<(), AppError> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|source| AppError::Output {
            path: label.to_string(),
            source,
        })
}
