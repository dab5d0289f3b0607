//! The `cubewrap` command-line entry point.

use clap::Parser;
use cubewrap_app::{config_dir, emit, run};
use cubewrap_config::{CliArgs, Config};

fn main() {
    let args = CliArgs::parse();

    // Loading happens before the subscriber exists, so the outcome is
    // reported again once logging is up.
    let loaded = config_dir(&args).and_then(|dir| {
        let existed = dir.join("config.ron").exists();
        let mut config = Config::load_or_create(&dir)?;
        config.apply_cli_overrides(&args);
        Ok((dir, existed, config))
    });
    let (dir, existed, config) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    cubewrap_log::init_logging(
        config.debug.log_dir.as_deref(),
        cfg!(debug_assertions),
        Some(&config),
    );
    if existed {
        tracing::info!("loaded config from {}", dir.join("config.ron").display());
    } else {
        tracing::info!("created default config at {}", dir.join("config.ron").display());
    }

    let result = run(&config).and_then(|text| emit(&text, config.output.path.as_deref()));
    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
