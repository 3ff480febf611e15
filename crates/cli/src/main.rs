//! gnome-shortcuts - List the keyboard shortcuts that actually fire on a GNOME desktop.
//!
//! Responsibilities:
//! - Parse command-line arguments and build the runtime configuration.
//! - Choose the keyboard layout (flag, environment, or interactive prompt).
//! - Collect the winning bindings via `shortcuts-core` and print them.
//!
//! Does NOT handle:
//! - Precedence resolution or schema parsing (see `crates/core`).
//! - Environment variable interpretation (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` values are visible to the loader.
//! - Logs go to stderr; stdout carries only the formatted shortcut list.

mod args;
mod error;
mod formatters;
mod interactive;

use std::time::Duration;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use formatters::{OutputFormat, get_formatter};
use shortcuts_config::{Config, ConfigLoader};
use shortcuts_core::{FsSchemaStore, GsettingsSource, collect_shortcuts};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::InvalidConfiguration.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run(cli).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

async fn run(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.output.parse()?;
    let config = build_config(&cli)?;

    let layout = match config.layout {
        Some(layout) => layout,
        None => interactive::select_layout()?,
    };
    tracing::debug!(%layout, schema_dirs = config.schema_dirs.len(), "starting collection");

    let source = GsettingsSource::new(&config.gsettings_bin, config.dump_timeout);
    let store = FsSchemaStore::new(config.schema_dirs);
    let records = collect_shortcuts(&source, store, layout, config.dump_timeout).await;

    let output = get_formatter(format).format_shortcuts(&records)?;
    print!("{}", output);
    Ok(())
}

/// Environment first, then command-line overrides.
fn build_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new()
        .from_env()
        .context("Failed to load configuration from environment")?;

    if let Some(layout) = cli.layout {
        loader = loader.with_layout(layout);
    }
    if let Some(secs) = cli.timeout {
        loader = loader.with_dump_timeout(Duration::from_secs(secs));
    }
    if let Some(ref bin) = cli.gsettings_bin {
        loader = loader.with_gsettings_bin(bin.clone());
    }
    for dir in &cli.schema_dir {
        loader = loader.with_schema_dir(dir.clone());
    }

    loader.build().context("Failed to build configuration")
}
