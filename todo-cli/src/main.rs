//! `todo` - command-line front end for the flat-file task tracker.
//!
//! Each invocation loads the task file, applies one command and writes
//! the file back when the command changed the list.

mod app;
mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use todo_kernel::infrastructure::config::Settings;
use todo_kernel::infrastructure::telemetry::TelemetryBuilder;
use tracing::info;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = match cli.config.as_deref() {
        Some(path) => Settings::from_file(path),
        None => Settings::new(),
    }
    .context("Failed to load configuration")?;

    TelemetryBuilder::from_settings(env!("CARGO_PKG_NAME"), &settings.telemetry).init()?;

    let path = cli.file.unwrap_or(settings.store.path);
    info!(path = %path.display(), command = ?cli.command, "Running command");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::run(cli.command, &path, &mut out)?;
    out.flush()?;
    Ok(())
}
