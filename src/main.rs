// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Video catalogue and playlist simulator.
//!
//! Runs a command prompt against an in-memory session. Commands are read from
//! standard input one per line and results are written to standard output;
//! logging goes to standard error.
//!
//! The application follows a setup-run pattern: configuration and command
//! line flags decide which catalog to load, then the [`Commander`] loop runs
//! until `EXIT` or end of input.

use std::{
    io::{self, BufRead, StdinLock, Stdout, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use clipdeck::{
    Session, VideoCatalog, VideoLibrary,
    commander::{Commander, Console},
    config::{self, AppConfig},
};

#[derive(Parser, Debug)]
#[command(name = "clipdeck", version, about = "Video catalogue and playlist simulator")]
struct Cli {
    /// Catalog file to load instead of the configured one.
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Seed for random play.
    #[arg(long)]
    seed: Option<u64>,

    /// Log filter, e.g. `debug` or `clipdeck=trace`.
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Store the effective settings in the configuration file.
    #[arg(long)]
    save_config: bool,
}

/// Console over the process's standard streams.
struct StdConsole {
    stdin: StdinLock<'static>,
    stdout: Stdout,
}

impl StdConsole {
    fn new() -> Self {
        Self {
            stdin: io::stdin().lock(),
            stdout: io::stdout(),
        }
    }
}

impl Console for StdConsole {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.stdout, "{line}").context("Failed to write output")
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.stdout, "{prompt}").context("Failed to write prompt")?;
        self.stdout.flush().context("Failed to flush output")?;

        let mut buffer = String::new();
        let read = self
            .stdin
            .read_line(&mut buffer)
            .context("Failed to read input")?;

        if read == 0 {
            return Ok(None);
        }

        Ok(Some(buffer.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// The entry point of the application.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = config::load_config();

    if let Some(catalog) = cli.catalog {
        config.catalog_file = Some(catalog);
    }
    if let Some(log_level) = cli.log_level {
        config.log_level = log_level;
    }

    init_logging(&config);

    if cli.save_config {
        config::save_config(&config).context("Failed to save configuration")?;
    }

    let library = load_catalog(&config)?;
    if library.is_empty() {
        warn!("Catalog has no videos, random play and search will find nothing");
    }
    info!(videos = library.len(), "Catalog ready");

    let mut session = match cli.seed {
        Some(seed) => Session::with_seed(library, seed),
        None => Session::new(library),
    };

    let mut console = StdConsole::new();
    console.write_line("Welcome to clipdeck, type HELP for a list of available commands.")?;

    Commander::new(config.prompt.clone())
        .run(&mut session, &mut console)
        .context("Application error occurred")?;

    console.write_line("Goodbye!")
}

/// Sends `tracing` output to standard error so it never mixes with command
/// output. `RUST_LOG` takes precedence over the configured level.
fn init_logging(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

fn load_catalog(config: &AppConfig) -> Result<VideoLibrary> {
    match &config.catalog_file {
        Some(path) => VideoLibrary::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => Ok(VideoLibrary::builtin()),
    }
}
