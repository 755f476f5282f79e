use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use movie_client::{Controller, HttpMovieStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod commands;
mod config;
mod console;
mod surface;

use config::{load_settings, Settings, DEFAULT_CONFIG_FILE};
use console::Console;
use surface::TerminalSurface;

/// Terminal client for a movie list REST API.
#[derive(Parser, Debug)]
#[command(name = "movies")]
struct Args {
    /// TOML config file; ignored if missing.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Collection endpoint, e.g. http://localhost:3000/movies
    #[arg(long)]
    api_url: Option<String>,
    #[arg(long)]
    timeout_secs: Option<u64>,
    /// Also write the rendered list as HTML to this file on every redraw.
    #[arg(long)]
    html_out: Option<PathBuf>,
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn apply(self, settings: &mut Settings) {
        if let Some(v) = self.api_url {
            settings.api_url = v;
        }
        if let Some(v) = self.timeout_secs {
            settings.request_timeout_secs = Some(v);
        }
        if let Some(v) = self.html_out {
            settings.html_snapshot = Some(v);
        }
        if let Some(v) = self.log_level {
            settings.log_level = v;
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(&args.config)?;
    args.apply(&mut settings);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let store = HttpMovieStore::new(&settings.api_url, settings.request_timeout())
        .context("failed to set up the movie API client")?;
    info!(api_url = %settings.api_url, "starting movie client");

    let surface = TerminalSurface::new(io::stdout(), settings.html_snapshot.clone());
    let console = Console::new(io::stdin().lock(), io::stdout());
    let mut controller = Controller::new(store, surface, console);

    app::run(&mut controller).await
}
