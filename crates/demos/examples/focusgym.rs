//! Focus gym: a form of widgets driven by the directional focus navigator.

use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use clap::Parser;
use demos::{backend::runloop, focusgym::FocusGym};
use tracing::info;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::EnvFilter;
use trellis::Config;

/// Move focus around a form of widgets.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// TOML file with key bindings and log settings
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// Log filter, overriding the configured level
    #[clap(short, long)]
    log_level: Option<String>,

    /// Directory for focusgym.log; logging is off without it
    #[clap(long)]
    log_dir: Option<PathBuf>,
}

/// Send tracing output to a log file, since the terminal belongs to the UI.
fn configure_logging(dir: &Path, filter: &str) -> anyhow::Result<WorkerGuard> {
    let appender = rolling::never(dir, "focusgym.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter).context("invalid log filter")?)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("logging setup failed: {e}"))?;
    Ok(guard)
}

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let filter = match args.log_level {
        Some(f) => f,
        None => config.log_level()?.to_string().to_lowercase(),
    };
    let _guard = match &args.log_dir {
        Some(dir) => Some(configure_logging(dir, &filter)?),
        None => None,
    };

    let gym = FocusGym::new()?;
    let ui = gym.ui.with_input_map(config.input_map()?);
    info!("focusgym starting");
    runloop(ui)?;
    Ok(())
}
