use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use paperback::config::Config;
use paperback::data::BookStore;
use paperback::ui;

#[derive(Debug, Parser)]
#[command(name = "paperback", version, about = "Terminal bookstore client")]
struct Args {
    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write tracing output to this file. The terminal belongs to the UI,
    /// so logging is off unless a file is given.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let file = File::create(path)
            .with_context(|| format!("failed to create log file '{}'", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(file)
            .with_ansi(false)
            .init();
    }

    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => Config::load().context("failed to load config")?,
    };
    info!(tick_rate_ms = config.ui.tick_rate_ms, "config loaded");

    let store = BookStore::new(config.data.catalog_file.clone());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_time()
        .build()
        .context("failed to start async runtime")?;

    ui::run(runtime.handle(), &config, store).context("interface error")?;

    Ok(())
}
