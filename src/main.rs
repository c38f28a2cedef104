use anyhow::Result;
use clap::Parser;
use kanban::{config::GlobalConfig, logging, tui};
use tracing::info;

#[derive(Parser)]
#[command(name = "kanban", version, about = "Terminal kanban board")]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    let config = GlobalConfig::load()?;
    // Held until exit so buffered log lines are flushed
    let _log_guard = logging::init(&config.log)?;

    info!(version = env!("CARGO_PKG_VERSION"), "kanban starting");
    let result = tui::run(&config);
    match &result {
        Ok(()) => info!("kanban exited"),
        Err(e) => tracing::error!(error = %e, "kanban failed"),
    }
    result
}
