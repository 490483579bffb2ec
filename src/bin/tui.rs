use anyhow::Context;
use tracing_subscriber::EnvFilter;

use zenfocus::{Config, tui};

fn main() -> anyhow::Result<()> {
    // Logs share the terminal with the UI, so stay quiet unless asked
    // (and redirect stderr when asking).
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tui::run_tui(Config::default()).context("terminal session failed")
}
