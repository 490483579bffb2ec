use anyhow::Context;
use tracing_subscriber::EnvFilter;

use zenfocus::{Config, window};

fn main() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zenfocus=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    window::run(Config::default()).context("focus window failed")
}
