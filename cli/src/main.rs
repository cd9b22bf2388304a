//! Expression demo - builds the sample text chains and prints how each renders.
//!
//! ```text
//! main() -> DemoConfig::load() -> demo::run(settings, separator) -> stdout
//! ```
//!
//! Logs go to stderr, filtered by `RUST_LOG` (default `info`).

use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use motion_expression_cli::{DemoConfig, demo};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    // Keep stdout for the rendered samples.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let config = match DemoConfig::load() {
        Ok(Some(config)) => {
            if let Some(path) = DemoConfig::path() {
                tracing::info!(path = %path.display(), "Loaded config");
            }
            config
        }
        Ok(None) => DemoConfig::default(),
        Err(err) => {
            tracing::warn!("Using default config: {err}");
            DemoConfig::default()
        }
    };

    let lines = demo::run(config.chain, &config.demo.separator)
        .context("sample vocabulary failed to chain")?;
    for line in lines {
        println!("{:>8}: {}", line.label, line.rendered);
    }

    Ok(())
}
