//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dns_kv` library that handles:
//! - Command-line argument parsing (flags fall back to `DNS_KV_*` environment variables)
//! - Logger initialization
//! - Mapping errors to exit statuses
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use dns_kv::config::{Opt, EXIT_SUCCESS};
use dns_kv::initialization::init_logger_with;
use dns_kv::{run, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::from(Opt::parse());

    // Initialize logger based on config
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let mut stdout = std::io::stdout().lock();
    match run(&config, &mut stdout).await {
        Ok(()) => process::exit(EXIT_SUCCESS),
        Err(e) => {
            let code = e.exit_code();
            log::debug!("Exiting with status {code}");
            eprintln!("dns_kv error: {:#}", anyhow::Error::from(e));
            process::exit(code);
        }
    }
}
