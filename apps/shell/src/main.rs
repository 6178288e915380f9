#![allow(clippy::print_stdout, clippy::print_stderr)]

mod args;
mod register;

use crate::args::{AppCommands, Cli};
use anyhow::{Context, anyhow};
use clap::Parser;
use nwatch::domain::config::{ClientConfig, LoggingConfig};
use nwatch::domain::constants::DEFAULT_CONFIG_FILE;
use nwatch::kernel::config::load_client_config;
use nwatch_logger::{LevelFilter, Logger};
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

#[nwatch_runtime::main(event_loop)]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config: ClientConfig =
        load_client_config(cli.config.as_ref()).context("Critical: Configuration is malformed")?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    // The subscriber depends on the loaded config, so the loader's own records are dropped.
    let _logger = init_logger(&config.logging)?;
    info!(
        source = %cli.config.as_deref().unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE)).display(),
        base_url = %config.api.base_url,
        "Configuration loaded"
    );

    match cli.command {
        AppCommands::Register(args) => register::run(&config, args).await,
    }
}

fn init_logger(logging: &LoggingConfig) -> anyhow::Result<Logger> {
    let level: LevelFilter = logging
        .level
        .parse()
        .map_err(|e| anyhow!("Invalid log level '{}': {e}", logging.level))?;

    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level);
    let builder = match &logging.filter {
        Some(filter) => builder.env_filter(filter),
        None => builder,
    };

    let logger = match &logging.directory {
        Some(directory) => builder.path(directory).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
