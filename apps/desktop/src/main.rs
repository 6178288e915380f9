#![windows_subsystem = "windows"]

use anyhow::Context;
use nwatch::kernel::config::load_client_config;
use nwatch_desktop::{App, DesktopApp};
use nwatch_logger::{LevelFilter, Logger};

fn main() -> anyhow::Result<()> {
    let config = load_client_config(None::<&str>).context("Critical: Configuration is malformed")?;

    let _logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(config.logging.level.parse().unwrap_or(LevelFilter::INFO))
        .init()?;

    DesktopApp::new().with_config(config).launch(App);

    Ok(())
}
