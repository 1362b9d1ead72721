mod cli;
mod commands;

use crate::cli::Cli;
use anyhow::Context;
use clap::Parser;
use netkit::domain::config::AppConfig;
use netkit::kernel::config::load_config;
use netkit_logger::{LevelFilter, Logger};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg: AppConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    if let Some(path) = cli.catalog {
        cfg.catalog.path = Some(path);
    }

    // Reports go to stdout; keep stderr for problems only.
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).level(LevelFilter::WARN).init()?;

    commands::run(cli.command, &cfg.catalog, &mut std::io::stdout().lock())
}
