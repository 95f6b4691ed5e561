//! voldrop library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod report;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once
    let mut cfg = Config::load();

    // apply data-file overrides from the command line
    if let Some(workers) = &cli.workers {
        cfg.workers_file = workers.clone();
    }
    if let Some(shifts) = &cli.shifts {
        cfg.shifts_file = shifts.clone();
    }

    dispatch(&cli, &cfg)
}
