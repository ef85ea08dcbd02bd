//! clocklog library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher.
///
/// The store is opened once here and handed to every command that needs it.
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { .. } = &cli.command {
        return cli::commands::config::handle(&cli.command, cfg);
    }

    let mut pool = db::initialize::open(cfg)?;

    match &cli.command {
        Commands::In { .. } => cli::commands::clock_in::handle(&cli.command, cfg, &mut pool),
        Commands::Out => cli::commands::clock_out::handle(&cli.command, cfg, &mut pool),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg, &mut pool),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg, &mut pool),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, cfg, &mut pool),
        Commands::History => cli::commands::history::handle(&cli.command, cfg, &mut pool),
        // handled before the store is opened
        Commands::Config { .. } => Ok(()),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
