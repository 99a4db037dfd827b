//! bitacora library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! incident-log view model (store, filter, sort/window policy, aggregates).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod source;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Meta { .. } => cli::commands::meta::handle(&cli.command, cfg),
        Commands::Week { .. } => cli::commands::week::handle(&cli.command),
        Commands::Total { .. } => cli::commands::total::handle(&cli.command),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Top { .. } => cli::commands::top::handle(&cli.command, cfg),
        Commands::Trend { .. } => cli::commands::trend::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Report { .. } => cli::commands::report::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once; command-line paths win over it
    let mut cfg = Config::load()?;

    if let Some(data) = &cli.data {
        cfg.data_file = data.clone();
    }
    if let Some(db) = &cli.db {
        cfg.log_database = db.clone();
    }

    dispatch(&cli, &cfg)
}
