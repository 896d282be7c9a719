//! rAttendance library root.
//! Exposes the clock state machine, its collaborators (store, identity,
//! notifications), the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use crate::core::clock::ClockAction;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Login { .. } | Commands::Logout | Commands::Whoami => {
            cli::commands::session::handle(&cli.command, cfg)
        }
        Commands::In => cli::commands::clock::handle(cli, cfg, ClockAction::ClockIn),
        Commands::LunchStart => cli::commands::clock::handle(cli, cfg, ClockAction::StartLunch),
        Commands::LunchEnd => cli::commands::clock::handle(cli, cfg, ClockAction::EndLunch),
        Commands::Out => cli::commands::clock::handle(cli, cfg, ClockAction::ClockOut),
        Commands::Status => cli::commands::status::handle(cli, cfg),
        Commands::List { .. } => cli::commands::list::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once and shared by every handler
    let mut cfg = Config::load()?;

    // command-line database override
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
