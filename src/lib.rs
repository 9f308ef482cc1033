//! rworklog library root.
//! Exposes the CLI parser, the high-level run() function and the internal
//! modules (store, tracking engine, projection, terminal view).

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

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Toggle { .. } => cli::commands::toggle::handle(&cli.command, cfg),
        Commands::Confirm { .. } => cli::commands::confirm::handle(&cli.command, cfg),
        Commands::Timer { .. } => cli::commands::timer::handle(&cli.command, cfg),
        Commands::Show { .. } => cli::commands::show::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Setting { .. } => cli::commands::setting::handle(&cli.command, cfg),
        Commands::Tag { .. } => cli::commands::tag::handle(&cli.command, cfg),
        Commands::Project { .. } => cli::commands::project::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Session => cli::commands::session::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // Diagnostics are optional: a read-only home must not block the CLI.
    if !cli.test
        && let Err(e) = utils::logging::enable_logging(&Config::log_dir(), &cfg.log_level)
    {
        ui::messages::warning(format!("File logging disabled: {e}"));
    }

    tracing::debug!(database = %cfg.database, "configuration loaded");
    dispatch(&cli, &cfg)
}
