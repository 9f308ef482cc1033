use crate::config::Config;
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::clock::system_clock;
use std::io::{self, Write};

pub mod add;
pub mod config;
pub mod confirm;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod project;
pub mod session;
pub mod setting;
pub mod show;
pub mod tag;
pub mod timer;
pub mod toggle;

pub(crate) fn open_store(cfg: &Config) -> AppResult<SqliteStore> {
    SqliteStore::open(&cfg.database, system_clock())
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
