use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::store::AuditLog;
use crate::db::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::clock::system_clock;

/// Handle the `init` command
///
/// Creates the config directory and file (skipped with `--test`), the
/// SQLite database and runs every pending migration.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    println!("⚙️  Initializing rworklog…");
    println!("🗄️  Database   : {}", &cfg.database);

    let store = SqliteStore::open(&cfg.database, system_clock())?;
    store.audit(
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &cfg.database),
    );

    success(format!("Database initialized at {}", &cfg.database));
    Ok(())
}
