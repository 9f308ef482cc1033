use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::core::store::AuditLog;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::clock::Clock;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { dir } = cmd {
        let store = super::open_store(cfg)?;
        let now = store.clock().now();

        if let Some(path) = ExportLogic::export_csv(&store, dir.as_deref(), now)? {
            let target = path.display().to_string();
            store.audit("export", &target, "CSV export of all work entries");
            success(format!("Exported to {target}"));
        } else {
            warning("No work entries to export.");
        }
    }
    Ok(())
}
