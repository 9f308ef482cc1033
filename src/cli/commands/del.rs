use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::{AuditLog, WorkStore};
use crate::core::work::WorkLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let store = super::open_store(cfg)?;
        let entry = store.find_by_id(*id)?;

        let prompt = format!(
            "Delete work #{} '{}'? This action is irreversible.",
            entry.id, entry.title
        );
        if !*yes && !super::ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        WorkLogic::delete(&store, *id)?;
        store.audit("del", &id.to_string(), &entry.title);
        success(format!("Work #{} has been deleted.", id));
    }
    Ok(())
}
