use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::AuditLog;
use crate::core::work::WorkLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Confirm { id } = cmd {
        let store = super::open_store(cfg)?;
        let confirmed = WorkLogic::toggle_confirmed(&store, *id)?;

        store.audit("confirm", &id.to_string(), &format!("confirmed = {confirmed}"));
        if confirmed {
            success(format!("Work #{id} marked as confirmed."));
        } else {
            success(format!("Work #{id} marked as not confirmed."));
        }
    }
    Ok(())
}
