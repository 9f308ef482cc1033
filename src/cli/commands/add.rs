use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::AuditLog;
use crate::core::work::WorkLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        project,
        tag,
    } = cmd
    {
        let store = super::open_store(cfg)?;
        let entry = WorkLogic::create(&store, title, project.as_deref(), tag.as_deref())?;

        store.audit("add", &entry.id.to_string(), &entry.title);
        success(format!("Work #{} '{}' created.", entry.id, entry.title));
    }
    Ok(())
}
