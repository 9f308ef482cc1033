use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::AuditLog;
use crate::core::work::WorkLogic;
use crate::errors::AppResult;
use crate::models::input::TimerInput;
use crate::ui::messages::success;
use crate::utils::format_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Timer {
        id,
        hours,
        minutes,
        seconds,
    } = cmd
    {
        let timer = TimerInput::parse(hours.as_deref(), minutes.as_deref(), seconds.as_deref())?;

        let store = super::open_store(cfg)?;
        let entry = WorkLogic::set_timer(&store, *id, timer)?;

        store.audit(
            "timer",
            &id.to_string(),
            &format!("Total set to {}s", entry.total_seconds),
        );
        success(format!(
            "Work #{id} total time set to {}.",
            format_time(entry.total_seconds)
        ));
    }
    Ok(())
}
