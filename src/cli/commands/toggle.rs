use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::AuditLog;
use crate::core::tracking::{ToggleOutcome, TrackingEngine};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::terminal::{Mode, TerminalView};
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Toggle { id, follow } = cmd {
        let store = super::open_store(cfg)?;
        let clock = store.clock().clone();
        let mode = if *follow { Mode::Follow } else { Mode::OneShot };
        let mut view = TerminalView::stdout(mode, &cfg.separator_char);
        let mut engine = TrackingEngine::new(store, clock);

        let outcome = engine.toggle_tracking(*id, &mut view)?;
        let store = engine.store();
        match &outcome {
            ToggleOutcome::Started(e) => {
                store.audit("start", &e.id.to_string(), &e.title);
                success(format!("Started tracking #{} '{}'.", e.id, e.title));
            }
            ToggleOutcome::Stopped(e) => {
                store.audit("stop", &e.id.to_string(), &e.title);
                success(format!("Stopped tracking #{} '{}'.", e.id, e.title));
            }
            ToggleOutcome::CopiedToToday { source_id, entry } => {
                store.audit(
                    "copy",
                    &entry.id.to_string(),
                    &format!("Copied #{source_id} to today: {}", entry.title),
                );
                success(format!(
                    "Copied #{source_id} to today as #{} and started tracking.",
                    entry.id
                ));
            }
        }

        if *follow && engine.is_live() {
            info("Following the live timer, press Enter to stop following (the timer keeps running).");
            let mut line = String::new();
            io::stdin().read_line(&mut line)?;
        }
        engine.end_live(&mut view);
    }
    Ok(())
}
