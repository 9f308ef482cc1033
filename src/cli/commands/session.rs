use crate::config::Config;
use crate::core::tracking::TrackingEngine;
use crate::errors::AppResult;
use crate::ui::session::Session;
use crate::ui::terminal::{Mode, TerminalView};
use std::io;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = super::open_store(cfg)?;
    let clock = store.clock().clone();
    let engine = TrackingEngine::new(store, clock);
    let view = TerminalView::stdout(Mode::Interactive, &cfg.separator_char);

    let stdin = io::stdin();
    Session::new(engine, view, stdin.lock()).run()
}
