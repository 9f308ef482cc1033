//! `WorkView` implementation that draws on a terminal stream.
//!
//! All writes go through one mutex so the tick thread never interleaves
//! with a full redraw.

use crate::core::projection::Projection;
use crate::core::ticker::TickSink;
use crate::core::view::{FocusTarget, WorkView};
use crate::errors::AppError;
use crate::models::WorkEntry;
use crate::ui::messages;
use crate::ui::render::render_table;
use crate::utils::colors::{GREEN, paint};
use crate::utils::time::format_time;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

pub type SharedOut = Arc<Mutex<Box<dyn Write + Send>>>;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const SAVE_CURSOR: &str = "\x1b7";
const RESTORE_CURSOR: &str = "\x1b8";
const STATUS_LINE: &str = "\x1b[1;1H\x1b[2K";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the table once; the live timer is not shown.
    OneShot,
    /// Print the table, then keep rewriting one timer line.
    Follow,
    /// Full-screen redraws with the timer pinned on the first line.
    Interactive,
}

pub struct TerminalView {
    out: SharedOut,
    mode: Mode,
    rule: String,
    projection: Option<Projection>,
    selected: Option<usize>,
    status: Arc<Mutex<String>>,
    message: Option<String>,
    footer: String,
}

fn write_locked(out: &SharedOut, text: &str) {
    let mut w = out.lock().unwrap_or_else(PoisonError::into_inner);
    if let Err(e) = w.write_all(text.as_bytes()).and_then(|_| w.flush()) {
        tracing::warn!(error = %e, "terminal write failed");
    }
}

fn idle_status() -> String {
    format!("⏱  {}", format_time(0))
}

fn live_status(title: &str, seconds: i64) -> String {
    format!("⏱  {}  {}", paint(&format_time(seconds), GREEN), title)
}

impl TerminalView {
    pub fn stdout(mode: Mode, separator: &str) -> Self {
        let out: Box<dyn Write + Send> = Box::new(io::stdout());
        Self::with_writer(Arc::new(Mutex::new(out)), mode, separator)
    }

    pub fn with_writer(out: SharedOut, mode: Mode, separator: &str) -> Self {
        Self {
            out,
            mode,
            rule: separator.to_string(),
            projection: None,
            selected: None,
            status: Arc::new(Mutex::new(idle_status())),
            message: None,
            footer: String::new(),
        }
    }

    pub fn projection(&self) -> Option<&Projection> {
        self.projection.as_ref()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_entry_id(&self) -> Option<i64> {
        let index = self.selected?;
        self.projection.as_ref()?.entry_id_at(index)
    }

    /// Write raw text (prompts) through the shared stream.
    pub fn write(&self, text: &str) {
        write_locked(&self.out, text);
    }

    /// One-line note shown under the table until the next redraw.
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.redraw();
    }

    /// Key help printed under the table in interactive mode.
    pub fn set_footer(&mut self, footer: impl Into<String>) {
        self.footer = footer.into();
    }

    fn redraw(&mut self) {
        let Some(projection) = &self.projection else {
            return;
        };
        match self.mode {
            Mode::Interactive => {
                let mut screen = String::from(CLEAR_SCREEN);
                screen.push_str(&self.status.lock().unwrap_or_else(PoisonError::into_inner));
                screen.push_str("\n\n");
                screen.push_str(&render_table(projection, self.selected, &self.rule));
                if !self.footer.is_empty() {
                    screen.push('\n');
                    screen.push_str(&self.footer);
                    screen.push('\n');
                }
                if let Some(msg) = self.message.take() {
                    screen.push_str(&msg);
                    screen.push('\n');
                }
                write_locked(&self.out, &screen);
            }
            Mode::OneShot | Mode::Follow => {
                write_locked(&self.out, &render_table(projection, None, &self.rule));
            }
        }
    }
}

impl WorkView for TerminalView {
    fn render_rows(&mut self, projection: &Projection) {
        self.selected = projection.selected;
        self.projection = Some(projection.clone());
        self.redraw();
    }

    fn select_row(&mut self, index: usize) {
        if self.selected == Some(index) {
            return;
        }
        self.selected = Some(index);
        if self.mode == Mode::Interactive {
            self.redraw();
        }
    }

    fn start_live_tick(&mut self, entry: &WorkEntry) -> TickSink {
        let out = Arc::clone(&self.out);
        let title = entry.title.clone();
        match self.mode {
            Mode::OneShot => Box::new(|_: i64| {}),
            Mode::Follow => Box::new(move |secs| {
                write_locked(&out, &format!("\r{}", live_status(&title, secs)));
            }),
            Mode::Interactive => {
                let status = Arc::clone(&self.status);
                Box::new(move |secs| {
                    let line = live_status(&title, secs);
                    write_locked(&out, &format!("{SAVE_CURSOR}{STATUS_LINE}{line}{RESTORE_CURSOR}"));
                    *status.lock().unwrap_or_else(PoisonError::into_inner) = line;
                })
            }
        }
    }

    fn stop_live_tick(&mut self) {
        if self.mode == Mode::Follow {
            write_locked(&self.out, "\n");
        }
    }

    fn reset_live_display(&mut self) {
        let line = idle_status();
        if self.mode == Mode::Interactive {
            write_locked(&self.out, &format!("{SAVE_CURSOR}{STATUS_LINE}{line}{RESTORE_CURSOR}"));
        }
        *self.status.lock().unwrap_or_else(PoisonError::into_inner) = line;
    }

    fn report_error(&mut self, err: &AppError, focus: FocusTarget) {
        tracing::warn!(error = %err, ?focus, "error reported to the user");
        let text = messages::friendly(err);
        match self.mode {
            Mode::Interactive => self.set_message(format!("❌ {text}")),
            Mode::OneShot | Mode::Follow => messages::error(text),
        }
    }
}
