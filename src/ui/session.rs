//! Interactive work table driven by single-key commands read line by line.

use crate::core::store::{AuditLog, ProjectTypeStore, SettingProvider, WorkStore};
use crate::core::tracking::{ToggleOutcome, TrackingEngine};
use crate::core::view::{FocusTarget, WorkView};
use crate::core::work::{FieldChange, WorkEdit, WorkLogic};
use crate::errors::{AppError, AppResult};
use crate::models::input::TimerInput;
use crate::ui::terminal::TerminalView;
use crate::utils::time::seconds_to_hour_and_minute;
use std::io::BufRead;

pub const HELP: &str = "[Enter] toggle  [j/k] move  [s/e] top/bottom  [a] add  [u] update  \
[r] timer  [d] delete  [c] confirm  [t] title  [h] hours  [q] quit";

/// Entered in a prompt to clear an optional field.
const CLEAR_MARK: &str = "-";

enum Flow {
    Continue,
    Quit,
}

pub struct Session<S, R> {
    engine: TrackingEngine<S>,
    view: TerminalView,
    input: R,
}

impl<S, R> Session<S, R>
where
    S: WorkStore + SettingProvider + ProjectTypeStore + AuditLog,
    R: BufRead,
{
    pub fn new(engine: TrackingEngine<S>, mut view: TerminalView, input: R) -> Self {
        view.set_footer(HELP);
        Self { engine, view, input }
    }

    pub fn view(&self) -> &TerminalView {
        &self.view
    }

    pub fn engine(&self) -> &TrackingEngine<S> {
        &self.engine
    }

    /// Run until `q` or end of input. The live timer is stopped on exit, the
    /// tracking flag in the database is left as is.
    pub fn run(&mut self) -> AppResult<()> {
        self.engine.refresh(&mut self.view, None)?;
        if let Err(e) = self.engine.resume_live(&mut self.view) {
            self.view.report_error(&e, FocusTarget::WorkTable);
        }

        loop {
            self.view.write("> ");
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            match self.handle_key(line.trim()) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err((e, focus)) => self.view.report_error(&e, focus),
            }
        }

        self.engine.end_live(&mut self.view);
        tracing::info!("session closed");
        Ok(())
    }

    fn handle_key(&mut self, key: &str) -> Result<Flow, (AppError, FocusTarget)> {
        let table = |e| (e, FocusTarget::WorkTable);
        let form = |e| (e, FocusTarget::WorkForm);

        match key {
            "" => self.toggle().map_err(table)?,
            "j" => self.step(true),
            "k" => self.step(false),
            "s" => self.jump(true),
            "e" => self.jump(false),
            "a" => self.add().map_err(form)?,
            "u" => self.update().map_err(form)?,
            "r" => self.timer().map_err(|e| (e, FocusTarget::TimerForm))?,
            "d" => self.delete().map_err(table)?,
            "c" => self.confirm().map_err(table)?,
            "t" => self.show_title().map_err(table)?,
            "h" => self.show_hours().map_err(table)?,
            "q" => return Ok(Flow::Quit),
            "?" => self.view.set_message(HELP),
            other => self.view.set_message(format!("Unknown command '{other}'. Press ? for help.")),
        }
        Ok(Flow::Continue)
    }

    fn ask(&mut self, label: &str, current: &str) -> AppResult<String> {
        if current.is_empty() {
            self.view.write(&format!("{label}: "));
        } else {
            self.view.write(&format!("{label} [{current}]: "));
        }
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        let answer = line.trim();
        Ok(if answer.is_empty() {
            current.to_string()
        } else {
            answer.to_string()
        })
    }

    fn selected_id(&self) -> Option<i64> {
        self.view.selected_entry_id()
    }

    fn step(&mut self, forward: bool) {
        let Some(projection) = self.view.projection() else {
            return;
        };
        let from = self.view.selected().unwrap_or(0);
        if let Some(next) = projection.next_entry_index(from, forward) {
            self.view.select_row(next);
        }
    }

    fn jump(&mut self, top: bool) {
        let Some(projection) = self.view.projection() else {
            return;
        };
        let target = if top {
            projection.first_entry_index()
        } else {
            projection.last_entry_index()
        };
        if let Some(index) = target {
            self.view.select_row(index);
        }
    }

    fn toggle(&mut self) -> AppResult<()> {
        let Some(id) = self.selected_id() else {
            return Ok(());
        };
        let outcome = self.engine.toggle_tracking(id, &mut self.view)?;
        let store = self.engine.store();
        match &outcome {
            ToggleOutcome::Started(e) => store.audit("start", &e.id.to_string(), &e.title),
            ToggleOutcome::Stopped(e) => store.audit("stop", &e.id.to_string(), &e.title),
            ToggleOutcome::CopiedToToday { source_id, entry } => store.audit(
                "copy",
                &entry.id.to_string(),
                &format!("Copied #{source_id} to today: {}", entry.title),
            ),
        }
        Ok(())
    }

    fn add(&mut self) -> AppResult<()> {
        let title = self.ask("Title", "")?;
        let project = self.ask("Project (empty for none)", "")?;
        let tag = if project.is_empty() {
            String::new()
        } else {
            self.ask("Tag (empty for none)", "")?
        };

        let entry = WorkLogic::create(
            self.engine.store(),
            &title,
            Some(project.as_str()),
            Some(tag.as_str()),
        )?;
        self.engine
            .store()
            .audit("add", &entry.id.to_string(), &entry.title);
        self.engine.refresh(&mut self.view, Some(entry.id))?;
        Ok(())
    }

    fn update(&mut self) -> AppResult<()> {
        let Some(id) = self.selected_id() else {
            return Ok(());
        };
        let current = self.engine.store().find_by_id(id)?;

        let title = self.ask("Title", &current.title)?;
        let project = self.ask("Project ('-' clears)", current.project_label())?;
        let tag = self.ask("Tag ('-' clears)", current.tag_label())?;

        let edit = WorkEdit {
            title: Some(title),
            project: prompt_change(&project, current.project_label()),
            tag: prompt_change(&tag, current.tag_label()),
        };
        let entry = WorkLogic::update(self.engine.store(), id, &edit)?;
        self.engine
            .store()
            .audit("edit", &id.to_string(), &entry.title);
        self.engine.refresh(&mut self.view, Some(id))?;
        Ok(())
    }

    fn timer(&mut self) -> AppResult<()> {
        let Some(id) = self.selected_id() else {
            return Ok(());
        };
        let current = TimerInput::from_seconds(self.engine.store().find_by_id(id)?.total_seconds);

        let hours = self.ask("Hour", &current.hours.to_string())?;
        let minutes = self.ask("Minute", &current.minutes.to_string())?;
        let seconds = self.ask("Second", &current.seconds.to_string())?;
        let timer = TimerInput::parse(Some(&hours), Some(&minutes), Some(&seconds))?;

        let entry = WorkLogic::set_timer(self.engine.store(), id, timer)?;
        self.engine.store().audit(
            "timer",
            &id.to_string(),
            &format!("Total set to {}s", entry.total_seconds),
        );
        self.engine.refresh(&mut self.view, Some(id))?;
        Ok(())
    }

    fn delete(&mut self) -> AppResult<()> {
        let Some(id) = self.selected_id() else {
            return Ok(());
        };
        let answer = self.ask("Are you sure you want to delete this work? [y/N]", "")?;
        if !matches!(answer.to_lowercase().as_str(), "y" | "yes") {
            self.view.set_message("Operation cancelled.");
            return Ok(());
        }

        if self.engine.live_entry_id() == Some(id) {
            self.engine.end_live(&mut self.view);
            self.view.reset_live_display();
        }
        let entry = WorkLogic::delete(self.engine.store(), id)?;
        self.engine
            .store()
            .audit("del", &id.to_string(), &entry.title);

        let projection = self.engine.refresh(&mut self.view, None)?;
        if let Some(top) = projection.first_entry_index() {
            self.view.select_row(top);
        }
        Ok(())
    }

    fn confirm(&mut self) -> AppResult<()> {
        let Some(id) = self.selected_id() else {
            return Ok(());
        };
        let confirmed = WorkLogic::toggle_confirmed(self.engine.store(), id)?;
        self.engine
            .store()
            .audit("confirm", &id.to_string(), &format!("confirmed = {confirmed}"));
        self.engine.refresh(&mut self.view, Some(id))?;
        Ok(())
    }

    fn show_title(&mut self) -> AppResult<()> {
        let Some(id) = self.selected_id() else {
            return Ok(());
        };
        let entry = self.engine.store().find_by_id(id)?;
        self.view.set_message(format!("Title: {}", entry.title));
        Ok(())
    }

    fn show_hours(&mut self) -> AppResult<()> {
        let Some(id) = self.selected_id() else {
            return Ok(());
        };
        let entry = self.engine.store().find_by_id(id)?;
        self.view.set_message(format!(
            "Hours: {}",
            seconds_to_hour_and_minute(entry.total_seconds)
        ));
        Ok(())
    }
}

/// Prompt answer → edit instruction. Returning the shown default keeps it.
fn prompt_change(answer: &str, current: &str) -> FieldChange {
    match answer {
        CLEAR_MARK => FieldChange::Clear,
        a if a == current => FieldChange::Keep,
        a => FieldChange::Set(a.to_string()),
    }
}
