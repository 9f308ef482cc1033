//! Tracking state machine: one active timer at a time, copy-forward for
//! entries from earlier days, and ownership of the live tick session.

use crate::core::projection::{Projection, Window, build_projection};
use crate::core::store::{SettingProvider, WorkStore};
use crate::core::ticker::{TICK_INTERVAL, TickSession};
use crate::core::view::WorkView;
use crate::errors::{AppError, AppResult};
use crate::models::WorkEntry;
use crate::utils::clock::SharedClock;
use std::time::Duration;

/// What a toggle did to the selected entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    Started(WorkEntry),
    Stopped(WorkEntry),
    /// A historical entry was cloned into today and the clone started.
    CopiedToToday { source_id: i64, entry: WorkEntry },
}

impl ToggleOutcome {
    pub fn entry(&self) -> &WorkEntry {
        match self {
            ToggleOutcome::Started(e) | ToggleOutcome::Stopped(e) => e,
            ToggleOutcome::CopiedToToday { entry, .. } => entry,
        }
    }
}

pub struct TrackingEngine<S> {
    store: S,
    clock: SharedClock,
    session: Option<TickSession>,
    tick_interval: Duration,
}

impl<S> TrackingEngine<S>
where
    S: WorkStore + SettingProvider,
{
    pub fn new(store: S, clock: SharedClock) -> Self {
        Self::with_tick_interval(store, clock, TICK_INTERVAL)
    }

    pub fn with_tick_interval(store: S, clock: SharedClock, tick_interval: Duration) -> Self {
        Self {
            store,
            clock,
            session: None,
            tick_interval,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_live(&self) -> bool {
        self.session.is_some()
    }

    pub fn live_entry_id(&self) -> Option<i64> {
        self.session.as_ref().map(TickSession::entry_id)
    }

    /// Toggle tracking on `id`, stopping every other running timer first.
    ///
    /// Each store write is atomic on its own; an error aborts the remaining
    /// steps and leaves earlier writes applied.
    pub fn toggle_tracking(&mut self, id: i64, view: &mut dyn WorkView) -> AppResult<ToggleOutcome> {
        let target = self.store.find_by_id(id)?;
        let tracking = self.store.find_tracking()?;
        let now = self.clock.now();
        let target_is_today = target.is_created_today(now);

        for cw in &tracking {
            if cw.id != target.id || !cw.is_created_today(now) {
                self.store.stop_tracking(cw.id)?;
                tracing::info!(id = cw.id, "stopped tracking (superseded)");
                self.end_live(view);
            }
        }

        let outcome = if target_is_today {
            if target.is_tracking {
                self.store.stop_tracking(id)?;
                self.end_live(view);
                view.reset_live_display();
                tracing::info!(id, "stopped tracking");
                ToggleOutcome::Stopped(self.store.find_by_id(id)?)
            } else {
                self.store.start_tracking(id)?;
                tracing::info!(id, "started tracking");
                ToggleOutcome::Started(self.store.find_by_id(id)?)
            }
        } else {
            let copy = self
                .store
                .create(&target.title, target.project_type_id, target.tag_id)?;
            self.store.start_tracking(copy.id)?;
            let updated = self.store.find_by_id(copy.id)?;
            tracing::info!(source_id = id, id = updated.id, "copied to today and started tracking");
            ToggleOutcome::CopiedToToday {
                source_id: id,
                entry: updated,
            }
        };

        // The table goes out before the first live draw.
        self.refresh(view, Some(outcome.entry().id))?;
        if !matches!(outcome, ToggleOutcome::Stopped(_)) {
            self.restart_live(outcome.entry(), view)?;
        }
        Ok(outcome)
    }

    /// Rebuild the projection for the configured window and push it to the
    /// view. `focus` wins over the default selection when it is visible.
    pub fn refresh(&self, view: &mut dyn WorkView, focus: Option<i64>) -> AppResult<Projection> {
        let setting = self.store.get_setting()?;
        let now = self.clock.now();
        let projection = build_projection(&self.store, Window::relative(setting.relative_date, now), now)?;

        view.render_rows(&projection);
        if let Some(index) = focus
            .and_then(|id| projection.index_of(id))
            .or(projection.selected)
        {
            view.select_row(index);
        }
        Ok(projection)
    }

    /// Pick up a timer left running by an earlier process.
    pub fn resume_live(&mut self, view: &mut dyn WorkView) -> AppResult<Option<WorkEntry>> {
        if self.session.is_some() {
            return Ok(None);
        }
        let Some(entry) = self.store.find_tracking()?.into_iter().next() else {
            return Ok(None);
        };
        self.begin_live(&entry, view)?;
        tracing::info!(id = entry.id, "resumed live timer");
        Ok(Some(entry))
    }

    /// Start the live tick for `entry`. Fails with `TickActive` while another
    /// session runs.
    pub fn begin_live(&mut self, entry: &WorkEntry, view: &mut dyn WorkView) -> AppResult<()> {
        if self.session.is_some() {
            return Err(AppError::TickActive);
        }
        let started_at = entry.start_time.unwrap_or_else(|| self.clock.now());
        let sink = view.start_live_tick(entry);
        self.session = Some(TickSession::spawn_with_interval(
            entry.id,
            started_at,
            self.clock.clone(),
            sink,
            self.tick_interval,
        ));
        Ok(())
    }

    /// Cancel the live tick, if any. No redraw happens after this returns.
    pub fn end_live(&mut self, view: &mut dyn WorkView) {
        if let Some(session) = self.session.take() {
            session.cancel();
            view.stop_live_tick();
        }
    }

    fn restart_live(&mut self, entry: &WorkEntry, view: &mut dyn WorkView) -> AppResult<()> {
        self.end_live(view);
        self.begin_live(entry, view)
    }
}
