//! Day-grouped view model of the work table.
//!
//! The projection is plain data: an ordered list of rows (header, blank
//! separators, date headers, entries and per-day totals) plus the row that
//! should be selected. It is rebuilt from the store on every refresh.

use crate::core::store::{SettingProvider, WorkStore};
use crate::errors::AppResult;
use crate::models::{Setting, WorkEntry};
use crate::utils::time::{format_with_person_day, relative_start_time_with_days_at, today_end_time_at};
use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Blank rows emitted before every historical day.
pub const DATE_SEPARATOR_ROWS: usize = 3;

pub const WORK_HEADER: [&str; 6] = ["ID", "TotalTime", "Title", "Project", "Tags", "TRACKING"];

pub const COPY_TO_TODAY: &str = "Copy to Today";

/// Inclusive `[start, end]` range on `created_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

impl Window {
    /// From midnight `days` days ago up to the end of today.
    pub fn relative(days: u32, now: DateTime<Local>) -> Self {
        Self {
            start: relative_start_time_with_days_at(now, days),
            end: today_end_time_at(now),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryRow {
    pub id: i64,
    pub confirmed: bool,
    pub total_seconds: i64,
    pub total_time: String,
    pub title: String,
    pub project: String,
    pub tag: String,
    /// `Yes`/`No` for today's entries, `Copy` for older ones.
    pub tracking_label: &'static str,
    pub tracking_active: bool,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectionRow {
    Header,
    Separator,
    DateHeader {
        date: NaiveDate,
        label: String,
        action: &'static str,
    },
    Entry(EntryRow),
    Total {
        total_seconds: i64,
        total_time: String,
        count: usize,
    },
}

impl ProjectionRow {
    pub fn entry_id(&self) -> Option<i64> {
        match self {
            ProjectionRow::Entry(e) => Some(e.id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub entries: Vec<WorkEntry>,
    pub total_seconds: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub rows: Vec<ProjectionRow>,
    pub selected: Option<usize>,
    pub groups: Vec<DayGroup>,
}

impl Projection {
    /// Row index of the entry with `id`.
    pub fn index_of(&self, id: i64) -> Option<usize> {
        self.rows.iter().position(|r| r.entry_id() == Some(id))
    }

    pub fn first_entry_index(&self) -> Option<usize> {
        self.rows.iter().position(|r| r.entry_id().is_some())
    }

    pub fn last_entry_index(&self) -> Option<usize> {
        self.rows.iter().rposition(|r| r.entry_id().is_some())
    }

    pub fn entry_id_at(&self, index: usize) -> Option<i64> {
        self.rows.get(index).and_then(ProjectionRow::entry_id)
    }

    /// The entry row after (`forward`) or before `from`, skipping
    /// separators, date headers and totals.
    pub fn next_entry_index(&self, from: usize, forward: bool) -> Option<usize> {
        if forward {
            self.rows
                .iter()
                .enumerate()
                .skip(from + 1)
                .find(|(_, r)| r.entry_id().is_some())
                .map(|(i, _)| i)
        } else {
            self.rows[..from.min(self.rows.len())]
                .iter()
                .rposition(|r| r.entry_id().is_some())
        }
    }

    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }
}

/// Read the window and the tracking entries from the store and project them.
pub fn build_projection<S>(store: &S, window: Window, now: DateTime<Local>) -> AppResult<Projection>
where
    S: WorkStore + SettingProvider + ?Sized,
{
    let setting = store.get_setting()?;
    let in_range = store.find_in_range(window.start, window.end)?;
    let tracking = store.find_tracking()?;
    Ok(project_entries(in_range, tracking, &setting, now))
}

/// Merge, group and total already-fetched entries.
///
/// `in_range` must be ordered by `created_at` desc, id desc.
pub fn project_entries(
    mut entries: Vec<WorkEntry>,
    tracking: Vec<WorkEntry>,
    setting: &Setting,
    now: DateTime<Local>,
) -> Projection {
    let active_id = tracking.first().map(|e| e.id);

    let mut merged = false;
    for t in tracking {
        if !entries.iter().any(|e| e.id == t.id) {
            entries.push(t);
            merged = true;
        }
    }
    if merged {
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    }

    let mut buckets: BTreeMap<NaiveDate, Vec<WorkEntry>> = BTreeMap::new();
    for e in entries {
        buckets.entry(e.day()).or_default().push(e);
    }

    let today = now.date_naive();
    let fmt = |secs: i64| format_with_person_day(secs, setting.person_day, setting.display_as_person_day);

    let mut rows = vec![ProjectionRow::Header];
    let mut groups = Vec::with_capacity(buckets.len());

    for (date, entries) in buckets.into_iter().rev() {
        let is_today = date == today;
        if !is_today {
            rows.extend(std::iter::repeat_n(ProjectionRow::Separator, DATE_SEPARATOR_ROWS));
            rows.push(ProjectionRow::DateHeader {
                date,
                label: date.format("%Y/%m/%d %A").to_string(),
                action: COPY_TO_TODAY,
            });
        }

        let mut total_seconds = 0;
        for e in &entries {
            total_seconds += e.total_seconds;
            rows.push(ProjectionRow::Entry(entry_row(e, is_today, &fmt)));
        }

        rows.push(ProjectionRow::Total {
            total_seconds,
            total_time: fmt(total_seconds),
            count: entries.len(),
        });
        groups.push(DayGroup {
            date,
            entries,
            total_seconds,
        });
    }

    let mut projection = Projection {
        rows,
        selected: None,
        groups,
    };
    projection.selected = active_id
        .and_then(|id| projection.index_of(id))
        .or_else(|| projection.first_entry_index());
    projection
}

fn entry_row(e: &WorkEntry, is_today: bool, fmt: &dyn Fn(i64) -> String) -> EntryRow {
    let tracking_label = match (is_today, e.is_tracking) {
        (true, true) => "Yes",
        (true, false) => "No",
        (false, _) => "Copy",
    };
    EntryRow {
        id: e.id,
        confirmed: e.confirmed,
        total_seconds: e.total_seconds,
        total_time: fmt(e.total_seconds),
        title: e.title.clone(),
        project: e.project_label().to_string(),
        tag: e.tag_label().to_string(),
        tracking_label,
        tracking_active: e.is_tracking,
        is_today,
    }
}
