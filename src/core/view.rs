//! The seam between the core and whatever draws the work table.

use crate::core::projection::Projection;
use crate::core::ticker::TickSink;
use crate::errors::AppError;
use crate::models::WorkEntry;

/// Where input focus goes back to after an error is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    WorkTable,
    WorkForm,
    TimerForm,
    SettingForm,
    Menu,
}

pub trait WorkView {
    /// Replace the whole table with `projection`.
    fn render_rows(&mut self, projection: &Projection);

    fn select_row(&mut self, index: usize);

    /// Show the live timer for `entry`. The returned sink is called from the
    /// tick thread with the elapsed seconds.
    fn start_live_tick(&mut self, entry: &WorkEntry) -> TickSink;

    fn stop_live_tick(&mut self);

    /// Clear the live timer area back to `00:00:00`.
    fn reset_live_display(&mut self);

    fn report_error(&mut self, err: &AppError, focus: FocusTarget);
}
