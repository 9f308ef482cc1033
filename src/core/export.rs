//! CSV export of every work entry.

use crate::core::store::{SettingProvider, WorkStore};
use crate::errors::{AppError, AppResult};
use crate::models::WorkEntry;
use crate::utils::path::{expand_tilde, resolve_download_dir};
use crate::utils::time::format_time;
use chrono::{DateTime, Local};
use csv::Writer;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const CSV_HEADER: [&str; 6] = ["ID", "Title", "ProjectName", "TagName", "Date", "Time"];

pub fn export_file_name(now: DateTime<Local>) -> String {
    format!("work_entries_{}.csv", now.format("%Y%m%d%H%M%S"))
}

/// Write the header and one record per entry to `out`.
pub fn write_csv<W: Write>(out: W, entries: &[WorkEntry]) -> AppResult<()> {
    let mut wtr = Writer::from_writer(out);
    wtr.write_record(CSV_HEADER)?;

    for e in entries {
        wtr.write_record([
            e.id.to_string(),
            e.title.clone(),
            e.project_label().to_string(),
            e.tag_label().to_string(),
            e.created_at.format("%Y/%m/%d").to_string(),
            format_time(e.total_seconds),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export all entries (id ascending) into a timestamped file.
    ///
    /// `dir` overrides the configured download path. Returns `None` when
    /// there is nothing to export.
    pub fn export_csv<S>(store: &S, dir: Option<&str>, now: DateTime<Local>) -> AppResult<Option<PathBuf>>
    where
        S: WorkStore + SettingProvider + ?Sized,
    {
        let target_dir = match dir {
            Some(d) => expand_tilde(d),
            None => resolve_download_dir(&store.get_setting()?.download_path),
        };

        let entries = store.find_all()?;
        if entries.is_empty() {
            return Ok(None);
        }

        ensure_dir(&target_dir)?;
        let path = target_dir.join(export_file_name(now));
        let file = std::fs::File::create(&path)?;
        write_csv(file, &entries)?;

        tracing::info!(path = %path.display(), rows = entries.len(), "csv export written");
        Ok(Some(path))
    }
}

fn ensure_dir(dir: &Path) -> AppResult<()> {
    if dir.is_dir() {
        return Ok(());
    }
    Err(AppError::Export(format!(
        "export directory does not exist: {}",
        dir.display()
    )))
}
