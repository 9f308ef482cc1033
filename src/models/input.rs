//! Parsed and validated form inputs.
//!
//! Raw strings coming from the CLI or the interactive session are turned into
//! these types before any store call, so malformed numbers surface as
//! `AppError::Validation` and never reach the database.

use crate::errors::{AppError, AppResult};
use crate::models::setting::Setting;

/// Title + optional project/tag ids for create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkInput {
    pub title: String,
    pub project_type_id: Option<i64>,
    pub tag_id: Option<i64>,
}

impl WorkInput {
    pub fn new(title: &str, project_type_id: Option<i64>, tag_id: Option<i64>) -> AppResult<Self> {
        if tag_id.is_some() && project_type_id.is_none() {
            return Err(AppError::Validation(
                "a tag can only be set together with a project".into(),
            ));
        }
        Ok(Self {
            title: parse_title(title)?,
            project_type_id,
            tag_id,
        })
    }
}

pub fn parse_title(raw: &str) -> AppResult<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(AppError::Validation("title must not be empty".into()));
    }
    Ok(title.to_string())
}

pub fn parse_name(raw: &str, what: &str) -> AppResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::Validation(format!("{what} name must not be empty")));
    }
    Ok(name.to_string())
}

/// Hour/minute/second triple from the timer form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerInput {
    pub hours: u16,
    pub minutes: u16,
    pub seconds: u16,
}

impl TimerInput {
    /// Missing fields count as zero; minutes and seconds must be 0-59.
    pub fn parse(hours: Option<&str>, minutes: Option<&str>, seconds: Option<&str>) -> AppResult<Self> {
        let input = Self {
            hours: parse_u16(hours, "Hour")?,
            minutes: parse_u16(minutes, "Minute")?,
            seconds: parse_u16(seconds, "Second")?,
        };
        if input.minutes > 59 {
            return Err(AppError::Validation(format!(
                "Minute must be between 0 and 59, got {}",
                input.minutes
            )));
        }
        if input.seconds > 59 {
            return Err(AppError::Validation(format!(
                "Second must be between 0 and 59, got {}",
                input.seconds
            )));
        }
        Ok(input)
    }

    pub fn from_seconds(total: i64) -> Self {
        let total = total.max(0);
        Self {
            hours: u16::try_from(total / 3600).unwrap_or(u16::MAX),
            minutes: ((total % 3600) / 60) as u16,
            seconds: (total % 60) as u16,
        }
    }

    pub fn total_seconds(&self) -> i64 {
        i64::from(self.hours) * 3600 + i64::from(self.minutes) * 60 + i64::from(self.seconds)
    }
}

fn parse_u16(raw: Option<&str>, label: &str) -> AppResult<u16> {
    match raw.map(str::trim) {
        None | Some("") => Ok(0),
        Some(v) => v
            .parse::<u16>()
            .map_err(|_| AppError::Validation(format!("{label} must be a non-negative number, got '{v}'"))),
    }
}

/// Partial update of the settings row. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingInput {
    pub relative_date: Option<String>,
    pub person_day: Option<String>,
    pub display_as_person_day: Option<bool>,
    pub download_path: Option<String>,
}

impl SettingInput {
    pub fn is_empty(&self) -> bool {
        self.relative_date.is_none()
            && self.person_day.is_none()
            && self.display_as_person_day.is_none()
            && self.download_path.is_none()
    }

    pub fn apply(&self, current: &Setting) -> AppResult<Setting> {
        let mut next = current.clone();
        if let Some(raw) = &self.relative_date {
            next.relative_date = parse_u32(raw, "Relative date")?;
        }
        if let Some(raw) = &self.person_day {
            next.person_day = parse_u32(raw, "Person day")?;
        }
        if let Some(flag) = self.display_as_person_day {
            next.display_as_person_day = flag;
        }
        if let Some(path) = &self.download_path {
            next.download_path = path.trim().to_string();
        }
        Ok(next)
    }
}

fn parse_u32(raw: &str, label: &str) -> AppResult<u32> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| AppError::Validation(format!("{label} must be a non-negative number, got '{raw}'")))
}
