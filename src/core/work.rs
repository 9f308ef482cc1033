//! Create / edit / delete / confirm / timer operations on work entries.
//!
//! Project and tag come in as names and are resolved here, so a tag that is
//! not linked to the chosen project never reaches the store.

use crate::core::store::{ProjectTypeStore, WorkStore};
use crate::errors::{AppError, AppResult};
use crate::models::WorkEntry;
use crate::models::input::{TimerInput, WorkInput, parse_title};

/// Edit instruction for an optional reference field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldChange {
    #[default]
    Keep,
    Set(String),
    Clear,
}

impl FieldChange {
    /// `--x VALUE` / `--no-x` pair from the command line.
    pub fn from_flags(value: Option<&str>, clear: bool) -> Self {
        match (value, clear) {
            (_, true) => FieldChange::Clear,
            (Some(v), false) => FieldChange::Set(v.to_string()),
            (None, false) => FieldChange::Keep,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkEdit {
    pub title: Option<String>,
    pub project: FieldChange,
    pub tag: FieldChange,
}

pub struct WorkLogic;

impl WorkLogic {
    /// Map project/tag names to ids. The tag must belong to the project.
    pub fn resolve<S>(store: &S, project: Option<&str>, tag: Option<&str>) -> AppResult<(Option<i64>, Option<i64>)>
    where
        S: ProjectTypeStore + ?Sized,
    {
        let project = match project.map(str::trim).filter(|p| !p.is_empty()) {
            Some(name) => Some(store.find_project_type_by_name(name)?),
            None => None,
        };

        let tag_name = tag.map(str::trim).filter(|t| !t.is_empty());
        let tag_id = match (&project, tag_name) {
            (_, None) => None,
            (None, Some(_)) => {
                return Err(AppError::Validation(
                    "a tag can only be set together with a project".into(),
                ));
            }
            (Some(p), Some(name)) => match p.find_tag(name) {
                Some(t) => Some(t.id),
                None => {
                    return Err(AppError::Validation(format!(
                        "tag '{name}' is not linked to project '{}'",
                        p.name
                    )));
                }
            },
        };

        Ok((project.map(|p| p.id), tag_id))
    }

    pub fn create<S>(store: &S, title: &str, project: Option<&str>, tag: Option<&str>) -> AppResult<WorkEntry>
    where
        S: WorkStore + ProjectTypeStore + ?Sized,
    {
        let (project_type_id, tag_id) = Self::resolve(store, project, tag)?;
        let input = WorkInput::new(title, project_type_id, tag_id)?;
        store.create(&input.title, input.project_type_id, input.tag_id)
    }

    /// Apply `edit` to entry `id`. Changing the project without naming a tag
    /// drops the old tag.
    pub fn update<S>(store: &S, id: i64, edit: &WorkEdit) -> AppResult<WorkEntry>
    where
        S: WorkStore + ProjectTypeStore + ?Sized,
    {
        let current = store.find_by_id(id)?;

        let title = match &edit.title {
            Some(t) => parse_title(t)?,
            None => current.title.clone(),
        };

        let project = match &edit.project {
            FieldChange::Keep => match current.project_type_id {
                Some(pid) => Some(store.find_project_type(pid)?),
                None => None,
            },
            FieldChange::Set(name) => Some(store.find_project_type_by_name(name.trim())?),
            FieldChange::Clear => None,
        };
        let project_id = project.as_ref().map(|p| p.id);
        let project_changed = project_id != current.project_type_id;

        let tag_id = match &edit.tag {
            FieldChange::Keep if project_changed => None,
            FieldChange::Keep => current.tag_id,
            FieldChange::Clear => None,
            FieldChange::Set(name) => {
                let Some(p) = &project else {
                    return Err(AppError::Validation(
                        "a tag can only be set together with a project".into(),
                    ));
                };
                let tag = p.find_tag(name.trim()).ok_or_else(|| {
                    AppError::Validation(format!("tag '{}' is not linked to project '{}'", name.trim(), p.name))
                })?;
                Some(tag.id)
            }
        };

        let input = WorkInput::new(&title, project_id, tag_id)?;
        store.update(id, &input.title, input.project_type_id, input.tag_id)?;
        store.find_by_id(id)
    }

    pub fn delete<S: WorkStore + ?Sized>(store: &S, id: i64) -> AppResult<WorkEntry> {
        let entry = store.find_by_id(id)?;
        store.delete(id)?;
        Ok(entry)
    }

    /// Flip the review flag, returning the new value.
    pub fn toggle_confirmed<S: WorkStore + ?Sized>(store: &S, id: i64) -> AppResult<bool> {
        let entry = store.find_by_id(id)?;
        let next = !entry.confirmed;
        store.update_confirmed(id, next)?;
        Ok(next)
    }

    /// Overwrite the accumulated total.
    pub fn set_timer<S: WorkStore + ?Sized>(store: &S, id: i64, timer: TimerInput) -> AppResult<WorkEntry> {
        store.update_total_seconds(id, timer.total_seconds())?;
        store.find_by_id(id)
    }
}
