use crate::core::store::{ProjectTypeStore, TagStore, WorkStore};
use crate::core::tag::TagLogic;
use crate::errors::{AppError, AppResult};
use crate::models::ProjectType;
use crate::models::input::parse_name;

pub struct ProjectLogic;

impl ProjectLogic {
    pub fn add<S>(store: &S, name: &str, tags: &[String]) -> AppResult<ProjectType>
    where
        S: ProjectTypeStore + TagStore + ?Sized,
    {
        let name = parse_name(name, "project")?;
        let tag_ids = TagLogic::ids_for(store, tags)?;
        store.create_project_type(&name, &tag_ids)
    }

    /// Rename and/or replace the tag set. `tags = None` keeps the current tags.
    pub fn edit<S>(store: &S, name: &str, new_name: Option<&str>, tags: Option<&[String]>) -> AppResult<ProjectType>
    where
        S: ProjectTypeStore + TagStore + ?Sized,
    {
        let current = store.find_project_type_by_name(name.trim())?;
        let name = match new_name {
            Some(n) => parse_name(n, "project")?,
            None => current.name.clone(),
        };
        let tag_ids = match tags {
            Some(list) => TagLogic::ids_for(store, list)?,
            None => current.tags.iter().map(|t| t.id).collect(),
        };
        store.update_project_type(current.id, &name, &tag_ids)?;
        store.find_project_type(current.id)
    }

    /// Refuses while any work entry still points at the project.
    pub fn delete<S>(store: &S, name: &str) -> AppResult<ProjectType>
    where
        S: ProjectTypeStore + WorkStore + ?Sized,
    {
        let project = store.find_project_type_by_name(name.trim())?;
        let used = store.find_by_project_type(project.id)?;
        if !used.is_empty() {
            return Err(AppError::InUse(format!(
                "project '{}' is used by {} work entr{}",
                project.name,
                used.len(),
                if used.len() == 1 { "y" } else { "ies" }
            )));
        }
        store.delete_project_type(project.id)?;
        Ok(project)
    }
}
