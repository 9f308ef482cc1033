use crate::core::store::TagStore;
use crate::errors::AppResult;
use crate::models::Tag;
use crate::models::input::parse_name;

pub struct TagLogic;

impl TagLogic {
    pub fn add<S: TagStore + ?Sized>(store: &S, name: &str) -> AppResult<Tag> {
        let name = parse_name(name, "tag")?;
        store.create_tag(&name)
    }

    pub fn rename<S: TagStore + ?Sized>(store: &S, old: &str, new: &str) -> AppResult<Tag> {
        let tag = store.find_tag_by_name(old.trim())?;
        let name = parse_name(new, "tag")?;
        store.rename_tag(tag.id, &name)?;
        store.find_tag(tag.id)
    }

    /// Removes the tag and its project links. Entries keep the stale id and
    /// render an empty tag column.
    pub fn delete<S: TagStore + ?Sized>(store: &S, name: &str) -> AppResult<Tag> {
        let tag = store.find_tag_by_name(name.trim())?;
        store.delete_tag(tag.id)?;
        Ok(tag)
    }

    /// Resolve a list of names to ids, failing on the first unknown one.
    pub fn ids_for<S: TagStore + ?Sized>(store: &S, names: &[String]) -> AppResult<Vec<i64>> {
        let mut ids = Vec::with_capacity(names.len());
        for name in names.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
            let id = store.find_tag_by_name(name)?.id;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Ok(ids)
    }
}
