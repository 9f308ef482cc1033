use super::tag::Tag;
use chrono::{DateTime, Local};
use serde::Serialize;

/// A project category with the tags that may be used with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectType {
    pub id: i64,
    pub name: String,
    pub tags: Vec<Tag>,
    pub created_at: DateTime<Local>,
    pub updated_at: DateTime<Local>,
}

impl ProjectType {
    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn find_tag(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.name == name)
    }
}
