use serde::Serialize;

pub const SETTING_ID: i64 = 1;
pub const DEFAULT_PERSON_DAY: u32 = 8;

/// Singleton runtime preferences stored in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Setting {
    pub id: i64,
    /// Days of history shown in the work table (0 = today only).
    pub relative_date: u32,
    /// Hours in one person-day.
    pub person_day: u32,
    pub display_as_person_day: bool,
    pub download_path: String,
}

impl Default for Setting {
    fn default() -> Self {
        Self {
            id: SETTING_ID,
            relative_date: 0,
            person_day: DEFAULT_PERSON_DAY,
            display_as_person_day: true,
            download_path: String::new(),
        }
    }
}
