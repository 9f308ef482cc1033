use crate::core::store::SettingProvider;
use crate::db::db_utils::to_millis;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::Setting;
use crate::models::setting::{DEFAULT_PERSON_DAY, SETTING_ID};
use rusqlite::params;

impl SettingProvider for SqliteStore {
    fn get_setting(&self) -> AppResult<Setting> {
        let now = to_millis(self.now());
        self.conn().execute(
            "INSERT OR IGNORE INTO settings
                (id, relative_date, person_day, display_as_person_day, download_path, created_at, updated_at)
             VALUES (?1, 0, ?2, 1, '', ?3, ?3)",
            params![SETTING_ID, DEFAULT_PERSON_DAY, now],
        )?;

        let setting = self.conn().query_row(
            "SELECT id, relative_date, person_day, display_as_person_day, download_path
             FROM settings WHERE id = ?1",
            [SETTING_ID],
            |row| {
                Ok(Setting {
                    id: row.get(0)?,
                    relative_date: row.get(1)?,
                    person_day: row.get(2)?,
                    display_as_person_day: row.get::<_, i64>(3)? == 1,
                    download_path: row.get(4)?,
                })
            },
        )?;
        Ok(setting)
    }

    fn update_setting(&self, setting: &Setting) -> AppResult<()> {
        // Make sure the singleton exists before updating it.
        self.get_setting()?;

        let changed = self.conn().execute(
            "UPDATE settings
             SET relative_date = ?1, person_day = ?2, display_as_person_day = ?3,
                 download_path = ?4, updated_at = ?5
             WHERE id = ?6",
            params![
                setting.relative_date,
                setting.person_day,
                i64::from(setting.display_as_person_day),
                setting.download_path,
                to_millis(self.now()),
                setting.id
            ],
        )?;
        if changed == 0 {
            return Err(AppError::not_found("setting", setting.id));
        }
        Ok(())
    }
}
