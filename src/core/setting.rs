use crate::core::store::SettingProvider;
use crate::errors::AppResult;
use crate::models::Setting;
use crate::models::input::SettingInput;

pub struct SettingLogic;

impl SettingLogic {
    /// Merge `input` into the stored settings and persist the result.
    pub fn apply<S: SettingProvider + ?Sized>(store: &S, input: &SettingInput) -> AppResult<Setting> {
        let current = store.get_setting()?;
        if input.is_empty() {
            return Ok(current);
        }
        let next = input.apply(&current)?;
        store.update_setting(&next)?;
        tracing::info!(
            relative_date = next.relative_date,
            person_day = next.person_day,
            display = next.display_as_person_day,
            "settings updated"
        );
        Ok(next)
    }
}
