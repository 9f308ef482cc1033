use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::setting::SettingLogic;
use crate::core::store::AuditLog;
use crate::errors::AppResult;
use crate::models::Setting;
use crate::models::input::SettingInput;
use crate::ui::messages::success;
use crate::utils::path::resolve_download_dir;

fn print_setting(s: &Setting) {
    println!("⚙️  Settings");
    println!("   Relative date        : {} day(s)", s.relative_date);
    println!("   Person day           : {} hour(s)", s.person_day);
    println!("   Display as person day: {}", s.display_as_person_day);
    let download = if s.download_path.is_empty() {
        format!("(default) {}", resolve_download_dir("").display())
    } else {
        s.download_path.clone()
    };
    println!("   Download path        : {download}");
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Setting {
        relative_date,
        person_day,
        display_person_day,
        download_path,
    } = cmd
    {
        let input = SettingInput {
            relative_date: relative_date.clone(),
            person_day: person_day.clone(),
            display_as_person_day: *display_person_day,
            download_path: download_path.clone(),
        };

        let store = super::open_store(cfg)?;
        let setting = SettingLogic::apply(&store, &input)?;

        if !input.is_empty() {
            store.audit("setting", "settings", "Settings updated");
            success("Settings updated.");
        }
        print_setting(&setting);
    }
    Ok(())
}
