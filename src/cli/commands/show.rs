use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::{SettingProvider, WorkStore};
use crate::errors::AppResult;
use crate::utils::colors::{GREEN, RED, color_for_flag, color_for_optional_field, paint};
use crate::utils::format_with_person_day;

fn yes_no(flag: bool) -> String {
    paint(if flag { "yes" } else { "no" }, if flag { GREEN } else { RED })
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let store = super::open_store(cfg)?;
        let entry = store.find_by_id(*id)?;
        let setting = store.get_setting()?;

        let stamp = |t: Option<chrono::DateTime<chrono::Local>>| {
            t.map(|v| v.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_else(|| "-".to_string())
        };

        println!(
            "🆔 Work #{}",
            paint(&entry.id.to_string(), color_for_flag(entry.confirmed))
        );
        println!("   Title     : {}", entry.title);
        println!(
            "   Project   : {}",
            paint(
                entry.project_name.as_deref().unwrap_or("-"),
                color_for_optional_field(entry.project_name.as_deref())
            )
        );
        println!(
            "   Tag       : {}",
            paint(
                entry.tag_name.as_deref().unwrap_or("-"),
                color_for_optional_field(entry.tag_name.as_deref())
            )
        );
        println!(
            "   Total     : {}",
            format_with_person_day(
                entry.total_seconds,
                setting.person_day,
                setting.display_as_person_day
            )
        );
        println!("   Tracking  : {}", yes_no(entry.is_tracking));
        println!("   Confirmed : {}", yes_no(entry.confirmed));
        println!("   Started   : {}", stamp(entry.start_time));
        println!("   Ended     : {}", stamp(entry.end_time));
        println!("   Created   : {}", stamp(Some(entry.created_at)));
    }
    Ok(())
}
