use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::projection::{Window, build_projection};
use crate::core::store::SettingProvider;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::ui::render::render_table;
use crate::utils::clock::Clock;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { days, json } = cmd {
        let store = super::open_store(cfg)?;
        let now = store.clock().now();
        let days = match days {
            Some(d) => *d,
            None => store.get_setting()?.relative_date,
        };

        let projection = build_projection(&store, Window::relative(days, now), now)?;

        if *json {
            let out = serde_json::to_string_pretty(&projection.groups)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{out}");
            return Ok(());
        }

        print!("{}", render_table(&projection, None, &cfg.separator_char));
        if projection.entry_count() == 0 {
            info("No work entries in range.");
        }
    }
    Ok(())
}
