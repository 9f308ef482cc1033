use crate::cli::parser::{Commands, TagCommand};
use crate::config::Config;
use crate::core::store::{AuditLog, TagStore};
use crate::core::tag::TagLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::colors::{GREY, HEADER_BAND, paint};
use crate::utils::table::{Align, Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Tag { action } = cmd else {
        return Ok(());
    };
    let store = super::open_store(cfg)?;

    match action {
        TagCommand::Add { name } => {
            let tag = TagLogic::add(&store, name)?;
            store.audit("tag_add", &tag.id.to_string(), &tag.name);
            success(format!("Tag '{}' created (#{}).", tag.name, tag.id));
        }
        TagCommand::List => {
            let tags = store.find_all_tags()?;
            if tags.is_empty() {
                info("No tags defined.");
                return Ok(());
            }
            let mut table = Table::new(vec![
                Column { header: "ID".into(), align: Align::Left },
                Column { header: "Name".into(), align: Align::Left },
                Column { header: "Created".into(), align: Align::Left },
            ]);
            for t in &tags {
                table.add_row(
                    vec![
                        t.id.to_string(),
                        t.name.clone(),
                        paint(&t.created_at.format("%Y-%m-%d").to_string(), GREY),
                    ],
                    None,
                );
            }
            print!("{}", table.render(HEADER_BAND, &cfg.separator_char));
        }
        TagCommand::Rename { old, new } => {
            let tag = TagLogic::rename(&store, old, new)?;
            store.audit("tag_rename", &tag.id.to_string(), &format!("{old} -> {}", tag.name));
            success(format!("Tag '{old}' renamed to '{}'.", tag.name));
        }
        TagCommand::Del { name } => {
            let tag = TagLogic::delete(&store, name)?;
            store.audit("tag_del", &tag.id.to_string(), &tag.name);
            success(format!("Tag '{}' deleted.", tag.name));
        }
    }
    Ok(())
}
