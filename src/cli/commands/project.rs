use crate::cli::parser::{Commands, ProjectCommand};
use crate::config::Config;
use crate::core::project::ProjectLogic;
use crate::core::store::{AuditLog, ProjectTypeStore};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::colors::{GREY, HEADER_BAND, paint};
use crate::utils::table::{Align, Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Project { action } = cmd else {
        return Ok(());
    };
    let store = super::open_store(cfg)?;

    match action {
        ProjectCommand::Add { name, tags } => {
            let project = ProjectLogic::add(&store, name, tags)?;
            store.audit(
                "project_add",
                &project.id.to_string(),
                &format!("{} [{}]", project.name, project.tag_names().join(", ")),
            );
            success(format!("Project '{}' created (#{}).", project.name, project.id));
        }
        ProjectCommand::List => {
            let projects = store.find_all_project_types()?;
            if projects.is_empty() {
                info("No projects defined.");
                return Ok(());
            }
            let mut table = Table::new(vec![
                Column { header: "ID".into(), align: Align::Left },
                Column { header: "Name".into(), align: Align::Left },
                Column { header: "Tags".into(), align: Align::Left },
            ]);
            for p in &projects {
                let tags = if p.tags.is_empty() {
                    paint("-", GREY)
                } else {
                    p.tag_names().join(", ")
                };
                table.add_row(vec![p.id.to_string(), p.name.clone(), tags], None);
            }
            print!("{}", table.render(HEADER_BAND, &cfg.separator_char));
        }
        ProjectCommand::Edit {
            name,
            new_name,
            tags,
        } => {
            let project = ProjectLogic::edit(&store, name, new_name.as_deref(), tags.as_deref())?;
            store.audit(
                "project_edit",
                &project.id.to_string(),
                &format!("{} [{}]", project.name, project.tag_names().join(", ")),
            );
            success(format!("Project '{}' updated.", project.name));
        }
        ProjectCommand::Del { name } => {
            let project = ProjectLogic::delete(&store, name)?;
            store.audit("project_del", &project.id.to_string(), &project.name);
            success(format!("Project '{}' deleted.", project.name));
        }
    }
    Ok(())
}
