use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::AuditLog;
use crate::core::work::{FieldChange, WorkEdit, WorkLogic};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        title,
        project,
        no_project,
        tag,
        no_tag,
    } = cmd
    {
        let edit = WorkEdit {
            title: title.clone(),
            project: FieldChange::from_flags(project.as_deref(), *no_project),
            tag: FieldChange::from_flags(tag.as_deref(), *no_tag),
        };
        if edit == WorkEdit::default() {
            return Err(AppError::Validation(
                "nothing to change: use --title, --project/--no-project or --tag/--no-tag".into(),
            ));
        }

        let store = super::open_store(cfg)?;
        let entry = WorkLogic::update(&store, *id, &edit)?;

        store.audit(
            "edit",
            &id.to_string(),
            &format!(
                "title='{}' project='{}' tag='{}'",
                entry.title,
                entry.project_label(),
                entry.tag_label()
            ),
        );
        success(format!("Work #{id} updated."));
    }
    Ok(())
}
