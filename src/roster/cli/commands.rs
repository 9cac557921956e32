use super::print::{print_form, print_messages, print_students};
use super::prompt::Prompter;
use super::AppContext;
use roster::api::{CmdMessage, ConfigAction};
use roster::commands::config::{KEY_CONFIRM_DELETE, KEY_STORAGE_KEY};
use roster::error::Result;
use roster::model::{StudentDraft, StudentPatch};

pub(super) fn add(
    ctx: &mut AppContext,
    name: Option<String>,
    student_id: Option<String>,
    email: Option<String>,
    contact: Option<String>,
) -> Result<()> {
    let draft = StudentDraft::new(
        name.unwrap_or_default(),
        student_id.unwrap_or_default(),
        email.unwrap_or_default(),
        contact.unwrap_or_default(),
    );
    let result = ctx.api.add(draft)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list();
    print_students(&result.listed_students);
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn edit(
    ctx: &mut AppContext,
    index: &str,
    name: Option<String>,
    student_id: Option<String>,
    email: Option<String>,
    contact: Option<String>,
) -> Result<()> {
    let patch = StudentPatch {
        name,
        student_id,
        email,
        contact,
    };
    if patch.is_empty() {
        let current = ctx.api.view(index)?;
        print_form(&current.student);
        print_messages(&[CmdMessage::info(
            "Nothing to change; pass --name, --id, --email or --contact",
        )]);
        return Ok(());
    }

    let result = ctx.api.update(index, &patch)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn delete(ctx: &mut AppContext, index: &str, yes: bool) -> Result<()> {
    let confirmed = if yes || !ctx.config.confirm_delete {
        true
    } else {
        let target = ctx.api.delete_preview(index)?;
        Prompter::stdin().confirm(&format!(
            "Delete student {} ({}, {})?",
            target.index, target.student.name, target.student.student_id
        ))?
    };

    let result = ctx.api.delete(index, confirmed)?;
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = roster::commands::config::run(&ctx.data_dir, action.clone())?;
    if let (ConfigAction::ShowAll, Some(config)) = (&action, &result.config) {
        println!("{} = {}", KEY_STORAGE_KEY, config.storage_key);
        println!("{} = {}", KEY_CONFIRM_DELETE, config.confirm_delete);
    }
    print_messages(&result.messages);
    Ok(())
}

pub(super) fn path(ctx: &AppContext) -> Result<()> {
    println!("{}", ctx.api.storage_path().display());
    Ok(())
}
