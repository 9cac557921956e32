//! Prompt-driven form session.
//!
//! Mirrors a form next to a list: `add` fills an empty form, `edit N` opens an edit
//! session and fills the form from student N, and while editing `update` saves and
//! `cancel` discards. `delete N` works in either mode. The edit session lives as
//! long as this loop.

use super::print::{print_error, print_form, print_messages, print_students};
use super::prompt::Prompter;
use super::AppContext;
use colored::Colorize;
use roster::api::CmdMessage;
use roster::error::Result;
use roster::model::StudentDraft;
use std::io::BufRead;

const HELP: &str = "\
Commands:
  add          fill in a new student
  edit N       edit student N
  form         re-enter the fields of the student being edited
  update       save the student being edited
  cancel       discard the edit in progress
  delete N     delete student N
  list         show all students
  help         show this help
  quit         leave";

enum Step {
    Continue,
    Quit,
}

pub(super) fn run(ctx: &mut AppContext) -> Result<()> {
    let mut prompter = Prompter::stdin();
    run_with(ctx, &mut prompter)
}

fn run_with<R: BufRead>(ctx: &mut AppContext, prompter: &mut Prompter<R>) -> Result<()> {
    // Form contents while an edit session is open.
    let mut form: Option<StudentDraft> = None;

    print_students(&ctx.api.list().listed_students);
    println!("{}", "Type 'help' for commands.".dimmed());

    loop {
        let prompt = match ctx.api.session().target_index() {
            Some(index) => format!("roster [editing {}]> ", index),
            None => "roster> ".to_string(),
        };
        let Some(line) = prompter.read_line(&prompt)? else {
            break;
        };

        match step(ctx, prompter, &mut form, line.trim()) {
            Ok(Step::Continue) => {}
            Ok(Step::Quit) => break,
            Err(e) => print_error(&e),
        }

        if !ctx.api.session().is_editing() {
            form = None;
        }
    }

    Ok(())
}

fn step<R: BufRead>(
    ctx: &mut AppContext,
    prompter: &mut Prompter<R>,
    form: &mut Option<StudentDraft>,
    line: &str,
) -> Result<Step> {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or("");
    let arg = parts.next();

    match (command, arg) {
        ("", _) => {}
        ("quit" | "exit" | "q", _) => return Ok(Step::Quit),
        ("help" | "?", _) => println!("{}", HELP),
        ("list" | "ls", _) => {
            let result = ctx.api.list();
            print_students(&result.listed_students);
            print_messages(&result.messages);
        }
        ("add", _) => {
            let Some(draft) = prompter.fill_form(&StudentDraft::default())? else {
                return Ok(Step::Quit);
            };
            let result = ctx.api.add(draft)?;
            print_messages(&result.messages);
            print_students(&result.listed_students);
        }
        ("edit", Some(index)) => {
            let result = ctx.api.start_edit(index)?;
            print_messages(&result.messages);
            if let Some(editing) = &result.editing {
                print_form(&editing.student);
                let current = StudentDraft::from(&editing.student);
                match prompter.fill_form(&current)? {
                    Some(draft) => *form = Some(draft),
                    None => return Ok(Step::Quit),
                }
                hint("Type 'update' to save or 'cancel' to discard.");
            }
        }
        ("form", _) => match form.clone() {
            Some(current) => match prompter.fill_form(&current)? {
                Some(draft) => *form = Some(draft),
                None => return Ok(Step::Quit),
            },
            None => hint("No edit in progress; use 'edit N' first."),
        },
        ("update", _) => match form.clone() {
            Some(draft) => {
                let result = ctx.api.commit_edit(draft)?;
                print_messages(&result.messages);
                print_students(&result.listed_students);
            }
            None => hint("No edit in progress; use 'edit N' first."),
        },
        ("cancel", _) => {
            let result = ctx.api.cancel_edit()?;
            print_messages(&result.messages);
        }
        ("delete" | "rm", Some(index)) => {
            let confirmed = if ctx.config.confirm_delete {
                let target = ctx.api.delete_preview(index)?;
                prompter.confirm(&format!(
                    "Delete student {} ({}, {})?",
                    target.index, target.student.name, target.student.student_id
                ))?
            } else {
                true
            };
            let result = ctx.api.delete(index, confirmed)?;
            print_messages(&result.messages);
            if !result.affected_students.is_empty() {
                print_students(&result.listed_students);
            }
        }
        ("edit" | "delete" | "rm", None) => hint("Which student? e.g. 'edit 1'"),
        (other, _) => print_messages(&[CmdMessage::warning(format!(
            "Unknown command '{}'. Type 'help' for commands.",
            other
        ))]),
    }

    Ok(Step::Continue)
}

fn hint(text: &str) {
    println!("{}", text.dimmed());
}
