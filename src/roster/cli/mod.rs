//! Command-line front end. Everything that prints, prompts or exits lives here.

mod args;
mod commands;
mod interactive;
mod logging;
mod print;
mod prompt;

use args::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use roster::api::{CmdMessage, RosterApi};
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::store::fs_backend::FsBackend;
use std::path::PathBuf;
use tracing::debug;

pub(crate) struct AppContext {
    pub api: RosterApi<FsBackend>,
    pub config: RosterConfig,
    pub data_dir: PathBuf,
}

/// Runs the CLI. Returns false if the command failed.
pub fn run() -> bool {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match dispatch(cli) {
        Ok(()) => true,
        Err(e) => {
            print::print_error(&e);
            false
        }
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    // `list` reports this itself.
    if !matches!(cli.command, Some(Commands::List) | None) {
        if let Some(warning) = ctx.api.load_warning() {
            print::print_messages(&[CmdMessage::warning(warning)]);
        }
    }

    match cli.command {
        Some(Commands::Add {
            name,
            student_id,
            email,
            contact,
        }) => commands::add(&mut ctx, name, student_id, email, contact),
        Some(Commands::List) | None => commands::list(&ctx),
        Some(Commands::Edit {
            index,
            name,
            student_id,
            email,
            contact,
        }) => commands::edit(&mut ctx, &index, name, student_id, email, contact),
        Some(Commands::Delete { index, yes }) => commands::delete(&mut ctx, &index, yes),
        Some(Commands::Interactive) => interactive::run(&mut ctx),
        Some(Commands::Config { key, value }) => commands::config(&ctx, key, value),
        Some(Commands::Path) => commands::path(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "roster", "roster")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                RosterError::Store(
                    "Could not determine a data directory; pass --data-dir".to_string(),
                )
            })?,
    };

    let config = match RosterConfig::load(&data_dir) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "config unreadable, using defaults");
            RosterConfig::default()
        }
    };
    debug!(data_dir = %data_dir.display(), key = %config.storage_key, "opening roster");

    let api = RosterApi::open(&data_dir, &config);
    Ok(AppContext {
        api,
        config,
        data_dir,
    })
}
