use crate::commands::{CmdMessage, CmdResult};
use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use std::path::Path;

pub const KEY_STORAGE_KEY: &str = "storage-key";
pub const KEY_CONFIRM_DELETE: &str = "confirm-delete";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(data_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = RosterConfig::load(data_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = value_of(&config, &key)?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
        }
        ConfigAction::Set(key, value) => {
            match key.as_str() {
                KEY_STORAGE_KEY => config.set_storage_key(&value)?,
                KEY_CONFIRM_DELETE => config.set_confirm_delete(&value)?,
                other => return Err(unknown_key(other)),
            }
            config.save(data_dir)?;
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                value_of(&config, &key)?
            )));
        }
    }

    Ok(result.with_config(config))
}

fn value_of(config: &RosterConfig, key: &str) -> Result<String> {
    match key {
        KEY_STORAGE_KEY => Ok(config.storage_key.clone()),
        KEY_CONFIRM_DELETE => Ok(config.confirm_delete.to_string()),
        other => Err(unknown_key(other)),
    }
}

fn unknown_key(key: &str) -> RosterError {
    RosterError::Config(format!(
        "Unknown config key: {} (known keys: {}, {})",
        key, KEY_STORAGE_KEY, KEY_CONFIRM_DELETE
    ))
}
