use crate::commands::{CmdMessage, CmdResult};
use crate::config::TextkeepConfig;
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = TextkeepConfig::load(dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            for key in TextkeepConfig::KEYS {
                if let Some(val) = config.get(key) {
                    result.add_message(CmdMessage::info(format!("{} = {}", key, val)));
                }
            }
        }
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(val) => result.add_message(CmdMessage::info(val)),
            None => {
                result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
            }
        },
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e.to_string()));
                return Ok(result);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
        }
    }

    Ok(result)
}
