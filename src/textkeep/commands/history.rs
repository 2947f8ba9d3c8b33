use crate::commands::{CmdMessage, CmdResult};
use crate::diff::diff;
use crate::error::{Result, TextkeepError};
use crate::paths::Area;
use crate::session::Session;
use crate::store::DocumentStore;

/// Recent saves, oldest first.
pub fn list(session: &Session) -> Result<CmdResult> {
    let entries: Vec<_> = session.history.entries().cloned().collect();
    let mut result = CmdResult::default().with_history(entries);
    if result.history.is_empty() {
        result.add_message(CmdMessage::info("No history available yet."));
    }
    Ok(result)
}

/// Returns the content of history entry `index` along with a diff from
/// `current` to it. Nothing is written; the caller decides whether to save.
pub fn restore(session: &Session, index: usize, current: &str) -> Result<CmdResult> {
    let entry = session
        .history
        .get(index)
        .ok_or_else(|| TextkeepError::NotFound(format!("history entry {}", index)))?;

    Ok(CmdResult::default()
        .with_content(entry.content.clone())
        .with_message(CmdMessage::info(format!(
            "Version of {} from {}",
            entry.filename,
            entry.timestamp.format("%Y-%m-%d %H:%M:%S")
        )))
        .with_message(CmdMessage::info(diff(current, &entry.content))))
}

/// Backup files of one document, oldest first.
pub fn backups<S: DocumentStore>(store: &S, filename: &str) -> Result<CmdResult> {
    let prefix = format!("{}.", filename);
    let mut names: Vec<String> = store
        .list(Area::Backups)?
        .into_iter()
        .filter(|name| name.starts_with(&prefix) && name.ends_with(".bak"))
        .collect();
    names.sort();

    let paths = names
        .iter()
        .map(|name| store.location(Area::Backups, name))
        .collect();
    Ok(CmdResult::default().with_files(names).with_paths(paths))
}
