use crate::commands::helpers::{stamped_name, validate_name};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{CachedDocument, HistoryEntry};
use crate::paths::Area;
use crate::session::Session;
use crate::store::DocumentStore;
use tracing::info;

pub const UNTITLED: &str = "untitled.txt";

/// Writes `content` to `filename`, first copying the previous version into
/// `backups/` when `make_backup` is set and the file already exists.
pub fn run<S: DocumentStore>(
    store: &mut S,
    session: &mut Session,
    filename: &str,
    content: &str,
    make_backup: bool,
) -> Result<CmdResult> {
    let filename = validate_name(filename)?;
    let mut result = CmdResult::default();

    if make_backup && store.exists(Area::Files, filename) {
        let previous = store.read(Area::Files, filename)?;
        let backup_name = stamped_name(&*store, Area::Backups, |ts| {
            format!("{}.{}.bak", filename, ts)
        });
        let path = store.write(Area::Backups, &backup_name, &previous)?;
        result.paths.push(path);
    }

    let path = store.write(Area::Files, filename, content)?;
    info!(path = %path.display(), "Saved document");

    session.history.append(HistoryEntry::new(filename, content));
    let modified = store.modified(Area::Files, filename)?;
    session.cache(
        filename,
        CachedDocument {
            content: content.to_string(),
            modified,
        },
    );

    result.add_message(CmdMessage::success(format!(
        "Saved to {} successfully!",
        filename
    )));
    Ok(result.with_content(content))
}

/// Saves to the current document, or to `untitled.txt` when none is open.
pub fn current<S: DocumentStore>(
    store: &mut S,
    session: &mut Session,
    content: &str,
) -> Result<CmdResult> {
    let filename = session.current().unwrap_or(UNTITLED).to_string();
    run(store, session, &filename, content, true)
}
