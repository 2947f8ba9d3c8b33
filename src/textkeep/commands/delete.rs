use crate::commands::helpers::{stamped_name, validate_name};
use crate::commands::{list, CmdMessage, CmdResult};
use crate::config::TextkeepConfig;
use crate::error::{Result, TextkeepError};
use crate::paths::Area;
use crate::session::Session;
use crate::store::DocumentStore;
use tracing::info;

/// Moves a document into `trash/` as `<name>.<ts>`.
pub fn run<S: DocumentStore>(
    store: &mut S,
    session: &mut Session,
    config: &TextkeepConfig,
    filename: &str,
) -> Result<CmdResult> {
    let filename = validate_name(filename)?;
    if !store.exists(Area::Files, filename) {
        return Err(TextkeepError::NotFound(filename.to_string()));
    }

    let trash_name = stamped_name(&*store, Area::Trash, |ts| format!("{}.{}", filename, ts));
    let path = store.rename(Area::Files, filename, Area::Trash, &trash_name)?;
    info!(path = %path.display(), "Moved document to trash");

    session.close(filename);
    session.evict(filename);

    Ok(CmdResult::default()
        .with_paths(vec![path])
        .with_files(list::files(&*store, config)?)
        .with_message(CmdMessage::success(format!("Moved {} to trash", filename))))
}
