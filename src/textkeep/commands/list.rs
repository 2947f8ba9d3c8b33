use crate::commands::CmdResult;
use crate::config::TextkeepConfig;
use crate::error::Result;
use crate::paths::Area;
use crate::store::DocumentStore;

/// Documents with an allowed extension, in the store's listing order.
pub fn files<S: DocumentStore>(store: &S, config: &TextkeepConfig) -> Result<Vec<String>> {
    Ok(store
        .list(Area::Files)?
        .into_iter()
        .filter(|name| config.is_allowed(name))
        .collect())
}

pub fn run<S: DocumentStore>(store: &S, config: &TextkeepConfig) -> Result<CmdResult> {
    Ok(CmdResult::default().with_files(files(store, config)?))
}
