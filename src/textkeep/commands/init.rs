use crate::bookmarks::BookmarkRegistry;
use crate::commands::{list, load, CmdMessage, CmdResult};
use crate::config::TextkeepConfig;
use crate::error::Result;
use crate::paths::Area;
use crate::session::Session;
use crate::store::DocumentStore;

fn seed_content(filename: &str) -> &'static str {
    match filename {
        "info.txt" => "# Text Manager Pro\n\nWelcome to the enhanced text management extension!",
        "notes.txt" => "# Notes\n\nYour notes go here...",
        "prompts.txt" => {
            "# Prompt Templates\n\n## Translation\nTranslate the following to [LANGUAGE]:\n\n## Summary\nSummarize this text in 3 bullet points:"
        }
        _ => "",
    }
}

/// Creates the storage layout, seeds missing default files, loads the
/// bookmark registry and opens the first default file.
pub fn run<S: DocumentStore>(
    store: &mut S,
    session: &mut Session,
    config: &TextkeepConfig,
) -> Result<CmdResult> {
    store.ensure_layout()?;
    let mut result = CmdResult::default();

    for filename in &config.default_files {
        if !store.exists(Area::Files, filename) {
            let path = store.write(Area::Files, filename, seed_content(filename))?;
            result.paths.push(path);
            result.add_message(CmdMessage::info(format!("Created {}", filename)));
        }
        load::read_cached(&*store, session, filename)?;
    }

    session.bookmarks = BookmarkRegistry::load(&*store)?;

    if let Some(first) = config.default_files.first() {
        let opened = load::run(&*store, session, first)?;
        result.content = opened.content;
    }

    Ok(result.with_files(list::files(&*store, config)?))
}
