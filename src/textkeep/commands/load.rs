use crate::commands::helpers::validate_name;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CachedDocument;
use crate::paths::Area;
use crate::session::Session;
use crate::store::DocumentStore;

/// Reads a document, caches it and makes it the current document.
pub fn run<S: DocumentStore>(store: &S, session: &mut Session, filename: &str) -> Result<CmdResult> {
    let filename = validate_name(filename)?;
    let content = read_cached(store, session, filename)?;
    session.open(filename);

    Ok(CmdResult::default()
        .with_content(content)
        .with_message(CmdMessage::info(format!("Loaded: {}", filename))))
}

/// Reads from disk and refreshes the session cache, without changing the
/// current document.
pub fn read_cached<S: DocumentStore>(
    store: &S,
    session: &mut Session,
    filename: &str,
) -> Result<String> {
    let content = store.read(Area::Files, filename)?;
    let modified = store.modified(Area::Files, filename)?;
    session.cache(
        filename,
        CachedDocument {
            content: content.clone(),
            modified,
        },
    );
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn loads_and_opens() {
        let mut store = InMemoryStore::new();
        store.write(Area::Files, "a.txt", "hello").unwrap();
        let mut session = Session::new(10);

        let result = run(&store, &mut session, "a.txt").unwrap();
        assert_eq!(result.content.as_deref(), Some("hello"));
        assert_eq!(session.current(), Some("a.txt"));
        assert_eq!(session.cached("a.txt").unwrap().content, "hello");
    }

    #[test]
    fn missing_file_is_not_found_and_keeps_current() {
        let store = InMemoryStore::new();
        let mut session = Session::new(10);
        session.open("other.txt");

        let err = run(&store, &mut session, "ghost.txt").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(session.current(), Some("other.txt"));
    }
}
