use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TextkeepError};
use crate::model::Bookmark;
use crate::session::Session;
use crate::store::DocumentStore;

/// Bookmarks `line` of the current document. `content` is the text the user
/// is looking at, which may differ from what is on disk.
pub fn add<S: DocumentStore>(
    store: &mut S,
    session: &mut Session,
    content: &str,
    line: usize,
    name: Option<&str>,
) -> Result<CmdResult> {
    let filename = session
        .current()
        .ok_or(TextkeepError::NoActiveDocument)?
        .to_string();

    let bookmark = Bookmark::new(content, line, name);
    let message = CmdMessage::success(format!("Bookmark added: {}", bookmark.name));
    session.bookmarks.add(&filename, bookmark.clone());
    session.bookmarks.persist(store)?;

    Ok(CmdResult::default()
        .with_bookmarks(vec![bookmark])
        .with_message(message))
}

pub fn list(session: &Session, filename: &str) -> Result<CmdResult> {
    let bookmarks = session.bookmarks.for_file(filename).to_vec();
    let mut result = CmdResult::default().with_bookmarks(bookmarks);
    if result.bookmarks.is_empty() {
        result.add_message(CmdMessage::info(format!("No bookmarks in {}", filename)));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bookmarks::BookmarkRegistry;
    use crate::error::ErrorKind;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn requires_open_document() {
        let mut store = InMemoryStore::new();
        let mut session = Session::new(10);
        let err = add(&mut store, &mut session, "text", 1, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn out_of_range_line_is_stored_with_empty_preview() {
        let mut store = InMemoryStore::new();
        let mut session = Session::new(10);
        session.open("a.txt");

        let result = add(&mut store, &mut session, "only\ntwo lines", 99, None).unwrap();
        assert_eq!(result.bookmarks[0].preview, "");
        assert_eq!(result.bookmarks[0].name, "Bookmark at line 99");
        assert_eq!(result.messages[0].content, "Bookmark added: Bookmark at line 99");
    }

    #[test]
    fn persists_every_addition() {
        let mut store = InMemoryStore::new();
        let mut session = Session::new(10);
        session.open("a.txt");
        add(&mut store, &mut session, "x\ny\nz", 2, Some("middle")).unwrap();
        session.open("b.txt");
        add(&mut store, &mut session, "q", 1, None).unwrap();

        let on_disk = BookmarkRegistry::load(&store).unwrap();
        assert_eq!(on_disk.for_file("a.txt")[0].preview, "y");
        assert_eq!(on_disk.for_file("b.txt").len(), 1);
        assert_eq!(on_disk, session.bookmarks);
    }

    #[test]
    fn list_reports_empty() {
        let session = Session::new(10);
        let result = list(&session, "a.txt").unwrap();
        assert!(result.bookmarks.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
