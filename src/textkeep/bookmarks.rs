//! Bookmarks for every document, kept in one JSON file:
//! `{ "notes.txt": [ { "name", "line", "preview", "created" }, ... ] }`.
//!
//! Every mutation rewrites the whole file. There is no locking, so two
//! processes adding bookmarks at once will lose one of the writes.

use crate::error::Result;
use crate::model::Bookmark;
use crate::paths::{Area, BOOKMARKS_FILENAME};
use crate::store::DocumentStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkRegistry {
    by_file: BTreeMap<String, Vec<Bookmark>>,
}

impl BookmarkRegistry {
    /// Loads the registry, or an empty one if the file does not exist yet.
    pub fn load<S: DocumentStore>(store: &S) -> Result<Self> {
        if !store.exists(Area::Root, BOOKMARKS_FILENAME) {
            return Ok(Self::default());
        }
        let content = store.read(Area::Root, BOOKMARKS_FILENAME)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn persist<S: DocumentStore>(&self, store: &mut S) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        let path = store.write(Area::Root, BOOKMARKS_FILENAME, &content)?;
        debug!(path = %path.display(), files = self.by_file.len(), "Bookmarks saved");
        Ok(())
    }

    pub fn add(&mut self, filename: &str, bookmark: Bookmark) {
        self.by_file
            .entry(filename.to_string())
            .or_default()
            .push(bookmark);
    }

    /// Bookmarks of one document, in the order they were added.
    pub fn for_file(&self, filename: &str) -> &[Bookmark] {
        self.by_file
            .get(filename)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.by_file.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
