use crate::bookmarks::BookmarkRegistry;
use crate::history::HistoryLedger;
use crate::model::CachedDocument;
use std::collections::HashMap;

/// Per-host editing state: the open document, what was last read or written
/// for each file, recent saves and bookmarks.
#[derive(Debug, Default)]
pub struct Session {
    current: Option<String>,
    cache: HashMap<String, CachedDocument>,
    pub history: HistoryLedger,
    pub bookmarks: BookmarkRegistry,
}

impl Session {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            history: HistoryLedger::new(history_capacity),
            ..Self::default()
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn open(&mut self, filename: &str) {
        self.current = Some(filename.to_string());
    }

    /// Clears the current document if it is `filename`.
    pub fn close(&mut self, filename: &str) {
        if self.current.as_deref() == Some(filename) {
            self.current = None;
        }
    }

    pub fn cache(&mut self, filename: &str, doc: CachedDocument) {
        self.cache.insert(filename.to_string(), doc);
    }

    pub fn evict(&mut self, filename: &str) {
        self.cache.remove(filename);
    }

    pub fn cached(&self, filename: &str) -> Option<&CachedDocument> {
        self.cache.get(filename)
    }
}
