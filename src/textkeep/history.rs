//! Bounded, process-local log of recent saves. Nothing here is persisted.

use crate::model::HistoryEntry;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct HistoryLedger {
    capacity: usize,
    entries: VecDeque<HistoryEntry>,
}

impl HistoryLedger {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends, evicting from the front once over capacity.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HistoryLedger {
    fn default() -> Self {
        Self::new(10)
    }
}
