use super::DocumentStore;
use crate::error::{Result, TextkeepError};
use crate::paths::Area;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone)]
struct Entry {
    content: String,
    modified: DateTime<Utc>,
}

/// Map-backed store. Listing order is name order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: BTreeMap<(Area, String), Entry>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for InMemoryStore {
    fn read(&self, area: Area, name: &str) -> Result<String> {
        self.files
            .get(&(area, name.to_string()))
            .map(|e| e.content.clone())
            .ok_or_else(|| TextkeepError::NotFound(name.to_string()))
    }

    fn write(&mut self, area: Area, name: &str, content: &str) -> Result<PathBuf> {
        self.files.insert(
            (area, name.to_string()),
            Entry {
                content: content.to_string(),
                modified: Utc::now(),
            },
        );
        Ok(self.location(area, name))
    }

    fn exists(&self, area: Area, name: &str) -> bool {
        self.files.contains_key(&(area, name.to_string()))
    }

    fn list(&self, area: Area) -> Result<Vec<String>> {
        Ok(self
            .files
            .keys()
            .filter(|(a, _)| *a == area)
            .map(|(_, name)| name.clone())
            .collect())
    }

    fn rename(&mut self, from: Area, name: &str, to: Area, new_name: &str) -> Result<PathBuf> {
        let entry = self
            .files
            .remove(&(from, name.to_string()))
            .ok_or_else(|| TextkeepError::NotFound(name.to_string()))?;
        self.files.insert((to, new_name.to_string()), entry);
        Ok(self.location(to, new_name))
    }

    fn modified(&self, area: Area, name: &str) -> Result<DateTime<Utc>> {
        self.files
            .get(&(area, name.to_string()))
            .map(|e| e.modified)
            .ok_or_else(|| TextkeepError::NotFound(name.to_string()))
    }

    fn location(&self, area: Area, name: &str) -> PathBuf {
        match area.dir_name() {
            Some(dir) => PathBuf::from(dir).join(name),
            None => PathBuf::from(name),
        }
    }

    fn ensure_layout(&mut self) -> Result<()> {
        Ok(())
    }
}
