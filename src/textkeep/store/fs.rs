use super::DocumentStore;
use crate::error::{Result, TextkeepError};
use crate::paths::{Area, StoragePaths};
use chrono::{DateTime, Utc};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::debug;

pub struct FileStore {
    paths: StoragePaths,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            paths: StoragePaths::new(root),
        }
    }

    pub fn paths(&self) -> &StoragePaths {
        &self.paths
    }
}

fn not_found_or_io(err: io::Error, name: &str) -> TextkeepError {
    if err.kind() == io::ErrorKind::NotFound {
        TextkeepError::NotFound(name.to_string())
    } else {
        TextkeepError::Io(err)
    }
}

impl DocumentStore for FileStore {
    fn read(&self, area: Area, name: &str) -> Result<String> {
        let path = self.paths.file(area, name);
        debug!(path = %path.display(), "Reading file");
        fs::read_to_string(&path).map_err(|e| not_found_or_io(e, name))
    }

    fn write(&mut self, area: Area, name: &str, content: &str) -> Result<PathBuf> {
        self.paths.ensure_dir(area)?;
        let path = self.paths.file(area, name);
        debug!(path = %path.display(), bytes = content.len(), "Writing file");
        fs::write(&path, content)?;
        Ok(path)
    }

    fn exists(&self, area: Area, name: &str) -> bool {
        self.paths.file(area, name).exists()
    }

    fn list(&self, area: Area) -> Result<Vec<String>> {
        let dir = self.paths.dir(area);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        debug!(path = %dir.display(), "Listing directory");

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    fn rename(&mut self, from: Area, name: &str, to: Area, new_name: &str) -> Result<PathBuf> {
        let source = self.paths.file(from, name);
        if !source.exists() {
            return Err(TextkeepError::NotFound(name.to_string()));
        }
        self.paths.ensure_dir(to)?;
        let target = self.paths.file(to, new_name);
        debug!(from = %source.display(), to = %target.display(), "Renaming file");
        fs::rename(&source, &target)?;
        Ok(target)
    }

    fn modified(&self, area: Area, name: &str) -> Result<DateTime<Utc>> {
        let path = self.paths.file(area, name);
        let meta = fs::metadata(&path).map_err(|e| not_found_or_io(e, name))?;
        Ok(DateTime::<Utc>::from(meta.modified()?))
    }

    fn location(&self, area: Area, name: &str) -> PathBuf {
        self.paths.file(area, name)
    }

    fn ensure_layout(&mut self) -> Result<()> {
        debug!(path = %self.paths.root().display(), "Creating storage layout");
        self.paths.ensure_all()
    }
}
