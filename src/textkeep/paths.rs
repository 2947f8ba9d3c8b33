//! On-disk layout under the extension root:
//!
//! ```text
//! <root>/
//! ├── files/            # live documents
//! ├── backups/          # <name>.<ts>.bak pre-overwrite snapshots
//! ├── trash/            # <name>.<ts> soft-deleted documents
//! ├── exports/          # <base>_<ts>.{txt,md,json}
//! ├── bookmarks.json
//! └── config.json
//! ```

use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub const BOOKMARKS_FILENAME: &str = "bookmarks.json";

/// A storage area under the root. `Root` holds the bookmark and config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Area {
    Root,
    Files,
    Backups,
    Trash,
    Exports,
}

impl Area {
    pub fn dir_name(&self) -> Option<&'static str> {
        match self {
            Area::Root => None,
            Area::Files => Some("files"),
            Area::Backups => Some("backups"),
            Area::Trash => Some("trash"),
            Area::Exports => Some("exports"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct StoragePaths {
    root: PathBuf,
}

impl StoragePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dir(&self, area: Area) -> PathBuf {
        match area.dir_name() {
            Some(name) => self.root.join(name),
            None => self.root.clone(),
        }
    }

    pub fn file(&self, area: Area, name: &str) -> PathBuf {
        self.dir(area).join(name)
    }

    pub fn bookmarks_file(&self) -> PathBuf {
        self.root.join(BOOKMARKS_FILENAME)
    }

    pub fn ensure_dir(&self, area: Area) -> Result<PathBuf> {
        let dir = self.dir(area);
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(dir)
    }

    /// Creates every area directory.
    pub fn ensure_all(&self) -> Result<()> {
        for area in [Area::Files, Area::Backups, Area::Trash, Area::Exports] {
            self.ensure_dir(area)?;
        }
        Ok(())
    }
}
