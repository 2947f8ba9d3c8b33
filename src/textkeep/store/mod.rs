//! # Storage Layer
//!
//! [`DocumentStore`] is the only place that touches persistence. Everything above
//! it (commands, session, API) works with names inside an [`Area`] and never
//! builds paths itself.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store rooted at the extension directory
//!   (see [`crate::paths`] for the layout).
//! - [`memory::InMemoryStore`]: map-backed store for tests. No persistence.
//!
//! Whole files are read and written as one unit; there is no streaming.

use crate::error::Result;
use crate::paths::Area;
use chrono::{DateTime, Utc};
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for document storage.
pub trait DocumentStore {
    /// Read a whole file. Missing files are `TextkeepError::NotFound`.
    fn read(&self, area: Area, name: &str) -> Result<String>;

    /// Create or overwrite a file, returning where it landed.
    fn write(&mut self, area: Area, name: &str, content: &str) -> Result<PathBuf>;

    fn exists(&self, area: Area, name: &str) -> bool;

    /// Names of the files in an area, in listing order.
    fn list(&self, area: Area) -> Result<Vec<String>>;

    /// Move a file between areas without copying it.
    fn rename(&mut self, from: Area, name: &str, to: Area, new_name: &str) -> Result<PathBuf>;

    /// Last modification time of a file.
    fn modified(&self, area: Area, name: &str) -> Result<DateTime<Utc>>;

    /// Location of a file, whether or not it exists.
    fn location(&self, area: Area, name: &str) -> PathBuf;

    /// Creates every area up front. Stores without directories do nothing.
    fn ensure_layout(&mut self) -> Result<()>;
}
