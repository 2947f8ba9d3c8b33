use crate::error::{ErrorKind, Result};
use crate::model::{Bookmark, HistoryEntry};
use std::path::PathBuf;

pub mod bookmark;
pub mod config;
pub mod create;
pub mod delete;
pub mod export;
pub mod helpers;
pub mod history;
pub mod init;
pub mod list;
pub mod load;
pub mod save;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Document text to hand back to the editor, if the command produced one
    pub content: Option<String>,
    pub files: Vec<String>,
    pub paths: Vec<PathBuf>,
    pub bookmarks: Vec<Bookmark>,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_files(mut self, files: Vec<String>) -> Self {
        self.files = files;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_bookmarks(mut self, bookmarks: Vec<Bookmark>) -> Self {
        self.bookmarks = bookmarks;
        self
    }

    pub fn with_history(mut self, history: Vec<HistoryEntry>) -> Self {
        self.history = history;
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}

/// The soft-fail shape hosts display: always a status line and some content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled {
    pub ok: bool,
    pub kind: Option<ErrorKind>,
    pub status: String,
    pub content: String,
}

/// Collapses a command result into a status plus content, substituting
/// `fallback` when the command failed or produced no content.
pub fn settle(result: Result<CmdResult>, fallback: impl Into<String>) -> Settled {
    match result {
        Ok(res) => {
            let status = res
                .messages
                .iter()
                .map(|m| m.content.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            Settled {
                ok: true,
                kind: None,
                status,
                content: res.content.unwrap_or_else(|| fallback.into()),
            }
        }
        Err(e) => Settled {
            ok: false,
            kind: Some(e.kind()),
            status: format!("Error: {}", e),
            content: fallback.into(),
        },
    }
}
