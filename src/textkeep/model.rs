use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Last known state of a document, as read from or written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedDocument {
    pub content: String,
    pub modified: DateTime<Utc>,
}

/// One save event recorded by the history ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub content: String,
    pub filename: String,
    pub timestamp: NaiveDateTime,
}

impl HistoryEntry {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            filename: filename.into(),
            timestamp: Local::now().naive_local(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub name: String,
    /// 1-based, never validated against the document length
    pub line: usize,
    pub preview: String,
    pub created: NaiveDateTime,
}

impl Bookmark {
    /// Builds a bookmark against `content`, deriving the name and preview.
    pub fn new(content: &str, line: usize, name: Option<&str>) -> Self {
        let name = match name {
            Some(n) if !n.trim().is_empty() => n.to_string(),
            _ => format!("Bookmark at line {}", line),
        };
        let preview = line
            .checked_sub(1)
            .and_then(|idx| content.split('\n').nth(idx))
            .unwrap_or_default()
            .to_string();

        Self {
            name,
            line,
            preview,
            created: Local::now().naive_local(),
        }
    }
}

/// JSON export layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEnvelope {
    pub filename: Option<String>,
    pub content: String,
    pub exported_at: NaiveDateTime,
    pub lines: Vec<String>,
}

impl ExportEnvelope {
    pub fn new(filename: Option<&str>, content: &str) -> Self {
        Self {
            filename: filename.map(str::to_string),
            content: content.to_string(),
            exported_at: Local::now().naive_local(),
            lines: content.split('\n').map(str::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bookmark_previews_the_requested_line() {
        let bm = Bookmark::new("one\ntwo\nthree", 2, Some("Second"));
        assert_eq!(bm.name, "Second");
        assert_eq!(bm.preview, "two");
    }

    #[test]
    fn bookmark_default_name() {
        let bm = Bookmark::new("one", 1, None);
        assert_eq!(bm.name, "Bookmark at line 1");

        let blank = Bookmark::new("one", 1, Some("  "));
        assert_eq!(blank.name, "Bookmark at line 1");

        let padded = Bookmark::new("one", 1, Some(" Intro "));
        assert_eq!(padded.name, " Intro ");
    }

    #[test]
    fn bookmark_past_the_end_has_empty_preview() {
        let bm = Bookmark::new("one\ntwo", 7, None);
        assert_eq!(bm.line, 7);
        assert_eq!(bm.preview, "");

        let zero = Bookmark::new("one\ntwo", 0, None);
        assert_eq!(zero.preview, "");
    }

    #[test]
    fn bookmark_reads_python_style_timestamps() {
        let json = r#"{"name":"n","line":3,"preview":"p","created":"2024-05-01T09:30:12.123456"}"#;
        let bm: Bookmark = serde_json::from_str(json).unwrap();
        assert_eq!(bm.line, 3);
        assert_eq!(bm.created.format("%H:%M:%S").to_string(), "09:30:12");
    }

    #[test]
    fn envelope_splits_lines() {
        let env = ExportEnvelope::new(None, "a\n\nb");
        assert_eq!(env.lines, vec!["a", "", "b"]);
        assert!(env.filename.is_none());
    }
}
