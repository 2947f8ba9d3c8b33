use crate::commands::helpers::stamped_name;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TextkeepError};
use crate::model::ExportEnvelope;
use crate::paths::Area;
use crate::store::DocumentStore;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Markdown,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Text, ExportFormat::Markdown, ExportFormat::Json];

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Text => "Text (.txt)",
            ExportFormat::Markdown => "Markdown (.md)",
            ExportFormat::Json => "JSON (.json)",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Markdown => "md",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the labels as well as bare extensions (`txt`, `md`, `json`).
impl FromStr for ExportFormat {
    type Err = TextkeepError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        ExportFormat::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(s) || f.extension().eq_ignore_ascii_case(s))
            .ok_or_else(|| TextkeepError::Invalid(format!("export format: {}", s)))
    }
}

pub fn run<S: DocumentStore>(
    store: &mut S,
    content: &str,
    format: ExportFormat,
    filename: Option<&str>,
) -> Result<CmdResult> {
    let base = base_name(filename);
    let export_name = stamped_name(&*store, Area::Exports, |ts| {
        format!("{}_{}.{}", base, ts, format.extension())
    });

    let body = match format {
        ExportFormat::Text | ExportFormat::Markdown => content.to_string(),
        ExportFormat::Json => serde_json::to_string_pretty(&ExportEnvelope::new(filename, content))?,
    };

    let path = store.write(Area::Exports, &export_name, &body)?;
    info!(path = %path.display(), format = %format, "Exported");

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Exported to: {}", path.display())))
        .with_paths(vec![path]))
}

/// The filename without its last extension, or `export`.
fn base_name(filename: Option<&str>) -> String {
    filename
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .and_then(|f| Path::new(f).file_stem())
        .and_then(|stem| stem.to_str())
        .unwrap_or("export")
        .to_string()
}
