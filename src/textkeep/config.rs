use crate::error::{Result, TextkeepError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_EXT: &str = ".txt";
const DEFAULT_MAX_HISTORY: usize = 10;
const DEFAULT_CHAT_PREVIEW_CHARS: usize = 200;

/// Configuration stored in `<root>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextkeepConfig {
    /// Capacity of the in-memory save history
    #[serde(default = "default_max_history")]
    pub max_history: usize,

    /// Files seeded by `init` when missing; the first one is opened
    #[serde(default = "default_files")]
    pub default_files: Vec<String>,

    /// Extension appended to new file names that lack an allowed one
    #[serde(default = "default_ext")]
    pub default_ext: String,

    /// Extensions shown by the file listing
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,

    /// How much of a prompt the chat preview shows
    #[serde(default = "default_chat_preview_chars")]
    pub chat_preview_chars: usize,
}

fn default_max_history() -> usize {
    DEFAULT_MAX_HISTORY
}

fn default_files() -> Vec<String> {
    vec![
        "info.txt".to_string(),
        "notes.txt".to_string(),
        "prompts.txt".to_string(),
    ]
}

fn default_ext() -> String {
    DEFAULT_EXT.to_string()
}

fn default_allowed_extensions() -> Vec<String> {
    vec![".txt".to_string(), ".md".to_string()]
}

fn default_chat_preview_chars() -> usize {
    DEFAULT_CHAT_PREVIEW_CHARS
}

impl Default for TextkeepConfig {
    fn default() -> Self {
        Self {
            max_history: default_max_history(),
            default_files: default_files(),
            default_ext: default_ext(),
            allowed_extensions: default_allowed_extensions(),
            chat_preview_chars: default_chat_preview_chars(),
        }
    }
}

impl TextkeepConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TextkeepConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Normalizes to a leading dot. The extension must be one the listing shows.
    pub fn set_default_ext(&mut self, ext: &str) -> Result<()> {
        let ext = if ext.starts_with('.') {
            ext.to_string()
        } else {
            format!(".{}", ext)
        };
        if !self.allowed_extensions.contains(&ext) {
            return Err(TextkeepError::Invalid(format!(
                "default extension {} (allowed: {})",
                ext,
                self.allowed_extensions.join(", ")
            )));
        }
        self.default_ext = ext;
        Ok(())
    }

    pub fn is_allowed(&self, filename: &str) -> bool {
        self.allowed_extensions
            .iter()
            .any(|ext| filename.ends_with(ext.as_str()))
    }

    pub const KEYS: &'static [&'static str] = &["max-history", "default-ext", "chat-preview-chars"];

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "max-history" => Some(self.max_history.to_string()),
            "default-ext" => Some(self.default_ext.clone()),
            "chat-preview-chars" => Some(self.chat_preview_chars.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "max-history" => self.max_history = parse_count(key, value)?,
            "default-ext" => self.set_default_ext(value.trim())?,
            "chat-preview-chars" => self.chat_preview_chars = parse_count(key, value)?,
            _ => return Err(TextkeepError::Invalid(format!("config key: {}", key))),
        }
        Ok(())
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|_| TextkeepError::Invalid(format!("value for {}: {}", key, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn default_config() {
        let config = TextkeepConfig::default();
        assert_eq!(config.max_history, 10);
        assert_eq!(config.default_ext, ".txt");
        assert_eq!(config.default_files[0], "info.txt");
    }

    #[test]
    fn set_default_ext_without_dot() {
        let mut config = TextkeepConfig::default();
        config.set_default_ext("md").unwrap();
        assert_eq!(config.default_ext, ".md");
    }

    #[test]
    fn default_ext_outside_allowed_list_is_rejected() {
        let mut config = TextkeepConfig::default();
        let err = config.set("default-ext", "rst").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(config.default_ext, ".txt");
    }

    #[test]
    fn is_allowed() {
        let config = TextkeepConfig::default();
        assert!(config.is_allowed("notes.md"));
        assert!(config.is_allowed("a.txt"));
        assert!(!config.is_allowed("image.png"));
    }

    #[test]
    fn get_and_set() {
        let mut config = TextkeepConfig::default();
        config.set("max-history", "3").unwrap();
        assert_eq!(config.get("max-history").as_deref(), Some("3"));

        let err = config.set("max-history", "lots").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config.get("colour"), None);
    }

    #[test]
    fn load_missing_config() {
        let tmp = tempfile::tempdir().unwrap();
        let config = TextkeepConfig::load(tmp.path()).unwrap();
        assert_eq!(config, TextkeepConfig::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(CONFIG_FILENAME), r#"{"max_history": 4}"#).unwrap();
        let config = TextkeepConfig::load(tmp.path()).unwrap();
        assert_eq!(config.max_history, 4);
        assert_eq!(config.allowed_extensions, vec![".txt", ".md"]);
    }

    #[test]
    fn save_and_load() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = TextkeepConfig::default();
        config.set_default_ext(".md").unwrap();
        config.save(tmp.path()).unwrap();

        let loaded = TextkeepConfig::load(tmp.path()).unwrap();
        assert_eq!(loaded.default_ext, ".md");
    }
}
