use crate::commands::helpers::validate_name;
use crate::commands::{list, CmdMessage, CmdResult};
use crate::config::TextkeepConfig;
use crate::error::{Result, TextkeepError};
use crate::paths::Area;
use crate::store::DocumentStore;
use chrono::Local;

pub fn run<S: DocumentStore>(
    store: &mut S,
    config: &TextkeepConfig,
    filename: &str,
) -> Result<CmdResult> {
    let filename = validate_name(filename)?;
    let filename = if config.is_allowed(filename) {
        filename.to_string()
    } else {
        format!("{}{}", filename, config.default_ext)
    };

    if store.exists(Area::Files, &filename) {
        return Err(TextkeepError::AlreadyExists(filename));
    }

    let header = format!(
        "# {}\n\nNew file created on {}",
        filename,
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    let path = store.write(Area::Files, &filename, &header)?;

    Ok(CmdResult::default()
        .with_content(header)
        .with_paths(vec![path])
        .with_files(list::files(&*store, config)?)
        .with_message(CmdMessage::success(format!("Created: {}", filename))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn appends_default_extension_and_seeds_header() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, &TextkeepConfig::default(), "ideas").unwrap();

        let content = store.read(Area::Files, "ideas.txt").unwrap();
        assert!(content.starts_with("# ideas.txt\n\nNew file created on "));
        assert_eq!(result.files, vec!["ideas.txt"]);
    }

    #[test]
    fn keeps_allowed_extension() {
        let mut store = InMemoryStore::new();
        run(&mut store, &TextkeepConfig::default(), "readme.md").unwrap();
        assert!(store.exists(Area::Files, "readme.md"));
    }

    #[test]
    fn collision_is_already_exists() {
        let mut store = InMemoryStore::new();
        store.write(Area::Files, "a.txt", "keep me").unwrap();

        let err = run(&mut store, &TextkeepConfig::default(), "a").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(store.read(Area::Files, "a.txt").unwrap(), "keep me");
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, &TextkeepConfig::default(), "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
