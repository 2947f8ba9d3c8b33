//! # API Facade
//!
//! The single entry point for hosts. `TextkeepApi` owns the store, the
//! session (current document, caches, history, bookmarks) and the host
//! capabilities, and dispatches each call to a command or to one of the pure
//! text modules.
//!
//! Every method returns `Result<CmdResult>`; hosts that want the soft-fail
//! shape (a status line plus content, never an error) pass the result
//! through [`settle`].
//!
//! `TextkeepApi<S: DocumentStore>` is generic over storage:
//! - Production: `TextkeepApi<FileStore>`
//! - Testing: `TextkeepApi<InMemoryStore>`

use crate::bookmarks::BookmarkRegistry;
use crate::commands;
use crate::config::TextkeepConfig;
use crate::diff;
use crate::error::Result;
use crate::host::{ChatSink, PreviewSink, Tokenizer};
use crate::session::Session;
use crate::store::DocumentStore;
use crate::template::{self, Template};
use crate::text::{self, TextOperation};

pub struct TextkeepApi<S: DocumentStore> {
    store: S,
    config: TextkeepConfig,
    session: Session,
    tokenizer: Option<Box<dyn Tokenizer>>,
    chat: Box<dyn ChatSink>,
}

impl<S: DocumentStore> TextkeepApi<S> {
    pub fn new(store: S, config: TextkeepConfig) -> Self {
        let session = Session::new(config.max_history);
        let chat = Box::new(PreviewSink::new(config.chat_preview_chars));
        Self {
            store,
            config,
            session,
            tokenizer: None,
            chat,
        }
    }

    /// Like `new`, but picks up the bookmarks already on disk.
    pub fn open(store: S, config: TextkeepConfig) -> Result<Self> {
        let mut api = Self::new(store, config);
        api.session.bookmarks = BookmarkRegistry::load(&api.store)?;
        Ok(api)
    }

    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    pub fn with_chat(mut self, chat: Box<dyn ChatSink>) -> Self {
        self.chat = chat;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &TextkeepConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store, &mut self.session, &self.config)
    }

    pub fn list_files(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &self.config)
    }

    pub fn load_file(&mut self, filename: &str) -> Result<commands::CmdResult> {
        commands::load::run(&self.store, &mut self.session, filename)
    }

    pub fn save(
        &mut self,
        filename: &str,
        content: &str,
        make_backup: bool,
    ) -> Result<commands::CmdResult> {
        commands::save::run(
            &mut self.store,
            &mut self.session,
            filename,
            content,
            make_backup,
        )
    }

    pub fn save_current(&mut self, content: &str) -> Result<commands::CmdResult> {
        commands::save::current(&mut self.store, &mut self.session, content)
    }

    pub fn create_file(&mut self, filename: &str) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, &self.config, filename)
    }

    pub fn delete_file(&mut self, filename: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, &mut self.session, &self.config, filename)
    }

    pub fn search(
        &self,
        content: &str,
        term: &str,
        case_sensitive: bool,
    ) -> Result<commands::CmdResult> {
        let highlighted = text::search(content, term, case_sensitive)?;
        Ok(commands::CmdResult::default().with_content(highlighted))
    }

    pub fn process(&self, content: &str, op: TextOperation) -> commands::CmdResult {
        let output = text::apply(op, content, self.tokenizer.as_deref());
        commands::CmdResult::default().with_content(output)
    }

    /// Unknown operation names pass the content through.
    pub fn process_named(&self, content: &str, name: &str) -> commands::CmdResult {
        let output = text::apply_named(name, content, self.tokenizer.as_deref());
        commands::CmdResult::default().with_content(output)
    }

    pub fn diff(&self, old: &str, new: &str) -> commands::CmdResult {
        commands::CmdResult::default().with_content(diff::diff(old, new))
    }

    pub fn format_prompt(&self, content: &str, template: Template) -> commands::CmdResult {
        commands::CmdResult::default().with_content(template.format(content))
    }

    /// Unknown template names return the content unchanged.
    pub fn format_prompt_named(&self, content: &str, name: &str) -> commands::CmdResult {
        commands::CmdResult::default().with_content(template::format_named(content, name))
    }

    pub fn send_to_chat(&mut self, content: &str) -> commands::CmdResult {
        let ack = self.chat.send(content);
        commands::CmdResult::default().with_message(commands::CmdMessage::info(ack))
    }

    /// Exports under the current document's name, or `export` if none is open.
    pub fn export(&mut self, content: &str, format: ExportFormat) -> Result<commands::CmdResult> {
        let filename = self.session.current().map(str::to_string);
        commands::export::run(&mut self.store, content, format, filename.as_deref())
    }

    pub fn add_bookmark(
        &mut self,
        content: &str,
        line: usize,
        name: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::bookmark::add(&mut self.store, &mut self.session, content, line, name)
    }

    pub fn bookmarks(&self, filename: &str) -> Result<commands::CmdResult> {
        commands::bookmark::list(&self.session, filename)
    }

    pub fn history(&self) -> Result<commands::CmdResult> {
        commands::history::list(&self.session)
    }

    pub fn restore_version(&self, index: usize, current: &str) -> Result<commands::CmdResult> {
        commands::history::restore(&self.session, index, current)
    }

    pub fn backups(&self, filename: &str) -> Result<commands::CmdResult> {
        commands::history::backups(&self.store, filename)
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::export::ExportFormat;
pub use crate::commands::{settle, CmdMessage, CmdResult, MessageLevel, Settled};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, TextkeepError};
    use crate::store::memory::InMemoryStore;

    struct WordTokenizer;

    impl Tokenizer for WordTokenizer {
        fn encode(&self, text: &str) -> Result<Vec<u32>> {
            Ok(text.split_whitespace().map(|_| 0).collect())
        }
    }

    struct RecordingSink(Vec<String>);

    impl ChatSink for RecordingSink {
        fn send(&mut self, content: &str) -> String {
            self.0.push(content.to_string());
            "sent".to_string()
        }
    }

    fn api() -> TextkeepApi<InMemoryStore> {
        TextkeepApi::new(InMemoryStore::new(), TextkeepConfig::default())
    }

    #[test]
    fn session_capacity_follows_config() {
        let config = TextkeepConfig {
            max_history: 2,
            ..TextkeepConfig::default()
        };
        let mut api = TextkeepApi::new(InMemoryStore::new(), config);
        for v in ["1", "2", "3"] {
            api.save("a.txt", v, true).unwrap();
        }
        assert_eq!(api.history().unwrap().history.len(), 2);
    }

    #[test]
    fn export_uses_current_document_name() {
        let mut api = api();
        api.save("notes.txt", "x", true).unwrap();
        api.load_file("notes.txt").unwrap();
        let res = api.export("x", ExportFormat::Text).unwrap();
        let name = res.paths[0].file_name().unwrap().to_str().unwrap().to_string();
        assert!(name.starts_with("notes_"));
    }

    #[test]
    fn tokenizer_is_used_when_supplied() {
        let api = api().with_tokenizer(Box::new(WordTokenizer));
        let res = api.process("a b c", TextOperation::CountTokens);
        assert_eq!(res.content.unwrap(), "a b c\n\n---\n*Token count: 3*");
    }

    #[test]
    fn named_dispatch_tolerates_unknowns() {
        let api = api();
        assert_eq!(api.process_named("x", "Nope").content.unwrap(), "x");
        assert_eq!(api.format_prompt_named("x", "Nope").content.unwrap(), "x");
        assert_eq!(
            api.format_prompt_named("x", "Explain").content.unwrap(),
            "Please explain the following text in simple terms:\n\nx"
        );
    }

    #[test]
    fn chat_sink_receives_content() {
        let mut api = api().with_chat(Box::new(RecordingSink(Vec::new())));
        let res = api.send_to_chat("prompt");
        assert_eq!(res.messages[0].content, "sent");
    }

    #[test]
    fn bookmark_without_document_settles_to_status() {
        let mut api = api();
        let settled = settle(api.add_bookmark("text", 1, None), "text");
        assert!(!settled.ok);
        assert_eq!(settled.kind, Some(ErrorKind::NotFound));
        assert_eq!(
            settled.status,
            format!("Error: {}", TextkeepError::NoActiveDocument)
        );
    }

    #[test]
    fn open_keeps_existing_bookmarks() {
        let mut first = api();
        first.save("a.txt", "one\ntwo", true).unwrap();
        first.load_file("a.txt").unwrap();
        first.add_bookmark("one\ntwo", 2, None).unwrap();

        let TextkeepApi { store, .. } = first;
        let mut second = TextkeepApi::open(store, TextkeepConfig::default()).unwrap();
        second.load_file("a.txt").unwrap();
        second.add_bookmark("one\ntwo", 1, None).unwrap();
        assert_eq!(second.bookmarks("a.txt").unwrap().bookmarks.len(), 2);
    }

    #[test]
    fn create_then_list() {
        let mut api = api();
        api.create_file("todo").unwrap();
        let err = api.create_file("todo.txt").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(api.list_files().unwrap().files, vec!["todo.txt"]);
    }
}
