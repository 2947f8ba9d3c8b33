//! # Textkeep Architecture
//!
//! Textkeep is the text and note manager behind a chat host's "notes" tab: it
//! browses, edits, saves, versions, searches, transforms and templates a
//! handful of text files on local disk, and formats the result for a prompt.
//! It is a library first; the `textkeep` binary is one small host.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host (main.rs + args.rs, or an embedding application)      │
//! │  - Collects filenames, terms, line numbers, choices         │
//! │  - The ONLY place that prints                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Session, the store and host capabilities        │
//! │  - Returns Result<CmdResult>; `settle` gives status strings │
//! └─────────────────────────────────────────────────────────────┘
//!                │                                │
//!                ▼                                ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Commands (commands/*.rs)     │ │  Pure text (text/, diff,  │
//! │  load, save, create, delete,  │ │  template)                │
//! │  bookmark, export, history    │ │  content -> content       │
//! └───────────────────────────────┘ └───────────────────────────┘
//!                │
//!                ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DocumentStore trait over named areas (files, backups,    │
//! │    trash, exports, root)                                    │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State
//!
//! There are no globals. The open document, content cache, save history and
//! bookmark registry live in a [`session::Session`] owned by the API value.
//! History does not survive the process; backups, trash and exports are the
//! durable record.
//!
//! ## Errors
//!
//! [`error::TextkeepError`] carries an [`error::ErrorKind`] (I/O, not found,
//! already exists, capability unavailable, invalid input). Nothing panics on
//! user input.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: File, bookmark, export and history operations
//! - [`text`]: Line transforms and search/highlight
//! - [`diff`]: Unified diff rendering
//! - [`template`]: Prompt templates
//! - [`store`]: Storage abstraction and implementations
//! - [`paths`]: On-disk layout
//! - [`bookmarks`], [`history`], [`session`]: Session state
//! - [`host`]: Tokenizer and chat capabilities supplied by the host
//! - [`config`]: Configuration
//! - [`model`]: Core data types

pub mod api;
pub mod bookmarks;
pub mod commands;
pub mod config;
pub mod diff;
pub mod error;
pub mod history;
pub mod host;
pub mod model;
pub mod paths;
pub mod session;
pub mod store;
pub mod template;
pub mod text;
