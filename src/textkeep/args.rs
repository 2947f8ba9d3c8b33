use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "textkeep", version)]
#[command(about = "Manage, transform and template text notes for chat prompts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Storage root (defaults to $TEXTKEEP_HOME, then the platform data dir)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the storage tree and the default files
    Init,

    /// List documents
    #[command(alias = "ls")]
    List,

    /// Print a document
    #[command(alias = "v")]
    Show { file: String },

    /// Save stdin to a document, backing up the previous version
    Save {
        file: String,

        /// Overwrite without writing a backup
        #[arg(long)]
        no_backup: bool,
    },

    /// Create a new document
    #[command(alias = "n")]
    Create { file: String },

    /// Move a document to the trash
    #[command(alias = "rm")]
    Delete { file: String },

    /// Highlight a term in a document
    Search {
        file: String,
        term: String,

        #[arg(short, long)]
        case_sensitive: bool,
    },

    /// Run a text operation on a document (e.g. "Sort Lines")
    Process { file: String, operation: String },

    /// Wrap a document in a prompt template (e.g. "Summary")
    Template {
        file: String,
        template: String,

        /// Hand the prompt to the chat
        #[arg(long)]
        send: bool,
    },

    /// Diff two documents
    Diff { old: String, new: String },

    /// Export a document
    Export {
        file: String,

        /// txt, md or json
        #[arg(short, long, default_value = "txt")]
        format: String,
    },

    /// Bookmark a line of a document
    Bookmark {
        file: String,
        line: usize,
        name: Option<String>,
    },

    /// List the bookmarks of a document
    Bookmarks { file: String },

    /// List the backups of a document
    Backups { file: String },

    /// Get or set configuration
    Config {
        /// Configuration key (max-history, default-ext, chat-preview-chars)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
