//! Capabilities supplied by the embedding host.

use crate::error::Result;

/// Turns text into model tokens. Only "Count Tokens" uses it.
pub trait Tokenizer {
    fn encode(&self, text: &str) -> Result<Vec<u32>>;
}

/// Hands a finished prompt to the host's chat and returns an acknowledgement.
pub trait ChatSink {
    fn send(&mut self, content: &str) -> String;
}

/// Delivery is owned by the host; this just echoes the head of the prompt.
#[derive(Debug, Clone)]
pub struct PreviewSink {
    pub preview_chars: usize,
}

impl PreviewSink {
    pub fn new(preview_chars: usize) -> Self {
        Self { preview_chars }
    }
}

impl Default for PreviewSink {
    fn default() -> Self {
        Self::new(200)
    }
}

impl ChatSink for PreviewSink {
    fn send(&mut self, content: &str) -> String {
        let head: String = content.chars().take(self.preview_chars).collect();
        format!("Ready to send to chat:\n\n{}...", head)
    }
}
