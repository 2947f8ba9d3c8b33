//! Prompt templates: fixed instruction preambles wrapped around content.

use crate::error::{Result, TextkeepError};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    Translation,
    Summary,
    Rewrite,
    Explain,
    Questions,
    Keywords,
    Sentiment,
    FactCheck,
    SdPrompt,
    Custom,
}

impl Template {
    pub const ALL: [Template; 10] = [
        Template::Translation,
        Template::Summary,
        Template::Rewrite,
        Template::Explain,
        Template::Questions,
        Template::Keywords,
        Template::Sentiment,
        Template::FactCheck,
        Template::SdPrompt,
        Template::Custom,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Template::Translation => "Translation",
            Template::Summary => "Summary",
            Template::Rewrite => "Rewrite",
            Template::Explain => "Explain",
            Template::Questions => "Questions",
            Template::Keywords => "Keywords",
            Template::Sentiment => "Sentiment",
            Template::FactCheck => "Fact Check",
            Template::SdPrompt => "SD Prompt",
            Template::Custom => "Custom",
        }
    }

    pub fn format(&self, content: &str) -> String {
        match self {
            Template::Translation => format!(
                "Translate the following text to [TARGET_LANGUAGE]:\n\n{}",
                content
            ),
            Template::Summary => format!(
                "Please summarize the following text in 3-5 bullet points:\n\n{}",
                content
            ),
            Template::Rewrite => format!(
                "Please rewrite the following text to be more clear and concise:\n\n{}",
                content
            ),
            Template::Explain => format!(
                "Please explain the following text in simple terms:\n\n{}",
                content
            ),
            Template::Questions => format!(
                "Generate 5 questions about the following text:\n\n{}",
                content
            ),
            Template::Keywords => format!(
                "Extract the main keywords and concepts from this text:\n\n{}",
                content
            ),
            Template::Sentiment => format!(
                "Analyze the sentiment and tone of this text:\n\n{}",
                content
            ),
            Template::FactCheck => format!(
                "Please fact-check and verify the claims in this text:\n\n{}",
                content
            ),
            Template::SdPrompt => format!(
                "Positive prompt: {}\n\nNegative prompt: [ADD_NEGATIVE_TERMS]",
                content
            ),
            Template::Custom => content.to_string(),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Template {
    type Err = TextkeepError;

    fn from_str(s: &str) -> Result<Self> {
        Template::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TextkeepError::Invalid(format!("template: {}", s)))
    }
}

/// Name-based entry point. Unknown templates return the content unchanged.
pub fn format_named(content: &str, name: &str) -> String {
    match name.parse::<Template>() {
        Ok(template) => template.format(content),
        Err(_) => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_content() {
        assert_eq!(
            Template::Summary.format("text"),
            "Please summarize the following text in 3-5 bullet points:\n\ntext"
        );
        assert_eq!(
            Template::SdPrompt.format("a cat"),
            "Positive prompt: a cat\n\nNegative prompt: [ADD_NEGATIVE_TERMS]"
        );
    }

    #[test]
    fn custom_and_unknown_are_identity() {
        assert_eq!(Template::Custom.format("raw"), "raw");
        assert_eq!(format_named("raw", "Limerick"), "raw");
    }

    #[test]
    fn parses_display_names() {
        assert_eq!("Fact Check".parse::<Template>().unwrap(), Template::FactCheck);
        assert_eq!("sd prompt".parse::<Template>().unwrap(), Template::SdPrompt);
        for t in Template::ALL {
            assert!(format_named("x", t.name()).contains('x'));
        }
    }
}
