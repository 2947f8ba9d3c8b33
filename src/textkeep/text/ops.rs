use crate::error::{Result, TextkeepError};
use crate::host::Tokenizer;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"http[s]?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\\(),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+",
    )
    .expect("URL pattern is valid")
});

pub const NO_URLS: &str = "No URLs found in the text.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextOperation {
    TrimWhitespace,
    CountTokens,
    CountWords,
    Uppercase,
    Lowercase,
    RemoveEmptyLines,
    SortLines,
    ReverseLines,
    ExtractUrls,
    MarkdownList,
}

impl TextOperation {
    pub const ALL: [TextOperation; 10] = [
        TextOperation::TrimWhitespace,
        TextOperation::CountTokens,
        TextOperation::CountWords,
        TextOperation::Uppercase,
        TextOperation::Lowercase,
        TextOperation::RemoveEmptyLines,
        TextOperation::SortLines,
        TextOperation::ReverseLines,
        TextOperation::ExtractUrls,
        TextOperation::MarkdownList,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TextOperation::TrimWhitespace => "Trim Whitespace",
            TextOperation::CountTokens => "Count Tokens",
            TextOperation::CountWords => "Count Words",
            TextOperation::Uppercase => "Convert to Uppercase",
            TextOperation::Lowercase => "Convert to Lowercase",
            TextOperation::RemoveEmptyLines => "Remove Empty Lines",
            TextOperation::SortLines => "Sort Lines",
            TextOperation::ReverseLines => "Reverse Lines",
            TextOperation::ExtractUrls => "Extract URLs",
            TextOperation::MarkdownList => "Format as Markdown List",
        }
    }
}

impl fmt::Display for TextOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextOperation {
    type Err = TextkeepError;

    fn from_str(s: &str) -> Result<Self> {
        TextOperation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TextkeepError::Invalid(format!("operation: {}", s)))
    }
}

/// Applies `op` to `content`. Never fails: a missing or broken tokenizer
/// turns "Count Tokens" into a notice instead.
pub fn apply(op: TextOperation, content: &str, tokenizer: Option<&dyn Tokenizer>) -> String {
    match op {
        TextOperation::TrimWhitespace => content
            .split('\n')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join("\n"),
        TextOperation::CountTokens => match count_tokens(content, tokenizer) {
            Ok(count) => format!("{}\n\n---\n*Token count: {}*", content, count),
            Err(e) => {
                warn!(error = %e, "Token counting skipped");
                format!("{}\n\n---\n*Token counting not available*", content)
            }
        },
        TextOperation::CountWords => {
            let words = content.split_whitespace().count();
            let chars = content.chars().count();
            let lines = content.split('\n').count();
            format!(
                "{}\n\n---\n*Words: {} | Characters: {} | Lines: {}*",
                content, words, chars, lines
            )
        }
        TextOperation::Uppercase => content.to_uppercase(),
        TextOperation::Lowercase => content.to_lowercase(),
        TextOperation::RemoveEmptyLines => non_empty_lines(content).collect::<Vec<_>>().join("\n"),
        TextOperation::SortLines => {
            // Empty lines are dropped here but kept by ReverseLines.
            let mut lines: Vec<&str> = non_empty_lines(content).collect();
            lines.sort_unstable();
            lines.join("\n")
        }
        TextOperation::ReverseLines => content.split('\n').rev().collect::<Vec<_>>().join("\n"),
        TextOperation::ExtractUrls => extract_urls(content),
        TextOperation::MarkdownList => non_empty_lines(content)
            .map(|line| format!("- {}", line.trim()))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Name-based entry point for hosts. Unknown names pass content through.
pub fn apply_named(name: &str, content: &str, tokenizer: Option<&dyn Tokenizer>) -> String {
    match name.parse::<TextOperation>() {
        Ok(op) => apply(op, content, tokenizer),
        Err(_) => content.to_string(),
    }
}

pub fn count_tokens(content: &str, tokenizer: Option<&dyn Tokenizer>) -> Result<usize> {
    let tokenizer =
        tokenizer.ok_or_else(|| TextkeepError::Unavailable("Token counting".to_string()))?;
    Ok(tokenizer.encode(content)?.len())
}

fn non_empty_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split('\n').filter(|line| !line.trim().is_empty())
}

fn extract_urls(content: &str) -> String {
    let urls: Vec<String> = URL_PATTERN
        .find_iter(content)
        .map(|m| format!("- {}", m.as_str()))
        .collect();

    if urls.is_empty() {
        NO_URLS.to_string()
    } else {
        format!("# Extracted URLs:\n\n{}", urls.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CharTokenizer;

    impl Tokenizer for CharTokenizer {
        fn encode(&self, text: &str) -> Result<Vec<u32>> {
            Ok(text.chars().map(|c| c as u32).collect())
        }
    }

    struct BrokenTokenizer;

    impl Tokenizer for BrokenTokenizer {
        fn encode(&self, _text: &str) -> Result<Vec<u32>> {
            Err(TextkeepError::Unavailable("model".into()))
        }
    }

    fn run(op: TextOperation, content: &str) -> String {
        apply(op, content, None)
    }

    #[test]
    fn trim_is_idempotent_and_keeps_lines() {
        let input = "  a  \n\t\n b";
        let once = run(TextOperation::TrimWhitespace, input);
        assert_eq!(once, "a\n\nb");
        assert_eq!(run(TextOperation::TrimWhitespace, &once), once);
    }

    #[test]
    fn sort_drops_empty_lines() {
        assert_eq!(run(TextOperation::SortLines, "b\n\na"), "a\nb");
    }

    #[test]
    fn sort_uses_code_point_order() {
        assert_eq!(run(TextOperation::SortLines, "b\nB\na\nÄ"), "B\na\nb\nÄ");
    }

    #[test]
    fn reverse_keeps_empty_lines() {
        assert_eq!(run(TextOperation::ReverseLines, "b\n\na"), "a\n\nb");
    }

    #[test]
    fn remove_empty_lines_keeps_order() {
        assert_eq!(
            run(TextOperation::RemoveEmptyLines, "z\n  \n\na\n"),
            "z\na"
        );
    }

    #[test]
    fn case_conversion() {
        assert_eq!(run(TextOperation::Uppercase, "abc ß"), "ABC SS");
        assert_eq!(run(TextOperation::Lowercase, "ABC"), "abc");
    }

    #[test]
    fn count_words_footer() {
        let out = run(TextOperation::CountWords, "one two\nthree");
        assert_eq!(
            out,
            "one two\nthree\n\n---\n*Words: 3 | Characters: 13 | Lines: 2*"
        );
    }

    #[test]
    fn count_tokens_with_tokenizer() {
        let out = apply(TextOperation::CountTokens, "abcd", Some(&CharTokenizer));
        assert_eq!(out, "abcd\n\n---\n*Token count: 4*");
    }

    #[test]
    fn count_tokens_without_tokenizer_appends_notice() {
        let missing = run(TextOperation::CountTokens, "abcd");
        assert_eq!(missing, "abcd\n\n---\n*Token counting not available*");

        let broken = apply(TextOperation::CountTokens, "abcd", Some(&BrokenTokenizer));
        assert_eq!(broken, missing);
    }

    #[test]
    fn extract_urls_in_order_with_duplicates() {
        let text = "see https://a.example/x?y=1 and http://b.example, then https://a.example/x?y=1";
        let out = run(TextOperation::ExtractUrls, text);
        assert_eq!(
            out,
            "# Extracted URLs:\n\n- https://a.example/x?y=1\n- http://b.example,\n- https://a.example/x?y=1"
        );
    }

    #[test]
    fn extract_urls_sentinel() {
        assert_eq!(run(TextOperation::ExtractUrls, "ftp://nothing here"), NO_URLS);
    }

    #[test]
    fn markdown_list() {
        assert_eq!(
            run(TextOperation::MarkdownList, "  one \n\ntwo"),
            "- one\n- two"
        );
    }

    #[test]
    fn names_round_trip() {
        for op in TextOperation::ALL {
            assert_eq!(op.name().parse::<TextOperation>().unwrap(), op);
        }
        assert_eq!(
            "sort lines".parse::<TextOperation>().unwrap(),
            TextOperation::SortLines
        );
    }

    #[test]
    fn unknown_name_passes_through() {
        assert_eq!(apply_named("Rot13", "abc", None), "abc");
        assert_eq!(apply_named("Sort Lines", "b\na", None), "a\nb");
    }
}
