use crate::error::Result;
use regex::{Captures, RegexBuilder};

/// Wraps every occurrence of `term` in `**` and appends the match count.
///
/// The term is matched literally. An empty term returns the content as is.
pub fn search(content: &str, term: &str, case_sensitive: bool) -> Result<String> {
    if term.is_empty() {
        return Ok(content.to_string());
    }

    let pattern = RegexBuilder::new(&regex::escape(term))
        .case_insensitive(!case_sensitive)
        .build()?;

    let matches = pattern.find_iter(content).count();
    let highlighted = pattern.replace_all(content, |caps: &Captures| format!("**{}**", &caps[0]));

    Ok(format!(
        "{}\n\n---\n*Found {} occurrence(s)*",
        highlighted, matches
    ))
}
