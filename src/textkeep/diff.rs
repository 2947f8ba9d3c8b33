use similar::{DiffTag, TextDiff};

pub const NO_CHANGES: &str = "No changes detected";

/// Unified line diff from `old` to `new`, fenced as a `diff` code block.
///
/// Line endings count: `"a"` and `"a\n"` differ.
pub fn diff(old: &str, new: &str) -> String {
    let text_diff = TextDiff::from_lines(old, new);

    if text_diff.ops().iter().all(|op| op.tag() == DiffTag::Equal) {
        return NO_CHANGES.to_string();
    }

    let rendered = text_diff
        .unified_diff()
        .context_radius(3)
        .header("Previous", "Current")
        .to_string();

    format!("```diff\n{}\n```", rendered.trim_end_matches('\n'))
}
