use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Added,
    Removed,
    Changed,
    Header,
    Context,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiffLine {
    pub text: String,
    pub kind: LineKind,
}

/// Classifies every line of a diff report by its prefix alone.
pub fn format_line_level(diff_text: &str) -> Vec<DiffLine> {
    diff_text
        .lines()
        .map(|line| DiffLine {
            text: line.to_string(),
            kind: line_kind(line),
        })
        .collect()
}

fn line_kind(line: &str) -> LineKind {
    if line.starts_with("===") || line.starts_with("---") || line.starts_with("+++") {
        LineKind::Header
    } else if line.starts_with('+') {
        LineKind::Added
    } else if line.starts_with('-') {
        LineKind::Removed
    } else if line.starts_with('~') {
        LineKind::Changed
    } else {
        LineKind::Context
    }
}

#[cfg(test)]
#[path = "../tests/diff/lines_tests.rs"]
mod tests;
