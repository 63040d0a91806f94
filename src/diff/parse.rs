use serde::Serialize;

use super::ChangeKind;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChangeRecord {
    pub content: String,
    pub status: ChangeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ChangeRecord {
    fn new(content: &str, status: ChangeKind) -> Self {
        Self {
            content: content.trim().to_string(),
            status,
            details: None,
        }
    }

    fn attach_details(&mut self, details: &str) {
        match &mut self.details {
            Some(existing) => {
                existing.push('\n');
                existing.push_str(details);
            }
            None => self.details = Some(details.to_string()),
        }
    }
}

/// Records on the "before" side (removed and modified) and the "after" side
/// (added and modified). Modified records appear on both sides at the same
/// position relative to each other.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParsedDiff {
    pub previous: Vec<ChangeRecord>,
    pub current: Vec<ChangeRecord>,
}

impl ParsedDiff {
    pub fn is_empty(&self) -> bool {
        self.previous.is_empty() && self.current.is_empty()
    }
}

#[derive(Clone, Copy)]
enum LastAppended {
    Previous(usize),
    Current(usize),
    Both(usize, usize),
}

/// Parses a diff report. Unknown sections, lines outside a section and
/// prefixes that do not belong to the enclosing section are skipped.
pub fn parse_diff(diff_text: &str) -> ParsedDiff {
    let mut out = ParsedDiff::default();
    let mut section: Option<ChangeKind> = None;
    let mut last: Option<LastAppended> = None;

    for raw in diff_text.lines() {
        if let Some(kind) = section_marker(raw) {
            section = kind;
            last = None;
            continue;
        }
        let Some(kind) = section else {
            continue;
        };

        let line = raw.trim_start();
        let trimmed = line.trim_end();
        if trimmed.starts_with("Details:") || trimmed.starts_with("Changes:") {
            match last {
                Some(LastAppended::Previous(i)) => out.previous[i].attach_details(trimmed),
                Some(LastAppended::Current(i)) => out.current[i].attach_details(trimmed),
                Some(LastAppended::Both(p, c)) => {
                    out.previous[p].attach_details(trimmed);
                    out.current[c].attach_details(trimmed);
                }
                None => {}
            }
            continue;
        }

        match kind {
            ChangeKind::Added => {
                if let Some(content) = line.strip_prefix("+ ") {
                    out.current.push(ChangeRecord::new(content, kind));
                    last = Some(LastAppended::Current(out.current.len() - 1));
                }
            }
            ChangeKind::Removed => {
                if let Some(content) = line.strip_prefix("- ") {
                    out.previous.push(ChangeRecord::new(content, kind));
                    last = Some(LastAppended::Previous(out.previous.len() - 1));
                }
            }
            ChangeKind::Modified => {
                if let Some(content) = line.strip_prefix("~ ") {
                    out.previous.push(ChangeRecord::new(content, kind));
                    out.current.push(ChangeRecord::new(content, kind));
                    last = Some(LastAppended::Both(
                        out.previous.len() - 1,
                        out.current.len() - 1,
                    ));
                }
            }
        }
    }

    out
}

/// `Some(section)` for a section header line; `Some(None)` for any other
/// `===` header, which closes the current section.
fn section_marker(line: &str) -> Option<Option<ChangeKind>> {
    if line.contains("=== ADDED") {
        Some(Some(ChangeKind::Added))
    } else if line.contains("=== REMOVED") {
        Some(Some(ChangeKind::Removed))
    } else if line.contains("=== MODIFIED") {
        Some(Some(ChangeKind::Modified))
    } else if line.trim_start().starts_with("===") {
        Some(None)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "../tests/diff/parse_tests.rs"]
mod tests;
