//! Structured summaries of snapshot diff reports.
//!
//! The server renders each snapshot's changes as a line-oriented report with
//! `=== ADDED` / `=== REMOVED` / `=== MODIFIED` sections. This module turns
//! that text into typed change records, names the entities they touch, and
//! produces the prose summary, side-by-side table and line-level views.

use serde::Serialize;

mod classify;
mod lines;
mod parse;
mod summary;

pub use self::classify::{extract_name, is_technical_field};
pub use self::lines::{DiffLine, LineKind, format_line_level};
pub use self::parse::{ChangeRecord, ParsedDiff, parse_diff};
pub use self::summary::{
    ChangeSummary, ComparisonRow, EMPTY_DIFF_SENTENCE, NO_ELEMENT_CHANGES,
    NO_SIGNIFICANT_CHANGES_SENTENCE, build_comparison_table, summarize,
};

/// Section of a diff report, and the status of records parsed from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

impl ChangeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Removed => "removed",
            ChangeKind::Modified => "modified",
        }
    }
}
