use std::collections::HashSet;

use serde::Serialize;

use super::classify::extract_name;
use super::parse::{ChangeRecord, parse_diff};
use super::ChangeKind;

pub const EMPTY_DIFF_SENTENCE: &str = "No changes recorded for this snapshot.";
pub const NO_SIGNIFICANT_CHANGES_SENTENCE: &str = "No significant changes detected.";
pub const NO_ELEMENT_CHANGES: &str = "No element changes in this snapshot.";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ChangeSummary {
    pub added_names: Vec<String>,
    pub removed_names: Vec<String>,
    pub changed_names: Vec<String>,
    pub sentence: String,
}

#[derive(Default)]
struct Bucket {
    seen: HashSet<String>,
    names: Vec<String>,
}

impl Bucket {
    fn push(&mut self, name: String) {
        if self.seen.insert(name.clone()) {
            self.names.push(name);
        }
    }
}

pub fn summarize(diff_text: &str) -> ChangeSummary {
    if diff_text.trim().is_empty() {
        return ChangeSummary {
            sentence: EMPTY_DIFF_SENTENCE.to_string(),
            ..ChangeSummary::default()
        };
    }

    let parsed = parse_diff(diff_text);
    let mut added = Bucket::default();
    let mut removed = Bucket::default();
    let mut changed = Bucket::default();

    for r in &parsed.current {
        let bucket = match r.status {
            ChangeKind::Added => &mut added,
            ChangeKind::Modified => &mut changed,
            ChangeKind::Removed => continue,
        };
        if let Some(name) = extract_name(&r.content, r.status) {
            bucket.push(name);
        }
    }
    for r in &parsed.previous {
        if r.status != ChangeKind::Removed {
            continue;
        }
        if let Some(name) = extract_name(&r.content, r.status) {
            removed.push(name);
        }
    }

    let sentence = compose_sentence(
        added.names.len(),
        removed.names.len(),
        changed.names.len(),
    );
    ChangeSummary {
        added_names: added.names,
        removed_names: removed.names,
        changed_names: changed.names,
        sentence,
    }
}

fn compose_sentence(added: usize, removed: usize, changed: usize) -> String {
    let parts = [
        (added, "addition", "additions"),
        (removed, "removal", "removals"),
        (changed, "modification", "modifications"),
    ]
    .into_iter()
    .filter(|(n, _, _)| *n > 0)
    .map(|(n, one, many)| format!("**{}** {}", n, if n == 1 { one } else { many }))
    .collect::<Vec<_>>();

    let joined = match parts.as_slice() {
        [] => return NO_SIGNIFICANT_CHANGES_SENTENCE.to_string(),
        [only] => only.clone(),
        [a, b] => format!("{} and {}", a, b),
        [head @ .., tail] => format!("{}, and {}", head.join(", "), tail),
    };
    format!("This change includes {}.", joined)
}

/// One line of the before/after view. Rows pair records by parse position,
/// not by content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComparisonRow {
    Pair {
        previous: Option<ChangeRecord>,
        current: Option<ChangeRecord>,
    },
    NoElementChanges,
}

impl ComparisonRow {
    pub fn description(&self) -> Option<&'static str> {
        match self {
            ComparisonRow::Pair { .. } => None,
            ComparisonRow::NoElementChanges => Some(NO_ELEMENT_CHANGES),
        }
    }
}

pub fn build_comparison_table(
    previous: &[ChangeRecord],
    current: &[ChangeRecord],
) -> Vec<ComparisonRow> {
    let rows = previous.len().max(current.len());
    if rows == 0 {
        return vec![ComparisonRow::NoElementChanges];
    }
    (0..rows)
        .map(|i| ComparisonRow::Pair {
            previous: previous.get(i).cloned(),
            current: current.get(i).cloned(),
        })
        .collect()
}

#[cfg(test)]
#[path = "../tests/diff/summary_tests.rs"]
mod tests;
