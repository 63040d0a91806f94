//! Entity-name extraction for single change lines.
//!
//! Rules are tried in a fixed order; the first match wins. Field mappings
//! and named child elements must be recognized before the generic
//! `Added|Removed|Changed <Property>` fallback, which would otherwise read
//! structured lines as plain property edits.

use std::sync::OnceLock;

use regex::Regex;

use super::ChangeKind;

/// Bookkeeping attributes that never appear in human-facing summaries.
/// Compared case-insensitively against the namespace-free leaf of a
/// property path.
const TECHNICAL_FIELDS: &[&str] = &[
    "CreatedDate",
    "CreatedById",
    "CreatedBy",
    "LastModifiedDate",
    "LastModifiedById",
    "LastModifiedBy",
    "SystemModstamp",
    "LastViewedDate",
    "LastReferencedDate",
    "OwnerId",
    "Sequence",
    "SequenceNumber",
    "Order",
    "IsDeleted",
    "IsLocked",
    "IsManageableLocked",
];

struct Rule {
    re: Regex,
    /// When set, the rule only applies to lines this pattern also matches.
    line: Option<Regex>,
    label: &'static str,
}

fn rules() -> &'static [Rule] {
    static RULES: OnceLock<Vec<Rule>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            Rule {
                re: Regex::new(r#"(?i)(?:input|output)\s*field(?:\s*name)?[^"]*"([^"]+)""#)
                    .expect("valid field mapping regex"),
                line: None,
                label: "Field",
            },
            Rule {
                re: Regex::new(r#""Name"\s*[:=]\s*"([^"]+)""#).expect("valid element name regex"),
                line: Some(element_line_re().clone()),
                label: "Element",
            },
            Rule {
                re: Regex::new(r#""(?:GlobalKey|ItemKey|Identifier)"\s*[:=]\s*"([^"]+)""#)
                    .expect("valid map item regex"),
                line: Some(Regex::new(r"(?i)item\b").expect("valid map item line regex")),
                label: "Item",
            },
        ]
    })
}

fn element_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)element\b").expect("valid element line regex"))
}

fn generic_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(Added|Removed|Changed)\s+([A-Za-z_][\w.\[\]]*)")
            .expect("valid property path regex")
    })
}

/// Recovers the entity a change line refers to, or `None` when the line
/// names nothing a reader would care about. The enclosing section does not
/// change which rule applies; a MODIFIED section may hold `Added` lines.
pub fn extract_name(line: &str, _section: ChangeKind) -> Option<String> {
    let line = line.trim();

    for rule in rules() {
        if let Some(filter) = &rule.line
            && !filter.is_match(line)
        {
            continue;
        }
        if let Some(value) = rule.re.captures(line).and_then(|c| c.get(1)) {
            let value = value.as_str().trim();
            if !value.is_empty() {
                return Some(format!("{}: {}", rule.label, value));
            }
        }
    }

    let caps = generic_re().captures(line)?;
    let path = caps.get(2)?.as_str();
    if is_technical_field(path) || element_line_re().is_match(line) {
        return None;
    }
    Some(path.to_string())
}

/// Whether a property path ends in a bookkeeping attribute.
pub fn is_technical_field(path: &str) -> bool {
    let leaf = path.rsplit('.').next().unwrap_or(path);
    let leaf = leaf.split('[').next().unwrap_or(leaf);
    let leaf = leaf.strip_suffix("__c").unwrap_or(leaf);
    let leaf = leaf.rsplit("__").next().unwrap_or(leaf);
    TECHNICAL_FIELDS
        .iter()
        .any(|f| f.eq_ignore_ascii_case(leaf))
}

#[cfg(test)]
#[path = "../tests/diff/classify_tests.rs"]
mod tests;
