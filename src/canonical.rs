//! Base-name derivation for catalog display names.
//!
//! Display names embed copy indices and versions (`Quote_2 • OmniScript v3`);
//! every version record of one logical artifact must canonicalize to the same
//! base name so the catalog can group them.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::ComponentType;

const SEPARATOR: &str = " • ";

fn copy_index_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"_\d+$").expect("valid copy index regex"))
}

fn version_suffix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+v\d+(\.\d+)?$").expect("valid version suffix regex"))
}

/// Returns the grouping key for `full_name`.
///
/// Unversioned kinds are returned untouched. The result is a fixed point:
/// canonicalizing it again yields the same string.
pub fn canonicalize(full_name: &str, component_type: ComponentType) -> String {
    if full_name.is_empty() {
        return String::new();
    }
    if !component_type.is_versioned() {
        return full_name.to_string();
    }

    let mut cur = strip_pass(full_name);
    loop {
        let next = strip_pass(&cur);
        if next == cur {
            return cur;
        }
        cur = next;
    }
}

/// The leading name part of a base name, without the ` • Type` suffix. Every
/// concrete display name of the group contains it verbatim, which makes it
/// usable as a server-side search term.
pub fn name_part(base_name: &str) -> &str {
    match base_name.split_once(SEPARATOR) {
        Some((name, _)) => name.trim(),
        None => base_name.trim(),
    }
}

fn strip_pass(name: &str) -> String {
    let name = name.trim();
    let joined = match name.split_once(SEPARATOR) {
        Some((head, type_part)) => format!(
            "{}{}{}",
            strip_copy_index(head.trim()),
            SEPARATOR,
            type_part.trim()
        ),
        None => strip_copy_index(name).to_string(),
    };
    let joined = version_suffix_re().replace(&joined, "");
    strip_copy_index(&joined).trim().to_string()
}

fn strip_copy_index(s: &str) -> &str {
    match copy_index_re().find(s) {
        Some(m) => &s[..m.start()],
        None => s,
    }
}

#[cfg(test)]
#[path = "tests/canonical_tests.rs"]
mod tests;
