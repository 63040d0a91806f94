use super::*;

fn rec(content: &str, status: ChangeKind, details: Option<&str>) -> ChangeRecord {
    ChangeRecord {
        content: content.to_string(),
        status,
        details: details.map(|d| d.to_string()),
    }
}

#[test]
fn sections_populate_their_sides() {
    let parsed = parse_diff(
        "=== ADDED\n+ Foo\n=== REMOVED\n- Bar\n=== MODIFIED\n~ Baz\nDetails: x->y",
    );

    assert_eq!(
        parsed.current,
        vec![
            rec("Foo", ChangeKind::Added, None),
            rec("Baz", ChangeKind::Modified, Some("Details: x->y")),
        ]
    );
    assert_eq!(
        parsed.previous,
        vec![
            rec("Bar", ChangeKind::Removed, None),
            rec("Baz", ChangeKind::Modified, Some("Details: x->y")),
        ]
    );
}

#[test]
fn mismatched_prefixes_and_orphan_lines_are_ignored() {
    let parsed = parse_diff(
        "+ before any section\n=== REMOVED\n+ wrong prefix\n~ also wrong\n- Kept\n=== SUMMARY\n- after unknown header",
    );

    assert!(parsed.current.is_empty());
    assert_eq!(parsed.previous, vec![rec("Kept", ChangeKind::Removed, None)]);
}

#[test]
fn details_attach_to_latest_record_of_current_section_only() {
    let parsed = parse_diff(
        "=== ADDED\n+ One\n  Changes: label\n=== REMOVED\nDetails: nothing to attach to\n- Two\nDetails: gone\nDetails: really",
    );

    assert_eq!(
        parsed.current,
        vec![rec("One", ChangeKind::Added, Some("Changes: label"))]
    );
    assert_eq!(
        parsed.previous,
        vec![rec(
            "Two",
            ChangeKind::Removed,
            Some("Details: gone\nDetails: really")
        )]
    );
}

#[test]
fn modified_records_pair_by_emission_order() {
    let parsed = parse_diff("=== MODIFIED\n~ A\n~ B\n=== ADDED\n+ C");

    assert_eq!(parsed.previous.len(), 2);
    assert_eq!(parsed.current.len(), 3);
    for i in 0..2 {
        assert_eq!(parsed.previous[i], parsed.current[i]);
    }
}

#[test]
fn empty_input_yields_empty_sides() {
    assert!(parse_diff("").is_empty());
    assert!(parse_diff("\n\n   \n").is_empty());
}
