use super::*;

fn rec(content: &str, status: ChangeKind) -> ChangeRecord {
    ChangeRecord {
        content: content.to_string(),
        status,
        details: None,
    }
}

#[test]
fn technical_removals_are_filtered_from_summary() {
    let s = summarize(
        "=== ADDED\n+ Added InputFieldName: \"X\"\n=== REMOVED\n- Removed LastModifiedDate",
    );

    assert_eq!(s.added_names, vec!["Field: X".to_string()]);
    assert!(s.removed_names.is_empty());
    assert!(s.changed_names.is_empty());
    assert_eq!(s.sentence, "This change includes **1** addition.");
}

#[test]
fn names_are_deduplicated_in_first_seen_order() {
    let s = summarize(
        "=== MODIFIED\n~ Changed Description\n~ Changed Label\n~ Changed Description\n=== REMOVED\n- Removed Label\n- Removed Label",
    );

    assert_eq!(
        s.changed_names,
        vec!["Description".to_string(), "Label".to_string()]
    );
    assert_eq!(s.removed_names, vec!["Label".to_string()]);
    assert_eq!(
        s.sentence,
        "This change includes **1** removal and **2** modifications."
    );
}

#[test]
fn modified_section_counts_added_and_removed_verbs_as_changes() {
    let s = summarize("=== MODIFIED\n~ Added ChildStep\n~ Removed OldProp");

    assert_eq!(
        s.changed_names,
        vec!["ChildStep".to_string(), "OldProp".to_string()]
    );
    assert_eq!(s.sentence, "This change includes **2** modifications.");
}

#[test]
fn three_categories_use_oxford_comma() {
    let s = summarize(
        "=== ADDED\n+ Added A\n+ Added B\n=== REMOVED\n- Removed C\n=== MODIFIED\n~ Changed D",
    );

    assert_eq!(
        s.sentence,
        "This change includes **2** additions, **1** removal, and **1** modification."
    );
}

#[test]
fn sentinels_distinguish_empty_from_insignificant() {
    assert_eq!(summarize("").sentence, EMPTY_DIFF_SENTENCE);
    assert_eq!(summarize("  \n").sentence, EMPTY_DIFF_SENTENCE);
    assert_eq!(
        summarize("=== REMOVED\n- Removed SystemModstamp").sentence,
        NO_SIGNIFICANT_CHANGES_SENTENCE
    );
}

#[test]
fn comparison_table_pads_the_shorter_side() {
    let previous = vec![rec("a", ChangeKind::Removed), rec("b", ChangeKind::Removed)];
    let current = vec![
        rec("c", ChangeKind::Added),
        rec("d", ChangeKind::Added),
        rec("e", ChangeKind::Added),
    ];

    let rows = build_comparison_table(&previous, &current);
    assert_eq!(rows.len(), 3);
    match &rows[2] {
        ComparisonRow::Pair { previous, current } => {
            assert!(previous.is_none());
            assert_eq!(current.as_ref().map(|r| r.content.as_str()), Some("e"));
        }
        other => panic!("unexpected row {:?}", other),
    }
}

#[test]
fn empty_comparison_table_has_sentinel_row() {
    let rows = build_comparison_table(&[], &[]);
    assert_eq!(rows, vec![ComparisonRow::NoElementChanges]);
    assert_eq!(rows[0].description(), Some(NO_ELEMENT_CHANGES));
}
