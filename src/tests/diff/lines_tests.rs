use super::*;

#[test]
fn kinds_follow_line_prefixes() {
    let lines = format_line_level("=== ADDED\n+ Foo\n- Bar\n~ Baz\n--- a\n+++ b\nDetails: x");
    let kinds = lines.iter().map(|l| l.kind).collect::<Vec<_>>();

    assert_eq!(
        kinds,
        vec![
            LineKind::Header,
            LineKind::Added,
            LineKind::Removed,
            LineKind::Changed,
            LineKind::Header,
            LineKind::Header,
            LineKind::Context,
        ]
    );
    assert_eq!(lines[1].text, "+ Foo");
}

#[test]
fn empty_text_has_no_lines() {
    assert!(format_line_level("").is_empty());
}
