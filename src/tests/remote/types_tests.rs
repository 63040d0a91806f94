use super::*;

#[test]
fn catalog_records_are_validated_at_the_edge() {
    let page: WirePage<WireCatalogRecord> = serde_json::from_str(
        r#"{
            "items": [
                {"id": "a1", "fullName": "Quote_1 • OmniScript v1", "type": "OmniScript", "version": 1},
                {"id": "a2", "fullName": "Quote_2", "type": "OmniScript", "version": "2.0"},
                {"fullName": "no id", "type": "FlexCard"},
                {"id": "a3", "fullName": "Weird", "type": "Spreadsheet"},
                {"id": "a4", "type": "DataMapper"},
                {"id": "a5", "fullName": "Mapper", "type": "DataMapper"}
            ],
            "nextCursor": "c2"
        }"#,
    )
    .expect("parse page");

    let (raw, next) = page.into_parts();
    let records = raw
        .into_iter()
        .filter_map(WireCatalogRecord::validate)
        .collect::<Vec<_>>();

    assert_eq!(next, Some(Cursor("c2".to_string())));
    let ids = records.iter().map(|r| r.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["a1", "a2", "a5"]);
    assert_eq!(records[1].version, Some(2.0));
    assert_eq!(records[2].version, None);
    assert_eq!(records[2].component_type, ComponentType::DataMapper);
}

#[test]
fn missing_items_and_empty_cursor_mean_last_empty_page() {
    let page: WirePage<WireSnapshot> =
        serde_json::from_str(r#"{"nextCursor": ""}"#).expect("parse page");
    let (items, next) = page.into_parts();
    assert!(items.is_empty());
    assert_eq!(next, None);

    let page: WirePage<WireSnapshot> =
        serde_json::from_str(r#"{"items": null, "nextCursor": null}"#).expect("parse page");
    let (items, next) = page.into_parts();
    assert!(items.is_empty());
    assert_eq!(next, None);
}

#[test]
fn snapshot_fields_default_and_raw_json_objects_are_rendered() {
    let page: WirePage<WireSnapshot> = serde_json::from_str(
        r#"{
            "items": [
                {"id": "s1", "at": "2024-03-05T13:07:00Z", "actor": "ana", "diffText": "=== ADDED\n+ X", "rawJson": "{}", "aiNotesHtml": "<p>hi</p>"},
                {"id": "s2", "rawJson": {"k": 1}, "aiNotesHtml": "  "},
                {"actor": "nobody"}
            ]
        }"#,
    )
    .expect("parse page");

    let (raw, _) = page.into_parts();
    let snaps = raw
        .into_iter()
        .filter_map(WireSnapshot::validate)
        .collect::<Vec<_>>();

    assert_eq!(snaps.len(), 2);
    assert_eq!(snaps[0].ai_notes_html.as_deref(), Some("<p>hi</p>"));
    assert_eq!(snaps[1].at, "");
    assert!(snaps[1].raw_json.contains("\"k\": 1"));
    assert_eq!(snaps[1].ai_notes_html, None);
}

#[test]
fn generic_pages_parse_through_a_deserialize_only_bound() {
    fn parse<R: serde::de::DeserializeOwned>(body: &str) -> WirePage<R> {
        serde_json::from_str(body).expect("parse page")
    }

    let page: WirePage<WireSnapshot> = parse(r#"{"items": [{"id": "s1"}]}"#);
    let (items, next) = page.into_parts();
    assert_eq!(items.len(), 1);
    assert_eq!(next, None);
}

#[test]
fn non_string_keys_drop_only_the_bad_record() {
    let page: WirePage<WireCatalogRecord> = serde_json::from_str(
        r#"{
            "items": [
                {"id": 42, "fullName": "Quote_1", "type": "OmniScript"},
                {"id": {"nested": true}, "fullName": "Odd", "type": "OmniScript"},
                {"id": "a2", "fullName": 7, "type": "OmniScript"},
                {"id": "a3", "fullName": "Card_1", "type": 3},
                {"id": "a4", "fullName": "Card_2", "type": "FlexCard"}
            ],
            "nextCursor": 100
        }"#,
    )
    .expect("parse page");

    let (raw, next) = page.into_parts();
    let records = raw
        .into_iter()
        .filter_map(WireCatalogRecord::validate)
        .collect::<Vec<_>>();

    assert_eq!(next, Some(Cursor("100".to_string())));
    let ids = records.iter().map(|r| r.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["42", "a4"]);
}

#[test]
fn malformed_cursor_ends_paging_and_snapshot_text_fields_default() {
    let page: WirePage<WireSnapshot> = serde_json::from_str(
        r#"{
            "items": [
                {"id": 7, "actor": 12, "diffText": ["x"]},
                {"id": false}
            ],
            "nextCursor": {"offset": 3}
        }"#,
    )
    .expect("parse page");

    let (raw, next) = page.into_parts();
    assert_eq!(next, None);
    let snaps = raw
        .into_iter()
        .filter_map(WireSnapshot::validate)
        .collect::<Vec<_>>();
    assert_eq!(snaps.len(), 1);
    assert_eq!(snaps[0].id, "7");
    assert_eq!(snaps[0].actor, "");
    assert_eq!(snaps[0].diff_text, "");
}
