use serde::Serialize;

use deltavault::canonical::name_part;
use deltavault::diff::{
    ChangeSummary, ComparisonRow, DiffLine, build_comparison_table, format_line_level,
    parse_diff, summarize,
};
use deltavault::model::SnapshotRecord;
use deltavault::time_fmt::format_timestamp;

use crate::cli_commands::browse::{ComponentsArgs, HistoryArgs, HistoryView, VersionsArgs};

use super::render::{NO_AI_NOTES, print_block, print_lines, print_table};
use super::*;

pub(super) fn handle_components_command(
    browser: &mut Browser<RemoteClient>,
    args: ComponentsArgs,
) -> Result<()> {
    let search = args.search.unwrap_or_default();
    browser.set_filters(args.family, &search);
    browser.load_all_components(args.pages.max(1))?;

    let groups = browser.groups();
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&groups).context("serialize components json")?
        );
        return Ok(());
    }
    for g in &groups {
        let noun = if g.version_count == 1 { "version" } else { "versions" };
        println!(
            "{}\t{}\t{} {}",
            g.base_name, g.component_type, g.version_count, noun
        );
    }
    if browser.catalog().has_more() {
        println!("(more components available; raise --pages)");
    }
    Ok(())
}

pub(super) fn handle_versions_command(
    browser: &mut Browser<RemoteClient>,
    args: VersionsArgs,
) -> Result<()> {
    // Display names carry copy indices inside the type suffix; only the name
    // part is a reliable substring. Version cards match canonically.
    browser.set_filters(args.family, name_part(&args.base));
    browser.load_all_components(args.pages.max(1))?;
    browser.select_group(&args.base, args.component_type)?;

    if let Some(selected) = browser.selected_version() {
        // Unversioned components resolve straight to their single record.
        if args.json {
            println!(
                "{}",
                serde_json::json!({"unversioned": true, "component_id": selected.component_id})
            );
        } else {
            println!("{} is unversioned (id {})", args.base, selected.component_id);
        }
        return Ok(());
    }

    let cards = browser.version_cards();
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(cards).context("serialize versions json")?
        );
        return Ok(());
    }
    if cards.is_empty() {
        anyhow::bail!(
            "no {} versions found for '{}'",
            args.component_type,
            args.base
        );
    }
    for card in cards {
        println!("{}\t{}\t{}", card.label, card.component_id, card.full_name);
    }
    Ok(())
}

#[derive(Serialize)]
struct HistoryEntry<'a> {
    #[serde(flatten)]
    snapshot: &'a SnapshotRecord,
    when: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ChangeSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    table: Option<Vec<ComparisonRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lines: Option<Vec<DiffLine>>,
}

fn history_entry(snapshot: &SnapshotRecord, view: HistoryView) -> HistoryEntry<'_> {
    let mut entry = HistoryEntry {
        snapshot,
        when: format_timestamp(&snapshot.at),
        summary: None,
        table: None,
        lines: None,
    };
    match view {
        HistoryView::Summary => entry.summary = Some(summarize(&snapshot.diff_text)),
        HistoryView::Table => {
            let parsed = parse_diff(&snapshot.diff_text);
            entry.table = Some(build_comparison_table(&parsed.previous, &parsed.current));
        }
        HistoryView::Lines => entry.lines = Some(format_line_level(&snapshot.diff_text)),
        HistoryView::Raw | HistoryView::Notes => {}
    }
    entry
}

pub(super) fn handle_history_command(
    browser: &mut Browser<RemoteClient>,
    args: HistoryArgs,
) -> Result<()> {
    browser.select_version(&args.component, None)?;
    browser.load_all_history(args.pages.saturating_sub(1))?;

    let snapshots = browser.history().items();
    if args.json {
        let entries = snapshots
            .iter()
            .map(|s| history_entry(s, args.view))
            .collect::<Vec<_>>();
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).context("serialize history json")?
        );
        return Ok(());
    }

    if snapshots.is_empty() {
        println!("No history for {}", args.component);
        return Ok(());
    }
    for snapshot in snapshots {
        let entry = history_entry(snapshot, args.view);
        println!("{}  {}  {}", snapshot.id, entry.when, snapshot.actor);
        match args.view {
            HistoryView::Summary => {
                if let Some(summary) = &entry.summary {
                    println!("  {}", summary.sentence);
                }
            }
            HistoryView::Table => print_table(entry.table.as_deref().unwrap_or_default(), "  "),
            HistoryView::Lines => print_lines(entry.lines.as_deref().unwrap_or_default(), "  "),
            HistoryView::Raw => print_block(&snapshot.raw_json, "  "),
            HistoryView::Notes => match &snapshot.ai_notes_html {
                Some(notes) => print_block(notes, "  "),
                None => println!("  {}", NO_AI_NOTES),
            },
        }
        println!();
    }
    if browser.history().has_more() {
        println!("(more history available; raise --pages)");
    }
    Ok(())
}
