use std::io::Read;
use std::path::PathBuf;

use deltavault::canonical::canonicalize;
use deltavault::diff::{build_comparison_table, format_line_level, parse_diff, summarize};
use deltavault::model::ComponentType;

use crate::cli_commands::local::DiffView;

use super::render::{print_lines, print_table};
use super::*;

pub(super) fn handle_init_command(force: bool, path: Option<PathBuf>) -> Result<()> {
    let root = match path {
        Some(p) => p,
        None => std::env::current_dir().context("get current dir")?,
    };
    let store = VaultStore::init(&root, force)?;
    println!("Initialized DeltaVault config at {}", store.path().display());
    Ok(())
}

fn read_diff_text(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(&path)
            .with_context(|| format!("read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("read diff from stdin")?;
            Ok(text)
        }
    }
}

pub(super) fn handle_diff_command(file: Option<PathBuf>, view: DiffView, json: bool) -> Result<()> {
    let text = read_diff_text(file)?;
    match view {
        DiffView::Summary => {
            let summary = summarize(&text);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&summary).context("serialize summary json")?
                );
            } else {
                println!("{}", summary.sentence);
                for (label, names) in [
                    ("added", &summary.added_names),
                    ("removed", &summary.removed_names),
                    ("changed", &summary.changed_names),
                ] {
                    for name in names {
                        println!("{}: {}", label, name);
                    }
                }
            }
        }
        DiffView::Table => {
            let parsed = parse_diff(&text);
            let rows = build_comparison_table(&parsed.previous, &parsed.current);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&rows).context("serialize table json")?
                );
            } else {
                print_table(&rows, "");
            }
        }
        DiffView::Lines => {
            let lines = format_line_level(&text);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&lines).context("serialize lines json")?
                );
            } else {
                print_lines(&lines, "");
            }
        }
    }
    Ok(())
}

pub(super) fn handle_canonicalize_command(name: &str, component_type: ComponentType) {
    println!("{}", canonicalize(name, component_type));
}
