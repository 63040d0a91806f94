use deltavault::diff::{ChangeRecord, ComparisonRow, DiffLine, LineKind};

pub(super) const NO_AI_NOTES: &str = "No AI notes yet.";

fn record_cell(record: Option<&ChangeRecord>) -> String {
    match record {
        Some(r) => format!("[{}] {}", r.status.as_str(), r.content),
        None => "-".to_string(),
    }
}

pub(super) fn print_table(rows: &[ComparisonRow], indent: &str) {
    for row in rows {
        match row {
            ComparisonRow::Pair { previous, current } => {
                println!(
                    "{}{}  =>  {}",
                    indent,
                    record_cell(previous.as_ref()),
                    record_cell(current.as_ref())
                );
                for details in [previous, current]
                    .into_iter()
                    .flatten()
                    .filter_map(|r| r.details.as_deref())
                {
                    for line in details.lines() {
                        println!("{}    {}", indent, line);
                    }
                }
            }
            ComparisonRow::NoElementChanges => {
                println!("{}{}", indent, row.description().unwrap_or_default());
            }
        }
    }
}

pub(super) fn print_lines(lines: &[DiffLine], indent: &str) {
    for line in lines {
        let tag = match line.kind {
            LineKind::Added => "A",
            LineKind::Removed => "D",
            LineKind::Changed => "M",
            LineKind::Header => "#",
            LineKind::Context => " ",
        };
        println!("{}{} {}", indent, tag, line.text);
    }
}

pub(super) fn print_block(text: &str, indent: &str) {
    for line in text.lines() {
        println!("{}{}", indent, line);
    }
}
