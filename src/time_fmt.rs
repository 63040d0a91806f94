use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

const SNAPSHOT_FORMAT: &[BorrowedFormatItem<'_>] = format_description!(
    "[month repr:short] [day padding:zero], [year], [hour repr:12 padding:zero]:[minute padding:zero] [period]"
);

/// Renders an RFC 3339 timestamp as `Mar 05, 2024, 01:07 PM` (UTC).
/// Anything unparseable is returned as-is.
pub fn format_timestamp(at: &str) -> String {
    OffsetDateTime::parse(at.trim(), &Rfc3339)
        .ok()
        .and_then(|dt| {
            dt.to_offset(time::UtcOffset::UTC)
                .format(SNAPSHOT_FORMAT)
                .ok()
        })
        .unwrap_or_else(|| at.to_string())
}

#[cfg(test)]
#[path = "tests/time_fmt_tests.rs"]
mod tests;
