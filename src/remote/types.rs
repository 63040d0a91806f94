//! Wire payloads for the vault listing endpoints and their validation into
//! model records.

use crate::model::{CatalogRecord, ComponentType, Family, SnapshotRecord};
use crate::sync::Cursor;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogQuery {
    pub family: Family,
    pub contributor: String,
    pub search: String,
    pub page_size: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryQuery {
    pub component_id: String,
    pub contributor: String,
    pub page_size: u32,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct WirePage<T> {
    items: Option<Vec<T>>,
    #[serde(default)]
    next_cursor: Option<serde_json::Value>,
}

impl<T> WirePage<T> {
    pub(super) fn into_parts(self) -> (Vec<T>, Option<Cursor>) {
        let next = match self.next_cursor.as_ref() {
            None | Some(serde_json::Value::Null) => None,
            Some(serde_json::Value::String(c)) if c.is_empty() => None,
            Some(v) => {
                let cursor = wire_key(v);
                if cursor.is_none() {
                    tracing::warn!(next_cursor = %v, "ignoring malformed nextCursor");
                }
                cursor
            }
        };
        (self.items.unwrap_or_default(), next.map(Cursor))
    }
}

/// Ids and cursors arrive as strings, occasionally as bare numbers. Empty
/// strings and other shapes yield `None`.
fn wire_key(v: &serde_json::Value) -> Option<String> {
    match v {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn wire_text(v: Option<serde_json::Value>) -> Option<String> {
    match v? {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    }
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct WireCatalogRecord {
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(default)]
    full_name: Option<serde_json::Value>,
    #[serde(default, rename = "type")]
    component_type: Option<serde_json::Value>,
    #[serde(default)]
    version: Option<serde_json::Value>,
}

impl WireCatalogRecord {
    pub(super) fn validate(self) -> Option<CatalogRecord> {
        let Some(id) = self.id.as_ref().and_then(wire_key) else {
            tracing::warn!("dropping catalog record without id");
            return None;
        };
        let Some(full_name) = wire_text(self.full_name) else {
            tracing::warn!(id = %id, "dropping catalog record without fullName");
            return None;
        };
        let raw_type = wire_text(self.component_type).unwrap_or_default();
        let component_type = match raw_type.parse::<ComponentType>() {
            Ok(t) => t,
            Err(err) => {
                tracing::warn!(id = %id, "dropping catalog record: {}", err);
                return None;
            }
        };
        let version = self.version.as_ref().and_then(parse_version);
        Some(CatalogRecord {
            id,
            full_name,
            component_type,
            version,
        })
    }
}

/// Versions arrive as numbers or numeric strings.
fn parse_version(v: &serde_json::Value) -> Option<f64> {
    let parsed = match v {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct WireSnapshot {
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(default)]
    at: Option<serde_json::Value>,
    #[serde(default)]
    actor: Option<serde_json::Value>,
    #[serde(default)]
    diff_text: Option<serde_json::Value>,
    #[serde(default)]
    raw_json: Option<serde_json::Value>,
    #[serde(default)]
    ai_notes_html: Option<serde_json::Value>,
}

impl WireSnapshot {
    pub(super) fn validate(self) -> Option<SnapshotRecord> {
        let Some(id) = self.id.as_ref().and_then(wire_key) else {
            tracing::warn!("dropping snapshot without id");
            return None;
        };
        let raw_json = match self.raw_json {
            None | Some(serde_json::Value::Null) => String::new(),
            Some(serde_json::Value::String(s)) => s,
            Some(other) => serde_json::to_string_pretty(&other).unwrap_or_default(),
        };
        Some(SnapshotRecord {
            id,
            at: wire_text(self.at).unwrap_or_default(),
            actor: wire_text(self.actor).unwrap_or_default(),
            diff_text: wire_text(self.diff_text).unwrap_or_default(),
            raw_json,
            ai_notes_html: wire_text(self.ai_notes_html).filter(|s| !s.trim().is_empty()),
        })
    }
}

#[cfg(test)]
#[path = "../tests/remote/types_tests.rs"]
mod tests;
