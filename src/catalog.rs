//! Grouping of loaded catalog records into logical artifacts.

use std::collections::HashMap;

use crate::canonical::canonicalize;
use crate::model::{BaseGroup, CatalogRecord, ComponentType, VersionCard};

/// Groups records by `(base name, type)` in order of first occurrence.
///
/// Counts reflect only what is loaded so far; while the catalog is still
/// paging they are lower bounds.
pub fn group(records: &[CatalogRecord]) -> Vec<BaseGroup> {
    let mut index: HashMap<(String, ComponentType), usize> = HashMap::new();
    let mut out: Vec<BaseGroup> = Vec::new();

    for r in records {
        let base_name = canonicalize(&r.full_name, r.component_type);
        let key = (base_name, r.component_type);
        match index.get(&key) {
            Some(&i) => out[i].version_count += 1,
            None => {
                index.insert(key.clone(), out.len());
                out.push(BaseGroup {
                    base_name: key.0,
                    component_type: key.1,
                    version_count: 1,
                });
            }
        }
    }

    out
}

/// Version cards for one group, newest version first.
pub fn version_cards(
    records: &[CatalogRecord],
    base_name: &str,
    component_type: ComponentType,
) -> Vec<VersionCard> {
    let mut cards = records
        .iter()
        .filter(|r| {
            r.component_type == component_type
                && canonicalize(&r.full_name, r.component_type) == base_name
        })
        .map(|r| {
            let version = r.version.unwrap_or(1.0);
            VersionCard {
                component_id: r.id.clone(),
                version,
                label: version_label(version),
                full_name: r.full_name.clone(),
            }
        })
        .collect::<Vec<_>>();

    cards.sort_by(|a, b| b.version.total_cmp(&a.version));
    cards
}

pub fn version_label(version: f64) -> String {
    if version.fract() == 0.0 {
        format!("v{}", version as i64)
    } else {
        format!("v{}", version)
    }
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;
