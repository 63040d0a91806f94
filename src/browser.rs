//! Catalog → group → version → history navigation.
//!
//! A [`Browser`] owns exactly one catalog cursor and one history cursor for
//! its whole lifetime. Filter and selection changes reset those instances in
//! place, so late responses can never land in a fresh, unrelated list.

use anyhow::Result;

use crate::catalog::{group, version_cards};
use crate::model::{
    BaseGroup, CatalogRecord, ComponentType, Family, RemoteConfig, SnapshotRecord, VersionCard,
};
use crate::remote::{CatalogPages, CatalogQuery, HistoryPages, HistoryQuery, VaultApi};
use crate::sync::{LoadOutcome, SyncCursor};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupSelection {
    pub base_name: String,
    pub component_type: ComponentType,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectedVersion {
    pub component_id: String,
    /// `None` when selected by component id alone.
    pub version: Option<f64>,
}

pub struct Browser<A: VaultApi> {
    api: A,
    contributor: String,
    catalog_page_size: u32,
    history_page_size: u32,

    family: Family,
    search: String,
    catalog: SyncCursor<CatalogRecord>,

    selection: Option<GroupSelection>,
    version_cards: Vec<VersionCard>,
    selected_version: Option<SelectedVersion>,
    history: SyncCursor<SnapshotRecord>,
}

impl<A: VaultApi> Browser<A> {
    pub fn new(api: A, remote: &RemoteConfig) -> Self {
        Self {
            api,
            contributor: remote.contributor.clone(),
            catalog_page_size: remote.catalog_page_size,
            history_page_size: remote.history_page_size,
            family: Family::OmniProcess,
            search: String::new(),
            catalog: SyncCursor::new(CatalogRecord::id_str),
            selection: None,
            version_cards: Vec::new(),
            selected_version: None,
            history: SyncCursor::new(SnapshotRecord::id_str),
        }
    }

    /// Changes both catalog filters without fetching anything. The catalog
    /// and any selection are cleared.
    pub fn set_filters(&mut self, family: Family, search: &str) {
        self.family = family;
        self.search = search.trim().to_string();
        self.catalog.reset();
        self.clear_selection();
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn catalog(&self) -> &SyncCursor<CatalogRecord> {
        &self.catalog
    }

    pub fn history(&self) -> &SyncCursor<SnapshotRecord> {
        &self.history
    }

    pub fn groups(&self) -> Vec<BaseGroup> {
        group(self.catalog.items())
    }

    pub fn selection(&self) -> Option<&GroupSelection> {
        self.selection.as_ref()
    }

    pub fn version_cards(&self) -> &[VersionCard] {
        &self.version_cards
    }

    pub fn selected_version(&self) -> Option<&SelectedVersion> {
        self.selected_version.as_ref()
    }

    pub fn catalog_query(&self) -> CatalogQuery {
        CatalogQuery {
            family: self.family,
            contributor: self.contributor.clone(),
            search: self.search.clone(),
            page_size: self.catalog_page_size,
        }
    }

    pub fn select_family(&mut self, family: Family) -> Result<LoadOutcome> {
        self.family = family;
        self.clear_selection();
        self.reload_components()
    }

    pub fn set_search(&mut self, search: &str) -> Result<LoadOutcome> {
        self.search = search.trim().to_string();
        self.reload_components()
    }

    pub fn load_more_components(&mut self) -> Result<LoadOutcome> {
        self.load_components(false)
    }

    /// Loads the catalog from its first page until it is exhausted or
    /// `max_pages` pages have been fetched.
    pub fn load_all_components(&mut self, max_pages: usize) -> Result<usize> {
        let query = self.catalog_query();
        let mut pages = CatalogPages {
            api: &self.api,
            query: &query,
        };
        self.catalog.reset();
        self.catalog.load_all(&mut pages, max_pages)
    }

    fn reload_components(&mut self) -> Result<LoadOutcome> {
        self.catalog.reset();
        self.load_components(true)
    }

    fn load_components(&mut self, reset: bool) -> Result<LoadOutcome> {
        let query = self.catalog_query();
        let mut pages = CatalogPages {
            api: &self.api,
            query: &query,
        };
        self.catalog.load_more(&mut pages, reset)
    }

    /// Selects a base-name group. Unversioned groups have exactly one record,
    /// whose history is loaded right away; other groups expose version cards.
    pub fn select_group(&mut self, base_name: &str, component_type: ComponentType) -> Result<()> {
        self.clear_selection();
        self.selection = Some(GroupSelection {
            base_name: base_name.to_string(),
            component_type,
        });

        if !component_type.is_versioned() {
            let record = self
                .catalog
                .items()
                .iter()
                .find(|r| r.full_name == base_name && r.component_type == component_type);
            match record.map(|r| (r.id.clone(), r.version.unwrap_or(1.0))) {
                Some((id, version)) => {
                    self.select_version(&id, Some(version))?;
                }
                None => tracing::warn!(base_name, "no loaded record for unversioned component"),
            }
            return Ok(());
        }

        self.version_cards = version_cards(self.catalog.items(), base_name, component_type);
        if self.version_cards.is_empty() {
            tracing::warn!(base_name, %component_type, "no versions found");
        }
        Ok(())
    }

    pub fn select_version(
        &mut self,
        component_id: &str,
        version: Option<f64>,
    ) -> Result<LoadOutcome> {
        self.selected_version = Some(SelectedVersion {
            component_id: component_id.to_string(),
            version,
        });
        self.history.reset();
        self.load_history(true)
    }

    pub fn load_more_history(&mut self) -> Result<LoadOutcome> {
        self.load_history(false)
    }

    /// Pages through the selected version's history until it is exhausted or
    /// `max_pages` more pages have been fetched.
    pub fn load_all_history(&mut self, max_pages: usize) -> Result<usize> {
        let mut fetched = 0;
        while fetched < max_pages && self.history.has_more() {
            if !self.load_more_history()?.fetched() {
                break;
            }
            fetched += 1;
        }
        Ok(fetched)
    }

    fn load_history(&mut self, reset: bool) -> Result<LoadOutcome> {
        let Some(selected) = &self.selected_version else {
            return Ok(LoadOutcome::Exhausted);
        };
        let query = HistoryQuery {
            component_id: selected.component_id.clone(),
            contributor: self.contributor.clone(),
            page_size: self.history_page_size,
        };
        let mut pages = HistoryPages {
            api: &self.api,
            query: &query,
        };
        self.history.load_more(&mut pages, reset)
    }

    /// Reloads whichever stream is in front: the selected history, or the
    /// catalog when no version is selected.
    pub fn refresh(&mut self) -> Result<LoadOutcome> {
        if self.selected_version.is_some() {
            self.history.reset();
            self.load_history(true)
        } else {
            self.reload_components()
        }
    }

    pub fn back_to_home(&mut self) {
        self.catalog.reset();
        self.clear_selection();
    }

    fn clear_selection(&mut self) {
        self.selection = None;
        self.version_cards.clear();
        self.selected_version = None;
        self.history.reset();
    }
}

#[cfg(test)]
#[path = "tests/browser_tests.rs"]
mod tests;
