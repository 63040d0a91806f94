use super::*;
use crate::sync::PageSource;

/// Catalog listing bound to one filter set.
pub struct CatalogPages<'a, A: VaultApi + ?Sized> {
    pub api: &'a A,
    pub query: &'a CatalogQuery,
}

impl<A: VaultApi + ?Sized> PageSource<CatalogRecord> for CatalogPages<'_, A> {
    fn fetch_page(&mut self, cursor: Option<&Cursor>) -> Result<Page<CatalogRecord>> {
        self.api.fetch_catalog_page(self.query, cursor)
    }
}

/// Snapshot history of one component version.
pub struct HistoryPages<'a, A: VaultApi + ?Sized> {
    pub api: &'a A,
    pub query: &'a HistoryQuery,
}

impl<A: VaultApi + ?Sized> PageSource<SnapshotRecord> for HistoryPages<'_, A> {
    fn fetch_page(&mut self, cursor: Option<&Cursor>) -> Result<Page<SnapshotRecord>> {
        self.api.fetch_history_page(self.query, cursor)
    }
}
