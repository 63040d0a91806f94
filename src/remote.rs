use anyhow::{Context, Result, anyhow};

use crate::model::{CatalogRecord, RemoteConfig, SnapshotRecord};
use crate::sync::{Cursor, Page};

mod http_client;

mod pages;
pub use self::pages::{CatalogPages, HistoryPages};

mod types;
pub use self::types::{CatalogQuery, HistoryQuery};
use self::types::{WireCatalogRecord, WirePage, WireSnapshot};

/// The two listing capabilities the browser pages through.
pub trait VaultApi {
    fn fetch_catalog_page(
        &self,
        query: &CatalogQuery,
        cursor: Option<&Cursor>,
    ) -> Result<Page<CatalogRecord>>;

    fn fetch_history_page(
        &self,
        query: &HistoryQuery,
        cursor: Option<&Cursor>,
    ) -> Result<Page<SnapshotRecord>>;
}

pub struct RemoteClient {
    remote: RemoteConfig,
    token: String,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(remote: RemoteConfig, token: String) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("deltavault")
            .build()
            .context("build reqwest client")?;
        Ok(Self {
            remote,
            token,
            client,
        })
    }

    pub fn remote(&self) -> &RemoteConfig {
        &self.remote
    }
}

impl VaultApi for RemoteClient {
    fn fetch_catalog_page(
        &self,
        query: &CatalogQuery,
        cursor: Option<&Cursor>,
    ) -> Result<Page<CatalogRecord>> {
        let mut params = vec![
            ("family", query.family.as_str().to_string()),
            ("contributor", query.contributor.clone()),
            ("search", query.search.clone()),
            ("pageSize", query.page_size.to_string()),
        ];
        if let Some(c) = cursor {
            params.push(("cursor", c.as_str().to_string()));
        }

        let url = self.endpoint(&["components"])?;
        let page: WirePage<WireCatalogRecord> = self.get_page(url, &params, "list components")?;
        let (raw, next_cursor) = page.into_parts();
        let items = raw
            .into_iter()
            .filter_map(WireCatalogRecord::validate)
            .collect::<Vec<_>>();
        tracing::debug!(
            family = %query.family,
            items = items.len(),
            next = ?next_cursor,
            "loaded component page"
        );
        Ok(Page { items, next_cursor })
    }

    fn fetch_history_page(
        &self,
        query: &HistoryQuery,
        cursor: Option<&Cursor>,
    ) -> Result<Page<SnapshotRecord>> {
        let mut params = vec![
            ("contributor", query.contributor.clone()),
            ("pageSize", query.page_size.to_string()),
        ];
        if let Some(c) = cursor {
            params.push(("cursor", c.as_str().to_string()));
        }

        let url = self.endpoint(&["components", &query.component_id, "snapshots"])?;
        let page: WirePage<WireSnapshot> = self.get_page(url, &params, "list snapshots")?;
        let (raw, next_cursor) = page.into_parts();
        let items = raw
            .into_iter()
            .filter_map(WireSnapshot::validate)
            .collect::<Vec<_>>();
        tracing::debug!(
            component = %query.component_id,
            items = items.len(),
            next = ?next_cursor,
            "loaded snapshot page"
        );
        Ok(Page { items, next_cursor })
    }
}

impl RemoteClient {
    fn endpoint(&self, segments: &[&str]) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.remote.base_url)
            .with_context(|| format!("parse remote url {}", self.remote.base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow!("remote url {} cannot be a base", self.remote.base_url))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
