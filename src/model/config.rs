use std::collections::HashMap;

use serde::{Deserialize, Serialize};

fn default_contributor() -> String {
    "all".to_string()
}

fn default_catalog_page_size() -> u32 {
    50
}

fn default_history_page_size() -> u32 {
    30
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VaultConfig {
    pub version: u32,

    #[serde(default)]
    pub remote: Option<RemoteConfig>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub base_url: String,

    /// Contributor filter passed to both listing endpoints.
    #[serde(default = "default_contributor")]
    pub contributor: String,

    #[serde(default = "default_catalog_page_size")]
    pub catalog_page_size: u32,

    #[serde(default = "default_history_page_size")]
    pub history_page_size: u32,
}

impl RemoteConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            contributor: default_contributor(),
            catalog_page_size: default_catalog_page_size(),
            history_page_size: default_history_page_size(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VaultState {
    pub version: u32,

    /// Bearer tokens keyed by remote base url.
    #[serde(default)]
    pub remote_tokens: HashMap<String, String>,
}
