use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kinds of artifact stored in the vault.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentType {
    OmniScript,
    IntegrationProcedure,
    FlexCard,
    DataMapper,
}

impl ComponentType {
    pub const ALL: [ComponentType; 4] = [
        ComponentType::OmniScript,
        ComponentType::IntegrationProcedure,
        ComponentType::FlexCard,
        ComponentType::DataMapper,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentType::OmniScript => "OmniScript",
            ComponentType::IntegrationProcedure => "IntegrationProcedure",
            ComponentType::FlexCard => "FlexCard",
            ComponentType::DataMapper => "DataMapper",
        }
    }

    /// Data mappers have a single record per name and never carry version
    /// suffixes in their display name.
    pub fn is_versioned(self) -> bool {
        !matches!(self, ComponentType::DataMapper)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ComponentType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown component type '{}' (expected one of: OmniScript, IntegrationProcedure, FlexCard, DataMapper)",
                    s
                )
            })
    }
}

/// Catalog partition the server lists components by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    OmniProcess,
    FlexCard,
    DataMapper,
}

impl Family {
    pub fn as_str(self) -> &'static str {
        match self {
            Family::OmniProcess => "OmniProcess",
            Family::FlexCard => "FlexCard",
            Family::DataMapper => "DataMapper",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "omniprocess" => Ok(Family::OmniProcess),
            "flexcard" => Ok(Family::FlexCard),
            "datamapper" => Ok(Family::DataMapper),
            other => Err(format!(
                "unknown family '{}' (expected one of: OmniProcess, FlexCard, DataMapper)",
                other
            )),
        }
    }
}

/// One concrete version of one artifact, as listed by the catalog endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: String,
    pub full_name: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<f64>,
}

impl CatalogRecord {
    pub fn id_str(&self) -> &str {
        &self.id
    }
}

/// All loaded catalog records sharing a base name and type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BaseGroup {
    pub base_name: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub version_count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VersionCard {
    pub component_id: String,
    pub version: f64,
    pub label: String,
    pub full_name: String,
}
