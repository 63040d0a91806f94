mod catalog;
mod config;
mod snapshot;

pub use self::catalog::{BaseGroup, CatalogRecord, ComponentType, Family, VersionCard};
pub use self::config::{RemoteConfig, VaultConfig, VaultState};
pub use self::snapshot::SnapshotRecord;
