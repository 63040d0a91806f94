use clap::{Args, ValueEnum};

use deltavault::model::{ComponentType, Family};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum HistoryView {
    Summary,
    Table,
    Lines,
    Raw,
    Notes,
}

#[derive(Args)]
pub(crate) struct ComponentsArgs {
    /// Family: omniprocess|flexcard|datamapper
    #[arg(long, default_value = "omniprocess")]
    pub(crate) family: Family,
    /// Free-text search applied by the server
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Maximum number of catalog pages to fetch
    #[arg(long, default_value_t = 1)]
    pub(crate) pages: usize,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct VersionsArgs {
    #[arg(long, default_value = "omniprocess")]
    pub(crate) family: Family,
    /// Base name as printed by `components`
    #[arg(long)]
    pub(crate) base: String,
    /// Component type of the group
    #[arg(long = "type")]
    pub(crate) component_type: ComponentType,
    /// Maximum number of catalog pages to search
    #[arg(long, default_value_t = 20)]
    pub(crate) pages: usize,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct HistoryArgs {
    /// Component (version) id
    #[arg(long)]
    pub(crate) component: String,
    /// Maximum number of history pages to fetch
    #[arg(long, default_value_t = 1)]
    pub(crate) pages: usize,
    #[arg(long, value_enum, default_value_t = HistoryView::Summary)]
    pub(crate) view: HistoryView,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
