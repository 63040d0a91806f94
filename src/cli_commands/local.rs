use std::path::PathBuf;

use clap::{Args, ValueEnum};

use deltavault::model::ComponentType;

#[derive(Args)]
pub(crate) struct InitArgs {
    /// Re-initialize if .deltavault already exists
    #[arg(long)]
    pub(crate) force: bool,
    /// Path to initialize (defaults to current directory)
    #[arg(long)]
    pub(crate) path: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum DiffView {
    Summary,
    Table,
    Lines,
}

#[derive(Args)]
pub(crate) struct DiffArgs {
    /// Diff report file ("-" or omitted reads stdin)
    pub(crate) file: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = DiffView::Summary)]
    pub(crate) view: DiffView,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct CanonicalizeArgs {
    /// Full component name, e.g. "Quote_Create_2 v3"
    pub(crate) name: String,
    #[arg(long = "type")]
    pub(crate) component_type: ComponentType,
}
