use clap::Subcommand;

use crate::RemoteCommands;

pub(crate) mod browse;
pub(crate) mod local;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Initialize a vault configuration directory (.deltavault)
    Init(local::InitArgs),

    /// Configure or show the remote
    Remote {
        #[command(subcommand)]
        command: RemoteCommands,
    },

    /// List catalog components grouped by base name
    Components(browse::ComponentsArgs),

    /// List the versions of one base-name group
    Versions(browse::VersionsArgs),

    /// Show the change history of a component version
    History(browse::HistoryArgs),

    /// Render a diff report read from a file or stdin
    Diff(local::DiffArgs),

    /// Print the base name of a component's full name
    Canonicalize(local::CanonicalizeArgs),
}
