use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum RemoteCommands {
    /// Show the configured remote
    Show {
        #[arg(long)]
        json: bool,
    },
    /// Set the configured remote
    Set {
        #[arg(long)]
        url: String,
        #[arg(long)]
        token: String,
        /// Contributor filter sent with every listing ("all" for everyone)
        #[arg(long, default_value = "all")]
        contributor: String,
        #[arg(long, default_value_t = 50)]
        catalog_page_size: u32,
        #[arg(long, default_value_t = 30)]
        history_page_size: u32,
    },
}
