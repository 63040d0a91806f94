use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::Commands;

const LOG_ENV: &str = "DELTAVAULT_LOG";

#[derive(Parser)]
#[command(name = "deltavault")]
#[command(about = "Browse component version history in a DeltaVault", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::cli_exec::handle_command(cli.command)
}

/// Installs the stderr subscriber. Filter directives come from
/// `DELTAVAULT_LOG` and default to `warn`.
pub(crate) fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
