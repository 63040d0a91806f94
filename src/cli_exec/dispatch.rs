use super::browse::{handle_components_command, handle_history_command, handle_versions_command};
use super::local::{handle_canonicalize_command, handle_diff_command, handle_init_command};
use super::remote_config::handle_remote_command;
use super::store::{with_browser, with_store};
use super::*;

pub(super) fn handle_command(command: Commands) -> Result<()> {
    match command {
        Commands::Init(args) => handle_init_command(args.force, args.path)?,
        Commands::Remote { command } => with_store(|store| handle_remote_command(store, command))?,
        Commands::Components(args) => {
            with_browser(|browser| handle_components_command(browser, args))?
        }
        Commands::Versions(args) => with_browser(|browser| handle_versions_command(browser, args))?,
        Commands::History(args) => with_browser(|browser| handle_history_command(browser, args))?,
        Commands::Diff(args) => handle_diff_command(args.file, args.view, args.json)?,
        Commands::Canonicalize(args) => handle_canonicalize_command(&args.name, args.component_type),
    }
    Ok(())
}
