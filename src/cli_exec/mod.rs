use anyhow::{Context, Result};

use deltavault::browser::Browser;
use deltavault::remote::RemoteClient;
use deltavault::store::VaultStore;

use crate::{Commands, RemoteCommands};

mod browse;
mod dispatch;
mod local;
mod remote_config;
mod render;
mod store;

pub(super) fn handle_command(command: Commands) -> Result<()> {
    dispatch::handle_command(command)
}
