use deltavault::model::RemoteConfig;

use super::*;

pub(super) fn handle_remote_command(store: &VaultStore, command: RemoteCommands) -> Result<()> {
    match command {
        RemoteCommands::Show { json } => {
            let cfg = store.read_config()?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&cfg.remote).context("serialize remote json")?
                );
            } else if let Some(remote) = cfg.remote {
                println!("url: {}", remote.base_url);
                println!("contributor: {}", remote.contributor);
                println!("catalog_page_size: {}", remote.catalog_page_size);
                println!("history_page_size: {}", remote.history_page_size);
            } else {
                println!("No remote configured");
            }
        }
        RemoteCommands::Set {
            url,
            token,
            contributor,
            catalog_page_size,
            history_page_size,
        } => {
            if catalog_page_size == 0 || history_page_size == 0 {
                anyhow::bail!("page sizes must be at least 1");
            }
            let mut cfg = store.read_config()?;
            let remote = RemoteConfig {
                base_url: url.trim_end_matches('/').to_string(),
                contributor,
                catalog_page_size,
                history_page_size,
            };
            store
                .set_remote_token(&remote, &token)
                .context("store remote token in state.json")?;
            cfg.remote = Some(remote);
            store.write_config(&cfg)?;
            println!("Remote configured");
        }
    }
    Ok(())
}
