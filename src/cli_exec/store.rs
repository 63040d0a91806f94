use super::*;

pub(super) fn discover_store() -> Result<VaultStore> {
    VaultStore::discover(&std::env::current_dir().context("get current dir")?)
}

pub(super) fn with_store<F>(f: F) -> Result<()>
where
    F: FnOnce(&VaultStore) -> Result<()>,
{
    let store = discover_store()?;
    f(&store)
}

/// Connects to the configured remote and hands over a fresh browser.
pub(super) fn with_browser<F>(f: F) -> Result<()>
where
    F: FnOnce(&mut Browser<RemoteClient>) -> Result<()>,
{
    let store = discover_store()?;
    let (remote, token) = store.require_remote_and_token()?;
    let client = RemoteClient::new(remote.clone(), token)?;
    let mut browser = Browser::new(client, &remote);
    f(&mut browser)
}
