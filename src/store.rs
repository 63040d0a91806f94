use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::model::{RemoteConfig, VaultConfig, VaultState};

const STORE_DIR: &str = ".deltavault";

/// The `.deltavault` directory holding remote configuration and tokens.
#[derive(Clone, Debug)]
pub struct VaultStore {
    root: PathBuf,
}

impl VaultStore {
    pub fn store_dir(root: &Path) -> PathBuf {
        root.join(STORE_DIR)
    }

    pub fn open(root: &Path) -> Result<Self> {
        let dir = Self::store_dir(root);
        if !dir.is_dir() {
            return Err(anyhow!(
                "No {} directory found at {} (run `deltavault init`)",
                STORE_DIR,
                dir.display()
            ));
        }
        Ok(Self { root: dir })
    }

    pub fn init(root: &Path, force: bool) -> Result<Self> {
        let dir = Self::store_dir(root);
        if dir.exists() && !force {
            return Err(anyhow!(
                "{} already exists at {} (use --force to re-init)",
                STORE_DIR,
                dir.display()
            ));
        }
        fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;

        let store = Self { root: dir };
        store.write_config(&VaultConfig {
            version: 1,
            remote: None,
        })?;
        store.write_state(&VaultState {
            version: 1,
            ..VaultState::default()
        })?;
        Ok(store)
    }

    /// Finds the nearest `.deltavault` directory at or above `start`.
    pub fn discover(start: &Path) -> Result<Self> {
        let start = start
            .canonicalize()
            .with_context(|| format!("canonicalize {}", start.display()))?;
        for dir in start.ancestors() {
            if Self::store_dir(dir).is_dir() {
                return Self::open(dir);
            }
        }
        Err(anyhow!(
            "No {} directory found (run `deltavault init`)",
            STORE_DIR
        ))
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn read_config(&self) -> Result<VaultConfig> {
        let bytes = fs::read(self.root.join("config.json")).context("read config.json")?;
        let cfg: VaultConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported config version {}", cfg.version);
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &VaultConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join("config.json"), &bytes).context("write config.json")?;
        Ok(())
    }

    pub fn read_state(&self) -> Result<VaultState> {
        let path = self.root.join("state.json");
        if !path.exists() {
            return Ok(VaultState {
                version: 1,
                ..VaultState::default()
            });
        }
        let bytes = fs::read(&path).context("read state.json")?;
        let st: VaultState = serde_json::from_slice(&bytes).context("parse state.json")?;
        if st.version != 1 {
            anyhow::bail!("unsupported state version {}", st.version);
        }
        Ok(st)
    }

    pub fn write_state(&self, st: &VaultState) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(st).context("serialize state")?;
        write_atomic(&self.root.join("state.json"), &bytes).context("write state.json")?;
        Ok(())
    }

    pub fn get_remote_token(&self, remote: &RemoteConfig) -> Result<Option<String>> {
        let st = self.read_state()?;
        Ok(st.remote_tokens.get(&remote.base_url).cloned())
    }

    pub fn set_remote_token(&self, remote: &RemoteConfig, token: &str) -> Result<()> {
        let mut st = self.read_state()?;
        st.remote_tokens
            .insert(remote.base_url.clone(), token.to_string());
        self.write_state(&st)
    }

    pub fn require_remote(&self) -> Result<RemoteConfig> {
        self.read_config()?
            .remote
            .context("no remote configured (run `deltavault remote set --url ... --token ...`)")
    }

    pub fn require_remote_and_token(&self) -> Result<(RemoteConfig, String)> {
        let remote = self.require_remote()?;
        let token = self
            .get_remote_token(&remote)?
            .context("no remote token configured (run `deltavault remote set --url ... --token ...`)")?;
        Ok((remote, token))
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
