use serde::de::DeserializeOwned;

use super::*;

pub(super) fn with_retries<T>(label: &str, mut f: impl FnMut() -> Result<T>) -> Result<T> {
    const ATTEMPTS: usize = 3;
    let mut last: Option<anyhow::Error> = None;
    for i in 0..ATTEMPTS {
        match f() {
            Ok(v) => return Ok(v),
            Err(err) => {
                tracing::debug!(attempt = i + 1, error = %format!("{:#}", err), "{} failed", label);
                last = Some(err);
                if i + 1 < ATTEMPTS {
                    std::thread::sleep(std::time::Duration::from_millis(200 * (1 << i)));
                }
            }
        }
    }
    Err(last
        .unwrap_or_else(|| anyhow::anyhow!("unknown error"))
        .context(label.to_string()))
}

impl RemoteClient {
    pub(super) fn ensure_ok(
        &self,
        resp: reqwest::blocking::Response,
        label: &str,
    ) -> Result<reqwest::blocking::Response> {
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            anyhow::bail!(
                "unauthorized (token invalid/expired; run `deltavault remote set --url ... --token ...`)"
            );
        }
        if resp.status() == reqwest::StatusCode::FORBIDDEN {
            anyhow::bail!("forbidden (insufficient permissions for this vault)");
        }
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("{}: not found (check the remote url and component id)", label);
        }
        resp.error_for_status()
            .with_context(|| format!("{} status", label))
    }

    pub(super) fn auth(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub(super) fn get_page<R: DeserializeOwned>(
        &self,
        url: reqwest::Url,
        params: &[(&str, String)],
        label: &str,
    ) -> Result<WirePage<R>> {
        let resp = with_retries(label, || {
            self.client
                .get(url.clone())
                .header(reqwest::header::AUTHORIZATION, self.auth())
                .query(params)
                .send()
                .with_context(|| format!("{} request", label))
        })?;
        let page: WirePage<R> = self
            .ensure_ok(resp, label)?
            .json()
            .with_context(|| format!("parse {} response", label))?;
        Ok(page)
    }
}
