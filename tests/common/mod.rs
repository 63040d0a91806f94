#![allow(dead_code)]

use std::collections::HashMap;
use std::process::{Command, Output, Stdio};
use std::sync::{Arc, Mutex};
use std::thread;

use anyhow::{Context, Result};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

pub const TOKEN: &str = "dev";

/// Records held by the fake vault. Cursors are plain offsets.
#[derive(Default)]
pub struct FakeVault {
    pub components: Vec<Value>,
    pub snapshots: HashMap<String, Vec<Value>>,
    /// Query strings of every request, in arrival order.
    pub requests: Mutex<Vec<HashMap<String, String>>>,
}

pub struct ServerGuard {
    pub base_url: String,
    pub vault: Arc<FakeVault>,
    shutdown: Option<tokio::sync::oneshot::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {}", TOKEN))
}

fn paginate(all: &[Value], params: &HashMap<String, String>) -> Value {
    let page_size = params
        .get("pageSize")
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(50);
    let start = params
        .get("cursor")
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(0)
        .min(all.len());
    let end = (start + page_size).min(all.len());
    let next = if end < all.len() {
        Value::String(end.to_string())
    } else {
        Value::Null
    };
    json!({"items": all[start..end].to_vec(), "nextCursor": next})
}

/// Unknown types land in every family, like a server with dirty data.
fn family_of(component_type: &str) -> Option<&'static str> {
    match component_type {
        "OmniScript" | "IntegrationProcedure" => Some("OmniProcess"),
        "FlexCard" => Some("FlexCard"),
        "DataMapper" => Some("DataMapper"),
        _ => None,
    }
}

async fn list_components(
    State(vault): State<Arc<FakeVault>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    if let Ok(mut requests) = vault.requests.lock() {
        requests.push(params.clone());
    }
    let family = params.get("family").cloned().unwrap_or_default();
    let search = params.get("search").cloned().unwrap_or_default();
    let matching = vault
        .components
        .iter()
        .filter(|c| {
            let t = c["type"].as_str().unwrap_or_default();
            family.is_empty() || family_of(t).is_none_or(|f| f == family)
        })
        .filter(|c| {
            c["fullName"]
                .as_str()
                .is_some_and(|name| name.contains(&search))
        })
        .cloned()
        .collect::<Vec<_>>();
    Ok(Json(paginate(&matching, &params)))
}

async fn list_snapshots(
    State(vault): State<Arc<FakeVault>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Value>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    if let Ok(mut requests) = vault.requests.lock() {
        requests.push(params.clone());
    }
    let Some(all) = vault.snapshots.get(&id) else {
        return Err(StatusCode::NOT_FOUND);
    };
    Ok(Json(paginate(all, &params)))
}

/// Serves `vault` on an ephemeral port from a background runtime.
pub fn spawn_server(vault: FakeVault) -> Result<ServerGuard> {
    let vault = Arc::new(vault);
    let app = Router::new()
        .route("/components", get(list_components))
        .route("/components/:id/snapshots", get(list_snapshots))
        .with_state(vault.clone());

    let (addr_tx, addr_rx) = std::sync::mpsc::channel();
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let handle = thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(err) => {
                let _ = addr_tx.send(Err(anyhow::Error::from(err)));
                return;
            }
        };
        rt.block_on(async move {
            let listener = match tokio::net::TcpListener::bind("127.0.0.1:0").await {
                Ok(l) => l,
                Err(err) => {
                    let _ = addr_tx.send(Err(err.into()));
                    return;
                }
            };
            let _ = addr_tx.send(listener.local_addr().map_err(Into::into));
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });
    });

    let addr = addr_rx
        .recv()
        .context("fake vault thread exited before binding")??;
    Ok(ServerGuard {
        base_url: format!("http://{}", addr),
        vault,
        shutdown: Some(shutdown_tx),
        handle: Some(handle),
    })
}

pub fn component(id: &str, full_name: &str, component_type: &str, version: Value) -> Value {
    json!({"id": id, "fullName": full_name, "type": component_type, "version": version})
}

pub fn snapshot(id: &str, at: &str, diff_text: &str) -> Value {
    json!({
        "id": id,
        "at": at,
        "actor": "ana@example.com",
        "diffText": diff_text,
        "rawJson": {"Name": id},
    })
}

pub fn run_deltavault(cwd: &std::path::Path, args: &[&str]) -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_deltavault"))
        .current_dir(cwd)
        .args(args)
        .env_remove("DELTAVAULT_LOG")
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("run deltavault {:?}", args))
}

pub fn run_deltavault_ok(cwd: &std::path::Path, args: &[&str]) -> Result<String> {
    let out = run_deltavault(cwd, args)?;
    if !out.status.success() {
        anyhow::bail!(
            "deltavault {:?} failed (status {:?})\nstdout:\n{}\nstderr:\n{}",
            args,
            out.status,
            String::from_utf8_lossy(&out.stdout),
            String::from_utf8_lossy(&out.stderr)
        );
    }
    Ok(String::from_utf8_lossy(&out.stdout).to_string())
}
