//! Core discovery via the `admin/cores` status handler.

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::config::ProbeRequest;
use crate::error::{ProbeError, Result};

/// The slice of the STATUS response the probe cares about. The keys of
/// `status` are the core names, kept in the order the server sent them.
#[derive(Debug, Deserialize)]
struct CoreStatusResponse {
    status: serde_json::Map<String, serde_json::Value>,
}

/// Ask the server which cores it hosts and pick the first one reported.
///
/// Every failure here is terminal for the run: without a core name there
/// is nothing to probe.
pub async fn first_core(client: &Client, request: &ProbeRequest) -> Result<String> {
    let url = format!("{}/admin/cores", request.base_url());
    debug!(%url, "discovering cores");

    let mut call = client
        .get(&url)
        .query(&[("action", "STATUS"), ("wt", "json")]);
    if let Some((username, password)) = request.credentials() {
        call = call.basic_auth(username, Some(password));
    }

    let response = call.send().await.map_err(classify_transport)?;
    match response.status() {
        StatusCode::OK => {}
        StatusCode::UNAUTHORIZED => return Err(ProbeError::InvalidAuthentication),
        other => return Err(ProbeError::UnexpectedStatus(other.as_u16())),
    }

    let cores: CoreStatusResponse = response.json().await.map_err(ProbeError::Transport)?;
    match cores.status.keys().next() {
        Some(core) => {
            debug!(core = %core, total = cores.status.len(), "picked first reported core");
            Ok(core.clone())
        }
        None => Err(ProbeError::CoreNotFound),
    }
}

/// Connect-phase failures cover both unresolvable hosts and refused
/// connections; the platform expects both as the unknown-host condition.
fn classify_transport(error: reqwest::Error) -> ProbeError {
    if error.is_connect() {
        ProbeError::UnknownHost
    } else {
        ProbeError::Transport(error)
    }
}
