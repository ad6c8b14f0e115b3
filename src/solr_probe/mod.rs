//! The two HTTP calls a check consists of: core discovery against the
//! administrative handler and a timed minimal query against the core it
//! reported first.

use std::time::Duration;

use reqwest::{Client, redirect};

use crate::error::{ProbeError, Result};

pub mod discovery;
pub mod query;
pub mod result;

/// Build the client shared by both probe calls.
///
/// Redirects and environment proxies stay off so the probe observes the
/// target directly; a redirecting server is reported as a response error,
/// not followed. No timeout is applied unless one was configured.
pub fn build_client(timeout: Option<Duration>) -> Result<Client> {
    let mut builder = Client::builder()
        .redirect(redirect::Policy::none())
        .no_proxy()
        .user_agent(concat!("solrbox/", env!("CARGO_PKG_VERSION")));
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(ProbeError::Transport)
}
