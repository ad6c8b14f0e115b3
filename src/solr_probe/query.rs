//! The timed wildcard query against the discovered core.

use std::time::Instant;

use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::config::ProbeRequest;
use crate::solr_probe::result::ProbeOutcome;

/// Probe the core with a minimal match-all query and time the exchange.
///
/// The clock starts right before the request goes out and stops once a
/// well-formed body is in hand. This call never fails the run: an
/// unreachable core is exactly the condition the probe exists to report,
/// and a query the server rejected is deliberately not reported at all.
pub async fn probe_core(client: &Client, request: &ProbeRequest, core: &str) -> ProbeOutcome {
    let url = format!("{}/{}/select", request.base_url(), core);
    debug!(%url, "probing core");

    let mut call = client
        .get(&url)
        .query(&[("q", "*:*"), ("rows", "1"), ("wt", "json")]);
    if let Some((username, password)) = request.credentials() {
        call = call.basic_auth(username, Some(password));
    }

    let started = Instant::now();
    let response = match call.send().await {
        Ok(response) => response,
        Err(error) => {
            debug!(error = %error, "query never completed, reporting the core down");
            return ProbeOutcome::Unreachable;
        }
    };

    if response.status() != StatusCode::OK {
        debug!(
            status = response.status().as_u16(),
            "server rejected the query, reporting nothing"
        );
        return ProbeOutcome::Rejected;
    }

    // Collect the body before parsing: a read failure here means the
    // connection died, which is the reported-down condition, while a
    // complete body that is not json is an explicit query error.
    let body = match response.bytes().await {
        Ok(body) => body,
        Err(error) => {
            debug!(error = %error, "query body cut short, reporting the core down");
            return ProbeOutcome::Unreachable;
        }
    };

    match serde_json::from_slice::<serde_json::Value>(&body) {
        Ok(_) => ProbeOutcome::Responsive {
            elapsed: started.elapsed(),
        },
        Err(error) => {
            debug!(error = %error, "query body was not json, reporting nothing");
            ProbeOutcome::Rejected
        }
    }
}
