use std::env;
use std::time::Duration;

use tracing::warn;

use crate::error::{ProbeError, Result};

/// Number of positional arguments the platform passes to the probe.
const EXPECTED_ARGS: usize = 6;

/// Port used when the port argument is left blank.
const DEFAULT_PORT: &str = "8983";

/// Placeholder the platform substitutes when no credentials are configured.
const ANONYMOUS_SENTINEL: &str = "{0}";

/// Environment knob for an optional client timeout, in whole seconds.
const TIMEOUT_ENV: &str = "SOLRBOX_TIMEOUT_SECS";

/// A validated probe request, resolved from the raw argument vector.
///
/// The invocation contract is fixed by the monitoring platform:
/// `solrbox <METRIC_STATE> <HOST> <PORT> <PATH> <USERNAME> <PASSWORD>`,
/// where `METRIC_STATE` is a comma-separated list of `0`/`1` toggles for
/// the Status and ResponseTime metrics, in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    /// Whether the Status metric was requested.
    pub check_status: bool,

    /// Whether the ResponseTime metric was requested.
    pub check_response_time: bool,

    /// Solr hostname or IP address.
    pub host: String,

    /// Solr port, kept as a string; a garbage value surfaces as a
    /// transport failure when the URL is used, like any unreachable port.
    pub port: String,

    /// Solr base path with a guaranteed leading slash.
    pub path: String,

    /// HTTP Basic username; empty means anonymous access.
    pub username: String,

    /// HTTP Basic password; only sent when `username` is non-empty.
    pub password: String,
}

impl ProbeRequest {
    /// Build a request from the argument vector (program name excluded).
    ///
    /// Fails with [`ProbeError::InvalidParameters`] unless exactly six
    /// arguments are present. No network or filesystem access happens here.
    pub fn from_args(args: &[String]) -> Result<Self> {
        if args.len() != EXPECTED_ARGS {
            return Err(ProbeError::InvalidParameters);
        }

        let (check_status, check_response_time) = metric_toggles(&args[0]);

        let host = args[1].clone();

        let port = if args[2].is_empty() {
            DEFAULT_PORT.to_string()
        } else {
            args[2].clone()
        };

        let path = if args[3].starts_with('/') {
            args[3].clone()
        } else {
            format!("/{}", args[3])
        };

        let mut username = normalize_credential(&args[4]);
        let mut password = normalize_credential(&args[5]);
        if username == ANONYMOUS_SENTINEL {
            username = String::new();
            password = String::new();
        }

        Ok(Self {
            check_status,
            check_response_time,
            host,
            port,
            path,
            username,
            password,
        })
    }

    /// Base endpoint for this request, e.g. `http://10.10.2.5:8983/solr`.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.path)
    }

    /// Basic credentials, or `None` for anonymous access.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        if self.username.is_empty() {
            None
        } else {
            Some((&self.username, &self.password))
        }
    }
}

/// Split the metric-state argument into the (Status, ResponseTime) toggles.
///
/// The platform quotes this argument, and the original parser drops only
/// the first quote character before splitting; tokens other than exactly
/// `"1"` leave the metric off, as do missing tokens.
fn metric_toggles(raw: &str) -> (bool, bool) {
    let cleaned = raw.replacen('"', "", 1);
    let mut toggles = cleaned.split(',').map(|token| token == "1");
    let check_status = toggles.next().unwrap_or(false);
    let check_response_time = toggles.next().unwrap_or(false);
    (check_status, check_response_time)
}

/// Collapse the platform's quoted-empty placeholders into true emptiness.
fn normalize_credential(raw: &str) -> String {
    match raw {
        "\"\"" | "\"" => String::new(),
        other => other.to_string(),
    }
}

/// Optional client timeout read from `SOLRBOX_TIMEOUT_SECS`.
///
/// Unset means no timeout at all, matching the original monitor's behavior
/// on a hung connection.
pub fn request_timeout() -> Option<Duration> {
    timeout_from(env::var(TIMEOUT_ENV).ok().as_deref())
}

fn timeout_from(raw: Option<&str>) -> Option<Duration> {
    let raw = raw?;
    match raw.trim().parse::<u64>() {
        Ok(secs) => Some(Duration::from_secs(secs)),
        Err(_) => {
            warn!(value = raw, "ignoring unparsable SOLRBOX_TIMEOUT_SECS");
            None
        }
    }
}
