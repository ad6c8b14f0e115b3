//! solrbox: single-shot availability probe for an Apache Solr host.
//!
//! Discovers the first core the server reports, times one minimal query
//! against it and prints platform metric lines to stdout. Diagnostics go
//! to stderr so the metric protocol stays clean.
//!
//! ```text
//! solrbox <METRIC_STATE> <HOST> <PORT> <PATH> <USERNAME> <PASSWORD>
//! solrbox "1,1" 10.10.2.5 8983 solr "" ""
//! ```

use std::io;
use std::process;

use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub mod config;
pub mod error;
pub mod metrics;
pub mod solr_probe;

use config::ProbeRequest;
use error::{ProbeError, Result};
use metrics::MetricCatalog;
use solr_probe::result::ProbeOutcome;

#[tokio::main]
async fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let request = match ProbeRequest::from_args(&args) {
        Ok(request) => request,
        Err(error) => report_fatal(error),
    };

    let catalog = MetricCatalog::platform_defaults();
    match run_probe(&request).await {
        Ok(outcome) => {
            let samples = metrics::availability_samples(&catalog, &request, &outcome);
            let stdout = io::stdout();
            if let Err(error) = metrics::emit(&mut stdout.lock(), &samples) {
                debug!(error = %error, "could not write metric lines");
                process::exit(1);
            }
        }
        Err(error) => report_fatal(error),
    }
}

/// The two-step check: discover a core, then probe it.
///
/// Discovery failures abort the run; the probe itself never does, its
/// outcome is what the emitted metrics describe.
async fn run_probe(request: &ProbeRequest) -> Result<ProbeOutcome> {
    let client = solr_probe::build_client(config::request_timeout())?;
    let core = solr_probe::discovery::first_core(&client, request).await?;
    Ok(solr_probe::query::probe_core(&client, request, &core).await)
}

/// Print a fatal error to stdout, where the platform reads it, and exit
/// with the code the condition maps to. Conditions whose message is empty
/// exit without printing anything.
fn report_fatal(error: ProbeError) -> ! {
    let message = error.to_string();
    if !message.is_empty() {
        println!("{message}");
    }
    process::exit(error.exit_code());
}

/// Diagnostics on stderr only; stdout carries the metric protocol.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .init();
}
