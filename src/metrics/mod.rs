//! Metric identifiers and the `<id>|<value>|` line protocol the
//! monitoring platform ingests from stdout.

use std::io::{self, Write};

use crate::config::ProbeRequest;
use crate::solr_probe::result::ProbeOutcome;

/// Platform identifier of the availability metric.
const STATUS_ID: &str = "1709:Status:9";
/// Platform identifier of the query latency metric, in milliseconds.
const RESPONSE_TIME_ID: &str = "1710:Response Time:4";

/// The identifier table, built once at startup and handed to whoever
/// produces samples.
///
/// The identifiers are assigned by the platform and must round-trip byte
/// for byte; nothing in the probe interprets them.
#[derive(Debug, Clone)]
pub struct MetricCatalog {
    pub status: &'static str,
    pub response_time: &'static str,
}

impl MetricCatalog {
    pub fn platform_defaults() -> Self {
        Self {
            status: STATUS_ID,
            response_time: RESPONSE_TIME_ID,
        }
    }
}

/// One emitted sample, rendered as `<id>|<value>|`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSample {
    pub id: &'static str,
    pub value: String,
}

impl MetricSample {
    fn new(id: &'static str, value: impl Into<String>) -> Self {
        Self {
            id,
            value: value.into(),
        }
    }
}

/// Turn a probe outcome into the samples the request asked for.
///
/// A responsive core yields Status = 1 plus the elapsed milliseconds, an
/// unreachable one yields Status = 0 and never a latency, and a rejected
/// query yields nothing at all. Each sample appears only when its toggle
/// is on, and always in Status-then-latency order.
pub fn availability_samples(
    catalog: &MetricCatalog,
    request: &ProbeRequest,
    outcome: &ProbeOutcome,
) -> Vec<MetricSample> {
    let mut samples = Vec::new();
    match outcome {
        ProbeOutcome::Responsive { elapsed } => {
            if request.check_status {
                samples.push(MetricSample::new(catalog.status, "1"));
            }
            if request.check_response_time {
                let millis = elapsed.as_millis().to_string();
                samples.push(MetricSample::new(catalog.response_time, millis));
            }
        }
        ProbeOutcome::Unreachable => {
            if request.check_status {
                samples.push(MetricSample::new(catalog.status, "0"));
            }
        }
        ProbeOutcome::Rejected => {}
    }
    samples
}

/// Write the samples in production order, one line each.
pub fn emit<W: Write>(out: &mut W, samples: &[MetricSample]) -> io::Result<()> {
    for sample in samples {
        writeln!(out, "{}|{}|", sample.id, sample.value)?;
    }
    Ok(())
}
