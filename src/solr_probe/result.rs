use std::time::Duration;

/// Outcome of the query probe against the discovered core.
///
/// Only `Responsive` carries a latency. The other two variants separate
/// the failure modes the platform treats differently: a core that cannot
/// be reached is reported as down, while a query the server explicitly
/// rejected produces no report at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The core answered the wildcard query with a well-formed body.
    Responsive { elapsed: Duration },
    /// The core never produced a response at the transport level.
    Unreachable,
    /// The server answered, but with an error instead of results.
    Rejected,
}
