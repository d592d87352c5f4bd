use std::fmt;

/// Server identifier used when a peer carries no usable `server` field.
pub const UNKNOWN_SERVER: &str = "unknown";

/// The three upstream latency measurements a peer may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LatencyKind {
    Connect,
    FirstByte,
    Response,
}

impl LatencyKind {
    /// Fixed presentation order.
    pub const ALL: [LatencyKind; 3] = [Self::Connect, Self::FirstByte, Self::Response];

    /// Name of the peer field carrying this measurement (also the csv `metric_type`).
    pub fn field(self) -> &'static str {
        match self {
            Self::Connect => "connect_time",
            Self::FirstByte => "first_byte_time",
            Self::Response => "response_time",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Connect => "Connect Time",
            Self::FirstByte => "First Byte Time",
            Self::Response => "Response Time",
        }
    }
}

impl fmt::Display for LatencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

/// Latency values of one peer, in whole milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timings {
    pub connect_time: Option<u64>,
    pub first_byte_time: Option<u64>,
    pub response_time: Option<u64>,
}

impl Timings {
    pub fn get(&self, kind: LatencyKind) -> Option<u64> {
        match kind {
            LatencyKind::Connect => self.connect_time,
            LatencyKind::FirstByte => self.first_byte_time,
            LatencyKind::Response => self.response_time,
        }
    }

    pub fn is_empty(&self) -> bool {
        LatencyKind::ALL.iter().all(|&kind| self.get(kind).is_none())
    }
}

/// One latency measurement set for one upstream server at one instant.
///
/// A `Sample` always carries at least one timing value; [`Sample::new`] refuses
/// to build one otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pool: String,
    server: String,
    timestamp: i64,
    timings: Timings,
}

impl Sample {
    pub fn new(
        pool: impl Into<String>,
        server: impl Into<String>,
        timestamp: i64,
        timings: Timings,
    ) -> Option<Self> {
        if timings.is_empty() {
            return None;
        }

        Some(Self {
            pool: pool.into(),
            server: server.into(),
            timestamp,
            timings,
        })
    }

    pub fn pool(&self) -> &str {
        &self.pool
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    /// Unix milliseconds.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    pub fn value(&self, kind: LatencyKind) -> Option<u64> {
        self.timings.get(kind)
    }
}

/// One parsed log line. Never empty: lines without samples are not turned into records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    timestamp: i64,
    samples: Vec<Sample>,
}

impl Record {
    pub fn new(timestamp: i64, samples: Vec<Sample>) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        Some(Self { timestamp, samples })
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
}

/// Running line counters of a [`RecordParser`](super::RecordParser).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub parsed: u64,
    pub skipped: u64,
    pub errored: u64,
}

impl ParseStats {
    pub fn total(&self) -> u64 {
        self.parsed + self.skipped + self.errored
    }
}

impl fmt::Display for ParseStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parsed {} entries, skipped {}, errors {}",
            self.parsed, self.skipped, self.errored
        )
    }
}
