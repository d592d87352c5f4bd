use crate::ingest::LatencyKind;

/// Identifies one aggregation group: a pool within one epoch-aligned window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BucketKey {
    pub pool: String,
    /// Unix milliseconds, a multiple of the bucket width.
    pub start: i64,
}

/// Summary of one latency kind within one bucket. All values are milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingStats {
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub p5: f64,
    pub p95: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedBucket {
    pub pool: String,
    pub start: i64,
    pub end: i64,
    pub connect_time: Option<TimingStats>,
    pub first_byte_time: Option<TimingStats>,
    pub response_time: Option<TimingStats>,
}

impl AggregatedBucket {
    pub fn stats(&self, kind: LatencyKind) -> Option<&TimingStats> {
        match kind {
            LatencyKind::Connect => self.connect_time.as_ref(),
            LatencyKind::FirstByte => self.first_byte_time.as_ref(),
            LatencyKind::Response => self.response_time.as_ref(),
        }
    }

    /// Present statistics in the fixed connect / first-byte / response order.
    pub fn present_stats(&self) -> impl Iterator<Item = (LatencyKind, &TimingStats)> {
        LatencyKind::ALL
            .into_iter()
            .filter_map(|kind| self.stats(kind).map(|s| (kind, s)))
    }
}
