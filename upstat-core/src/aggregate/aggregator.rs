use crate::aggregate::error::AggregateError;
use crate::aggregate::types::{AggregatedBucket, BucketKey, TimingStats};
use crate::ingest::{LatencyKind, Record, Sample};
use ahash::RandomState;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info};

/// Groups samples by (pool, epoch-aligned window) and summarises each group.
///
/// Not streaming: the whole record sequence is buffered because the output is
/// globally ordered by pool, then window start.
#[derive(Debug, Clone, Copy)]
pub struct BucketAggregator {
    width_ms: i64,
}

impl BucketAggregator {
    /// `width_seconds` is truncated to whole milliseconds and must stay positive.
    pub fn new(width_seconds: f64) -> Result<Self, AggregateError> {
        if !width_seconds.is_finite() {
            return Err(AggregateError::InvalidConfiguration {
                reason: format!("bucket width must be finite, got {width_seconds}"),
            });
        }

        let width_ms = (width_seconds * 1000.0) as i64;
        if width_ms <= 0 {
            return Err(AggregateError::InvalidConfiguration {
                reason: format!("bucket width must be at least 1ms, got {width_seconds}s"),
            });
        }

        Ok(Self { width_ms })
    }

    pub fn from_duration(width: Duration) -> Result<Self, AggregateError> {
        Self::new(width.as_secs_f64())
    }

    pub fn width_ms(&self) -> i64 {
        self.width_ms
    }

    pub fn width_seconds(&self) -> f64 {
        self.width_ms as f64 / 1000.0
    }

    /// Start of the window containing `timestamp_ms`, aligned to the Unix epoch.
    /// `None` when the window's start or end does not fit in an `i64`.
    pub fn bucket_start(&self, timestamp_ms: i64) -> Option<i64> {
        let start = timestamp_ms.div_euclid(self.width_ms).checked_mul(self.width_ms)?;
        start.checked_add(self.width_ms)?;
        Some(start)
    }

    pub fn bucket_key(&self, sample: &Sample) -> Option<BucketKey> {
        Some(BucketKey {
            pool: sample.pool().to_string(),
            start: self.bucket_start(sample.timestamp())?,
        })
    }

    /// Aggregates every sample of every record. Deterministic: output is sorted
    /// by pool name, then bucket start, regardless of input order.
    pub fn aggregate<'a>(
        &self,
        records: impl IntoIterator<Item = &'a Record>,
    ) -> Vec<AggregatedBucket> {
        let groups = self.group(records);
        let group_count = groups.len();

        let mut buckets: Vec<AggregatedBucket> = groups
            .into_iter()
            .filter_map(|(key, samples)| self.summarise(key, &samples))
            .collect();

        buckets.sort_by(|a, b| a.pool.cmp(&b.pool).then(a.start.cmp(&b.start)));

        info!(
            groups = group_count,
            buckets = buckets.len(),
            width_ms = self.width_ms,
            "aggregated upstream timings"
        );

        buckets
    }

    fn group<'a>(
        &self,
        records: impl IntoIterator<Item = &'a Record>,
    ) -> HashMap<BucketKey, Vec<&'a Sample>, RandomState> {
        let mut groups: HashMap<BucketKey, Vec<&'a Sample>, RandomState> = HashMap::default();

        for record in records {
            for sample in record.samples() {
                let Some(key) = self.bucket_key(sample) else {
                    debug!(
                        pool = sample.pool(),
                        timestamp = sample.timestamp(),
                        "dropping sample outside the representable bucket range"
                    );
                    continue;
                };
                groups.entry(key).or_default().push(sample);
            }
        }

        groups
    }

    fn summarise(&self, key: BucketKey, samples: &[&Sample]) -> Option<AggregatedBucket> {
        let stats_for = |kind: LatencyKind| {
            let values: Vec<u64> = samples.iter().filter_map(|s| s.value(kind)).collect();
            (!values.is_empty()).then(|| TimingStats::from_values(values))
        };

        let connect_time = stats_for(LatencyKind::Connect);
        let first_byte_time = stats_for(LatencyKind::FirstByte);
        let response_time = stats_for(LatencyKind::Response);

        if connect_time.is_none() && first_byte_time.is_none() && response_time.is_none() {
            debug!(pool = %key.pool, start = key.start, "dropping bucket without timings");
            return None;
        }

        Some(AggregatedBucket {
            end: key.start + self.width_ms,
            pool: key.pool,
            start: key.start,
            connect_time,
            first_byte_time,
            response_time,
        })
    }
}
