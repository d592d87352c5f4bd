
use crate::aggregate::{AggregatedBucket, TimingStats};

pub(super) fn stats(min: u64, max: u64, mean: f64, p5: f64, p95: f64, count: usize) -> TimingStats {
    TimingStats {
        min,
        max,
        mean,
        p5,
        p95,
        count,
    }
}

pub(super) fn bucket(pool: &str, start: i64) -> AggregatedBucket {
    AggregatedBucket {
        pool: pool.to_string(),
        start,
        end: start + 300_000,
        connect_time: Some(stats(1, 1, 1.0, 1.0, 1.0, 4)),
        first_byte_time: None,
        response_time: Some(stats(2, 21, 7.5, 2.0, 21.0, 4)),
    }
}
