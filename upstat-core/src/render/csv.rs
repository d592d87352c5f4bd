use crate::aggregate::{AggregatedBucket, TimingStats};
use crate::ingest::LatencyKind;
use crate::render::timestamp::local_iso;
use std::borrow::Cow;

pub(crate) const HEADER: &str =
    "pool_name,bucket_start,bucket_end,metric_type,min_ms,max_ms,avg_ms,p5_ms,p95_ms,count";

/// One row per (bucket, present latency kind).
pub fn render(buckets: &[AggregatedBucket]) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + buckets.len() * 96);
    out.push_str(HEADER);
    out.push('\n');

    for bucket in buckets {
        let pool = escape(&bucket.pool);
        let start = local_iso(bucket.start);
        let end = local_iso(bucket.end);

        for (kind, stats) in bucket.present_stats() {
            out.push_str(&format!("{pool},{start},{end},{}\n", stats_fields(kind, stats)));
        }
    }

    out
}

fn stats_fields(kind: LatencyKind, stats: &TimingStats) -> String {
    format!(
        "{},{},{},{:.2},{:.2},{:.2},{}",
        kind.field(),
        stats.min,
        stats.max,
        stats.mean,
        stats.p5,
        stats.p95,
        stats.count
    )
}

/// Quotes a field containing a delimiter, quote or line break; quotes are doubled.
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
