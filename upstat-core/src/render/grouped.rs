use crate::aggregate::{AggregatedBucket, TimingStats};
use crate::render::timestamp::local_iso;
use std::fmt::Write;

pub(crate) const TITLE: &str = "Upstream Timing Analysis";
pub(crate) const EMPTY: &str = "No upstream timing data found in the log file.\n";

pub fn render(buckets: &[AggregatedBucket]) -> String {
    if buckets.is_empty() {
        return EMPTY.to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{}\n", "=".repeat(50));

    // Buckets arrive sorted by pool, so each pool is one contiguous run.
    for pool in buckets.chunk_by(|a, b| a.pool == b.pool) {
        let _ = writeln!(out, "Upstream Pool: {}", pool[0].pool);
        let _ = writeln!(out, "{}", "-".repeat(30));

        for bucket in pool {
            let _ = writeln!(
                out,
                "Time Bucket: {} - {}",
                local_iso(bucket.start),
                local_iso(bucket.end)
            );

            for (kind, stats) in bucket.present_stats() {
                let _ = writeln!(out, "  {}:", kind.label());
                write_stats(&mut out, stats, "    ");
            }

            out.push('\n');
        }

        out.push('\n');
    }

    out
}

fn write_stats(out: &mut String, stats: &TimingStats, indent: &str) {
    let _ = writeln!(out, "{indent}Min: {}ms", stats.min);
    let _ = writeln!(out, "{indent}Max: {}ms", stats.max);
    let _ = writeln!(out, "{indent}Avg: {:.2}ms", stats.mean);
    let _ = writeln!(out, "{indent}P5:  {:.2}ms", stats.p5);
    let _ = writeln!(out, "{indent}P95: {:.2}ms", stats.p95);
    let _ = writeln!(out, "{indent}Count: {} samples", stats.count);
}
