use integration_tests::harness::fixture_path;
use upstat_core::aggregate::{AggregatedBucket, BucketAggregator};
use upstat_core::ingest::{ParseStats, Record, RecordParser};

pub const FIVE_MINUTES: f64 = 300.0;

/// Parses a fixture file and aggregates it with the given width.
#[allow(dead_code)]
pub fn run_fixture(
    file: &str,
    width_seconds: f64,
) -> (Vec<Record>, ParseStats, Vec<AggregatedBucket>) {
    let mut parser = RecordParser::new();
    let records = parser
        .parse_file(fixture_path(file))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    let buckets = BucketAggregator::new(width_seconds).unwrap().aggregate(&records);

    (records, parser.stats(), buckets)
}
