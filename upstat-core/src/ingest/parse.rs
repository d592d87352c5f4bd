use crate::ingest::error::LineError;
use crate::ingest::types::{Record, Sample, Timings, UNKNOWN_SERVER};
use serde_json::{Map, Value};
use std::fmt;

/// Classification of one raw input line.
#[derive(Debug)]
pub enum LineOutcome {
    /// Empty or whitespace-only; not counted anywhere.
    Blank,
    Parsed(Record),
    Skipped(SkipReason),
    Errored(LineError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingTimestamp,
    NoUpstreamData,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MissingTimestamp => "missing or invalid timestamp",
            Self::NoUpstreamData => "no upstream timing data",
        })
    }
}

pub fn parse_line(line: &[u8]) -> LineOutcome {
    let line = line.trim_ascii();
    if line.is_empty() {
        return LineOutcome::Blank;
    }

    let doc = match serde_json::from_slice::<Value>(line) {
        Ok(doc) => doc,
        Err(e) => return LineOutcome::Errored(e.into()),
    };

    let Some(doc) = doc.as_object() else {
        return LineOutcome::Errored(LineError::NotAnObject {
            found: json_type_name(&doc),
        });
    };

    parse_document(doc)
}

/// Extracts a record from an already decoded log object.
pub fn parse_document(doc: &Map<String, Value>) -> LineOutcome {
    let Some(timestamp) = doc.get("timestamp").and_then(timestamp_ms) else {
        return LineOutcome::Skipped(SkipReason::MissingTimestamp);
    };

    let mut samples = Vec::new();

    for (pool_name, pool) in upstreams(doc) {
        for peer in peers(pool).iter().filter_map(Value::as_object) {
            let server = peer
                .get("server")
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_SERVER);

            let sample = Sample::new(pool_name.as_str(), server, timestamp, timings(peer));
            if let Some(sample) = sample {
                samples.push(sample);
            }
        }
    }

    match Record::new(timestamp, samples) {
        Some(record) => LineOutcome::Parsed(record),
        None => LineOutcome::Skipped(SkipReason::NoUpstreamData),
    }
}

//-----------------------------------------------------------------------------
// Layered accessors: each level degrades to "absent" on a shape mismatch.
//-----------------------------------------------------------------------------

fn timestamp_ms(value: &Value) -> Option<i64> {
    // Integers only. `as_i64` is `None` for floats and for values above i64::MAX.
    value.as_i64()
}

fn upstreams(doc: &Map<String, Value>) -> impl Iterator<Item = (&String, &Value)> {
    doc.get("stream")
        .and_then(Value::as_object)
        .and_then(|stream| stream.get("upstreams"))
        .and_then(Value::as_object)
        .into_iter()
        .flatten()
}

fn peers(pool: &Value) -> &[Value] {
    pool.as_object()
        .and_then(|pool| pool.get("peers"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn timings(peer: &Map<String, Value>) -> Timings {
    Timings {
        connect_time: timing_ms(peer.get("connect_time")),
        first_byte_time: timing_ms(peer.get("first_byte_time")),
        response_time: timing_ms(peer.get("response_time")),
    }
}

/// Reads one timing field. Non-numeric and negative values are absent.
pub fn timing_ms(value: Option<&Value>) -> Option<u64> {
    let Some(Value::Number(n)) = value else {
        return None;
    };

    if let Some(ms) = n.as_u64() {
        return Some(ms);
    }

    let ms = n.as_f64()?;
    if ms < 0.0 {
        return None;
    }

    Some(round_ms(ms))
}

/// Rounds fractional milliseconds half to even (2.5 -> 2, 3.5 -> 4).
///
/// `as` saturates, so anything beyond `u64::MAX` clamps.
pub fn round_ms(ms: f64) -> u64 {
    ms.round_ties_even() as u64
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
