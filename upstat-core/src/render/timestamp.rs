use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

/// Unix milliseconds as an ISO 8601 local time without offset.
pub fn local_iso(ms: i64) -> String {
    iso_in(ms, &Local)
}

/// Seconds precision, plus a microsecond fraction when the millisecond part is
/// non-zero. Out-of-range timestamps fall back to the raw number.
pub fn iso_in<Tz>(ms: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(utc) = DateTime::from_timestamp_millis(ms) else {
        return ms.to_string();
    };

    let local = utc.with_timezone(tz);
    if ms.rem_euclid(1000) == 0 {
        local.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        local.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}
