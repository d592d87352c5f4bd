//! ISO 8601 durations, restricted to units with a fixed length.
//!
//! Accepted: `P[nW][nD][T[nH][nM][nS]]`, where any component may carry a
//! fraction (`PT1.5M`, `PT0,5S`). Years and months are rejected because their
//! length depends on the calendar.

use crate::conf::error::ConfigError;
use std::time::Duration;

const DATE_UNITS: &[(char, Option<f64>)] = &[
    ('Y', None),
    ('M', None),
    ('W', Some(604_800.0)),
    ('D', Some(86_400.0)),
];

const TIME_UNITS: &[(char, Option<f64>)] = &[
    ('H', Some(3_600.0)),
    ('M', Some(60.0)),
    ('S', Some(1.0)),
];

/// Parses a positive ISO 8601 duration such as `PT5M` or `P1DT12H`.
pub fn parse_duration(value: &str) -> Result<Duration, ConfigError> {
    if value.contains('-') {
        return Err(ConfigError::NegativeDuration {
            value: value.to_string(),
        });
    }

    let body = value
        .strip_prefix('P')
        .ok_or_else(|| ConfigError::invalid_duration(value))?;

    let (date, time) = match body.split_once('T') {
        // "P1DT": time designator with nothing after it.
        Some((_, "")) => return Err(ConfigError::invalid_duration(value)),
        Some((date, time)) => (date, Some(time)),
        None => (body, None),
    };

    if date.is_empty() && time.is_none() {
        return Err(ConfigError::invalid_duration(value));
    }

    let mut seconds = sum_components(value, date, DATE_UNITS)?;
    if let Some(time) = time {
        seconds += sum_components(value, time, TIME_UNITS)?;
    }

    if seconds <= 0.0 {
        return Err(ConfigError::NonPositiveDuration {
            value: value.to_string(),
        });
    }

    Duration::try_from_secs_f64(seconds).map_err(|_| ConfigError::invalid_duration(value))
}

/// Sums `<number><unit>` pairs. Units must appear at most once, in table order.
fn sum_components(
    value: &str,
    part: &str,
    units: &[(char, Option<f64>)],
) -> Result<f64, ConfigError> {
    let mut total = 0.0;
    let mut next_unit = 0;
    let mut rest = part;

    while !rest.is_empty() {
        let split = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == ','))
            .ok_or_else(|| ConfigError::invalid_duration(value))?;

        let (number, tail) = rest.split_at(split);
        let mut chars = tail.chars();
        let unit = chars.next().ok_or_else(|| ConfigError::invalid_duration(value))?;
        rest = chars.as_str();

        let amount = parse_amount(number).ok_or_else(|| ConfigError::invalid_duration(value))?;

        let offset = units[next_unit..]
            .iter()
            .position(|(u, _)| *u == unit)
            .ok_or_else(|| ConfigError::invalid_duration(value))?;
        let (_, scale) = units[next_unit + offset];
        next_unit += offset + 1;

        let Some(scale) = scale else {
            return Err(ConfigError::UnsupportedDurationUnit {
                value: value.to_string(),
                unit,
            });
        };

        total += amount * scale;
    }

    Ok(total)
}

fn parse_amount(number: &str) -> Option<f64> {
    if !number.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    number.replacen(',', ".", 1).parse::<f64>().ok()
}
