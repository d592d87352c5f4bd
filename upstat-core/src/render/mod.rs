//! Turns aggregated buckets into text.
//!
//! The set of formats is closed: `grouped` for people, `csv` for machines.
//! [`OutputFormat`]'s `FromStr` impl is the factory and rejects anything else.

mod csv;
mod grouped;
#[cfg(test)]
mod tests;
mod timestamp;

use crate::aggregate::AggregatedBucket;
use crate::conf::ConfigError;
use std::fmt;
use std::str::FromStr;

pub use timestamp::{iso_in, local_iso};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Grouped,
    Csv,
}

impl OutputFormat {
    pub fn supported() -> &'static [&'static str] {
        &["grouped", "csv"]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grouped => "grouped",
            Self::Csv => "csv",
        }
    }

    pub fn render(self, buckets: &[AggregatedBucket]) -> String {
        match self {
            Self::Grouped => grouped::render(buckets),
            Self::Csv => csv::render(buckets),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grouped" => Ok(Self::Grouped),
            "csv" => Ok(Self::Csv),
            other => Err(ConfigError::UnsupportedFormat {
                format: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
