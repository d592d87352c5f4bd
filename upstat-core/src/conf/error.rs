use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO / Parsing
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse HCL in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    // Period
    #[error("no aggregation period given")]
    MissingPeriod,

    #[error("duration must be positive (negative durations not allowed): {value}")]
    NegativeDuration { value: String },

    #[error("duration must be positive, got: {value}")]
    NonPositiveDuration { value: String },

    #[error("unsupported duration unit '{unit}' in '{value}'")]
    UnsupportedDurationUnit { value: String, unit: char },

    #[error("invalid ISO 8601 duration format: '{value}'")]
    InvalidDuration { value: String },

    // Output
    #[error("unsupported output format '{format}'")]
    UnsupportedFormat { format: String },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_duration(value: &str) -> Self {
        Self::InvalidDuration {
            value: value.to_string(),
        }
    }
}
