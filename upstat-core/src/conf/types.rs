use crate::conf::duration::parse_duration;
use crate::conf::error::ConfigError;
use crate::render::OutputFormat;
use serde::Deserialize;
use std::time::Duration;

/// On-disk configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub analysis: AnalysisSection,
}

/// Unvalidated analysis settings, as written in a config file or passed on the
/// command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AnalysisSection {
    /// ISO 8601 duration, e.g. "PT5M".
    pub period: Option<String>,

    /// "grouped" or "csv".
    pub format: Option<String>,
}

impl AnalysisSection {
    /// Values set on `overrides` win.
    pub fn merge(self, overrides: AnalysisSection) -> AnalysisSection {
        AnalysisSection {
            period: overrides.period.or(self.period),
            format: overrides.format.or(self.format),
        }
    }

    pub fn resolve(self) -> Result<AnalysisConfig, ConfigError> {
        let period = self.period.ok_or(ConfigError::MissingPeriod)?;
        let bucket_width = parse_duration(&period)?;

        let format = match self.format {
            Some(format) => format.parse::<OutputFormat>()?,
            None => OutputFormat::default(),
        };

        Ok(AnalysisConfig {
            period,
            bucket_width,
            format,
        })
    }
}

/// Validated settings for one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub period: String,
    pub bucket_width: Duration,
    pub format: OutputFormat,
}
