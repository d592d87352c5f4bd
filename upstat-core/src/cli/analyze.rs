use crate::aggregate::{AggregateError, BucketAggregator};
use crate::conf::{AnalysisConfig, AnalysisSection, ConfigError, load_config};
use crate::ingest::{IngestError, ParseStats, RecordParser};
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Aggregation period as an ISO 8601 duration (e.g. PT5M, PT1H, P1D)
    #[arg(long, value_name = "DURATION")]
    pub period: Option<String>,

    /// Output format: `grouped` (default) or `csv`
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<String>,

    /// HCL config file supplying defaults for --period and --format
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Newline-delimited JSON access log to analyze
    #[arg(value_name = "LOG_FILE")]
    pub log_file: PathBuf,
}

impl AnalyzeArgs {
    /// Merges the optional config file with command-line flags and validates the result.
    pub fn into_request(self) -> Result<AnalyzeRequest, ConfigError> {
        let base = match &self.config {
            Some(path) => load_config(path)?,
            None => AnalysisSection::default(),
        };

        let config = base
            .merge(AnalysisSection {
                period: self.period,
                format: self.format,
            })
            .resolve()?;

        Ok(AnalyzeRequest {
            log_file: self.log_file,
            config,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    pub log_file: PathBuf,
    pub config: AnalysisConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzeSummary {
    pub stats: ParseStats,
    pub records: usize,
    pub buckets: usize,
}

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    #[error("no valid log entries found with upstream timing data")]
    NoRecords { stats: ParseStats },

    #[error("no upstream timing data found after aggregation")]
    NoBuckets,

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

/// Runs the whole pipeline: parse, aggregate, render.
///
/// The rendered report goes to `out`; progress and parse counts go to `diag`.
pub fn analyze(
    req: &AnalyzeRequest,
    out: &mut impl Write,
    diag: &mut impl Write,
) -> Result<AnalyzeSummary, AnalyzeError> {
    let aggregator = BucketAggregator::from_duration(req.config.bucket_width)?;
    let mut parser = RecordParser::new();

    writeln!(diag, "Parsing log file...")?;
    let records = parser
        .parse_file(&req.log_file)?
        .collect::<Result<Vec<_>, _>>()?;

    let stats = parser.stats();
    writeln!(diag, "{stats}")?;

    if records.is_empty() {
        return Err(AnalyzeError::NoRecords { stats });
    }

    writeln!(diag, "Aggregating metrics...")?;
    let buckets = aggregator.aggregate(&records);
    if buckets.is_empty() {
        return Err(AnalyzeError::NoBuckets);
    }

    out.write_all(req.config.format.render(&buckets).as_bytes())?;
    out.flush()?;

    info!(
        path = %req.log_file.display(),
        period = %req.config.period,
        format = %req.config.format,
        records = records.len(),
        buckets = buckets.len(),
        "analysis complete"
    );

    Ok(AnalyzeSummary {
        stats,
        records: records.len(),
        buckets: buckets.len(),
    })
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let req = args.into_request()?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    analyze(&req, &mut stdout.lock(), &mut stderr.lock())?;

    Ok(())
}
