use crate::conf::{ConfigError, load_config};
use clap::Subcommand;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a config file and print the resolved settings
    Check {
        /// Path to the HCL config file
        #[arg(default_value = "upstat.hcl")]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path } => check(&path),
    }
}

pub fn check(path: &Path) -> anyhow::Result<()> {
    let cfg = load_config(path)?.resolve()?;

    println!("✔ Config loaded successfully");
    println!(
        "✔ period {} ({}s buckets)",
        cfg.period,
        cfg.bucket_width.as_secs_f64()
    );
    println!("✔ format {}", cfg.format);

    Ok(())
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        //---------------------------------------------------------------------
        // Period
        //---------------------------------------------------------------------
        ConfigError::MissingPeriod => Some(
            "Pass --period or set it in the config file.\n\
             \n\
             Example:\n\
             \n\
             analysis {\n\
             \x20 period = \"PT5M\"\n\
             }",
        ),

        ConfigError::InvalidDuration { .. } | ConfigError::NegativeDuration { .. } => Some(
            "Periods are ISO 8601 durations.\n\
             \n\
             Examples:\n\
             \x20 PT1M     1 minute\n\
             \x20 PT5M     5 minutes\n\
             \x20 PT1H     1 hour\n\
             \x20 P1D      1 day",
        ),

        ConfigError::NonPositiveDuration { .. } => {
            Some("The period must be longer than zero, e.g. PT30S or PT5M.")
        }

        ConfigError::UnsupportedDurationUnit { .. } => Some(
            "Years and months have no fixed length.\n\
             \n\
             Express the period in weeks, days, hours, minutes or seconds (e.g. P30D).",
        ),

        //---------------------------------------------------------------------
        // Output
        //---------------------------------------------------------------------
        ConfigError::UnsupportedFormat { .. } => Some(
            "Supported formats are `grouped` (human-readable sections) and `csv`.",
        ),

        //---------------------------------------------------------------------
        // Everything else: no hint
        //---------------------------------------------------------------------
        _ => None,
    }
}
